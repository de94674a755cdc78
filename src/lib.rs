//! Pierside library crate. Re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual game entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can import game types, systems, and resources without needing a
//! window or GPU.

pub mod shared;
pub mod clock;
pub mod input;
pub mod world;
pub mod player;
pub mod crafting;
pub mod fishing;
pub mod ui;
pub mod data;
