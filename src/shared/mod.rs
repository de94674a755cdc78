//! Shared components, resources, events, and states for Pierside.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

/// Fixed per-frame order of the session orchestrator. Configured as a chain
/// by `FishingPlugin`; other domains put their systems into the matching step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStep {
    Movement,
    Abort,
    Timers,
    Start,
    Hit,
    Cook,
    Consume,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT: intents, decoupled from key codes
// ═══════════════════════════════════════════════════════════════════════

/// Rebuilt from scratch every frame by the input domain.
/// Movement fields are levels; everything else is a just-pressed edge.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub move_left: bool,
    pub move_right: bool,
    pub start_fishing: bool,
    pub hit: bool,
    pub interact: bool,
    pub consume: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    /// Secondary walking keys. `None` disables the fallback.
    pub alt_left: Option<KeyCode>,
    pub alt_right: Option<KeyCode>,
    pub start_fishing: KeyCode,
    pub hit: KeyCode,
    pub interact: KeyCode,
    pub consume: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: KeyCode::ArrowLeft,
            move_right: KeyCode::ArrowRight,
            alt_left: Some(KeyCode::KeyA),
            alt_right: Some(KeyCode::KeyD),
            start_fishing: KeyCode::Space,
            hit: KeyCode::ArrowUp,
            interact: KeyCode::Space,
            consume: KeyCode::KeyE,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY: the single fish slot
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FishSlot {
    #[default]
    Empty,
    Caught,
    Cooked,
}

/// Single-slot inventory. The only edges are Empty→Caught, Caught→Cooked and
/// Cooked→Empty; every other request leaves the slot untouched. Each operation
/// reports whether the slot changed.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    slot: FishSlot,
}

impl Inventory {
    pub fn current(&self) -> FishSlot {
        self.slot
    }

    pub fn catch(&mut self) -> bool {
        self.advance(FishSlot::Empty, FishSlot::Caught)
    }

    pub fn cook(&mut self) -> bool {
        self.advance(FishSlot::Caught, FishSlot::Cooked)
    }

    pub fn consume(&mut self) -> bool {
        self.advance(FishSlot::Cooked, FishSlot::Empty)
    }

    fn advance(&mut self, from: FishSlot, to: FishSlot) -> bool {
        if self.slot != from {
            return false;
        }
        self.slot = to;
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER & TRACK
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Default)]
pub struct Player;

/// Horizontal half-extent of an entity, used for edge-to-edge zone checks.
#[derive(Component, Debug, Clone, Copy)]
pub struct Footprint {
    pub half_width: f32,
}

/// A fixed interaction region on the track: centre x plus half-width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub anchor: f32,
    pub half_width: f32,
}

impl Zone {
    pub fn left_edge(&self) -> f32 {
        self.anchor - self.half_width
    }

    pub fn right_edge(&self) -> f32 {
        self.anchor + self.half_width
    }
}

/// Static layout of the pier: where the pole and oven stand and how the
/// player moves between them. Geometry queries live in `world::zones`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLayout {
    pub fishing_spot: Zone,
    pub cooking_station: Zone,
    pub player_half_width: f32,
    pub player_start_x: f32,
    /// Pixels per second.
    pub walk_speed: f32,
    /// Largest edge-to-edge gap that still counts as "next to" a zone.
    pub zone_tolerance: f32,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            fishing_spot: Zone {
                anchor: 483.0,
                half_width: 10.5,
            },
            cooking_station: Zone {
                anchor: 31.0,
                half_width: 10.5,
            },
            player_half_width: 10.5,
            player_start_x: 240.0,
            walk_speed: 100.0,
            zone_tolerance: 0.5,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FISHING CONFIG
// ═══════════════════════════════════════════════════════════════════════

/// Inclusive range of whole milliseconds a random delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Uniform draw in `[min_ms, max_ms]`. A reversed range is read low-to-high.
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        let lo = self.min_ms.min(self.max_ms);
        let hi = self.min_ms.max(self.max_ms);
        Duration::from_millis(rng.gen_range(lo..=hi))
    }

    pub fn contains(&self, delay: Duration) -> bool {
        delay >= Duration::from_millis(self.min_ms) && delay <= Duration::from_millis(self.max_ms)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishingConfig {
    /// Countdown length for a normal session.
    pub base_seconds: u32,
    /// Extra seconds granted when a cooked fish is eaten at session start.
    pub cooked_bonus_seconds: u32,
    /// Cumulative arrow hits needed to land the fish.
    pub hits_to_catch: u32,
    /// Delay before each arrow prompt appears.
    pub spawn_delay_ms: DelayRange,
    /// How long a prompt stays up if nobody hits it.
    pub hide_delay_ms: DelayRange,
}

impl Default for FishingConfig {
    fn default() -> Self {
        Self {
            base_seconds: 10,
            cooked_bonus_seconds: 5,
            hits_to_catch: 3,
            spawn_delay_ms: DelayRange::new(1500, 3000),
            hide_delay_ms: DelayRange::new(500, 1000),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// How a fishing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FishingOutcome {
    /// Enough arrow hits before the countdown ran out.
    Caught,
    /// Countdown reached zero.
    TimedOut,
    /// Player walked away from the pole.
    Aborted,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishingOutcomeEvent {
    pub outcome: FishingOutcome,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 540.0;
pub const SCREEN_HEIGHT: f32 = 200.0;
/// Vertical position of the walking surface.
pub const TRACK_Y: f32 = 0.0;
pub const CONFIG_PATH: &str = "assets/config/pierside.ron";

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_inventory_full_cycle() {
        let mut inventory = Inventory::default();
        assert_eq!(inventory.current(), FishSlot::Empty);
        assert!(inventory.catch());
        assert_eq!(inventory.current(), FishSlot::Caught);
        assert!(inventory.cook());
        assert_eq!(inventory.current(), FishSlot::Cooked);
        assert!(inventory.consume());
        assert_eq!(inventory.current(), FishSlot::Empty);
    }

    #[test]
    fn test_inventory_illegal_edges_are_noops() {
        let mut inventory = Inventory::default();
        assert!(!inventory.cook());
        assert!(!inventory.consume());
        assert_eq!(inventory.current(), FishSlot::Empty);

        inventory.catch();
        assert!(!inventory.catch());
        assert!(!inventory.consume());
        assert_eq!(inventory.current(), FishSlot::Caught);

        inventory.cook();
        assert!(!inventory.catch());
        assert!(!inventory.cook());
        assert_eq!(inventory.current(), FishSlot::Cooked);
    }

    #[test]
    fn test_inventory_random_calls_stay_on_legal_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut inventory = Inventory::default();
        for _ in 0..2000 {
            let before = inventory.current();
            let changed = match rng.gen_range(0..3) {
                0 => inventory.catch(),
                1 => inventory.cook(),
                _ => inventory.consume(),
            };
            let after = inventory.current();
            if changed {
                let legal = matches!(
                    (before, after),
                    (FishSlot::Empty, FishSlot::Caught)
                        | (FishSlot::Caught, FishSlot::Cooked)
                        | (FishSlot::Cooked, FishSlot::Empty)
                );
                assert!(legal, "illegal edge {:?} -> {:?}", before, after);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_delay_range_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = DelayRange::new(1500, 3000);
        for _ in 0..500 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_delay_range_degenerate_and_reversed() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            DelayRange::new(700, 700).sample(&mut rng),
            Duration::from_millis(700)
        );
        let reversed = DelayRange::new(1000, 500);
        let d = reversed.sample(&mut rng);
        assert!(d >= Duration::from_millis(500) && d <= Duration::from_millis(1000));
    }
}
