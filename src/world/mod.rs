//! World domain plugin for Pierside.
//!
//! Responsible for:
//! - Zone geometry (`zones`)
//! - Placing the fishing pole and the oven on the track

use bevy::prelude::*;

use crate::shared::*;

pub mod zones;

pub use zones::in_zone;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_fixtures);
    }
}

/// The pole at the end of the pier.
#[derive(Component, Debug)]
pub struct FishingPole;

/// The oven at the landward end.
#[derive(Component, Debug)]
pub struct Oven;

fn spawn_fixtures(mut commands: Commands, layout: Res<TrackLayout>) {
    let pole = layout.fishing_spot;
    let oven = layout.cooking_station;

    commands.spawn((
        FishingPole,
        Footprint {
            half_width: pole.half_width,
        },
        Transform::from_xyz(pole.anchor, TRACK_Y, 1.0),
    ));
    commands.spawn((
        Oven,
        Footprint {
            half_width: oven.half_width,
        },
        Transform::from_xyz(oven.anchor, TRACK_Y, 1.0),
    ));

    debug!(
        "[World] Pole at x={} (half {}), oven at x={} (half {})",
        pole.anchor, pole.half_width, oven.anchor, oven.half_width
    );
}
