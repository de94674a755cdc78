use bevy::prelude::*;
use crate::shared::*;

/// Spawn the player entity at the configured start position.
/// Runs once on `OnEnter(GameState::Playing)`.
pub fn spawn_player(
    mut commands: Commands,
    layout: Res<TrackLayout>,
    existing: Query<Entity, With<Player>>,
) {
    // Guard: don't double-spawn if returning to Playing state.
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        // Tag
        Player,
        Footprint {
            half_width: layout.player_half_width,
        },
        PlayerMovement::default(),
        // Z = 10 so the player draws above the fixtures.
        Transform::from_translation(Vec3::new(layout.player_start_x, TRACK_Y, 10.0)),
    ));
}

/// Which way the player last walked. Read by the presentation layer.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerMovement {
    pub facing_left: bool,
}
