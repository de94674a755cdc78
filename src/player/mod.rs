mod movement;
mod spawn;

use bevy::prelude::*;
use crate::shared::*;

pub use movement::{player_movement, step_position, walk_direction};
pub use spawn::{spawn_player, PlayerMovement};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackLayout>()
            .init_resource::<PlayerInput>();

        // -- Spawn player when we enter Playing --
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);

        // -- First step of every frame: walk before any zone check --
        app.add_systems(
            Update,
            movement::player_movement.in_set(SessionStep::Movement),
        );
    }
}
