mod hud;
mod sprites;

use bevy::prelude::*;
use crate::shared::*;

pub use hud::{countdown_label, slot_color, slot_label};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── HUD: visible during Playing state ───
        app.add_systems(
            OnEnter(GameState::Playing),
            (hud::spawn_hud, sprites::spawn_arrow_prompt),
        );
        app.add_systems(OnExit(GameState::Playing), hud::despawn_hud);

        // ─── Presentation reads state after the session step chain ───
        app.add_systems(
            PostUpdate,
            (
                sprites::attach_placeholder_sprites,
                sprites::face_player_sprite,
                sprites::update_arrow_prompt,
                hud::update_countdown_display,
                hud::update_slot_display,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
