use bevy::prelude::*;
use crate::shared::*;

// ──────────────────────────────────────────────────────────────────────────────
// OVEN
// ──────────────────────────────────────────────────────────────────────────────

/// Cook the caught fish when the player stands at the oven and interacts.
/// Anything else (empty slot, already cooked, wrong place) is ignored.
pub fn cook_at_oven(
    input: Res<PlayerInput>,
    layout: Res<TrackLayout>,
    mut inventory: ResMut<Inventory>,
    player_query: Query<(&Transform, &Footprint), With<Player>>,
) {
    if !input.interact || inventory.current() != FishSlot::Caught {
        return;
    }
    let Ok((transform, footprint)) = player_query.get_single() else {
        return;
    };
    if !layout.near_cooking_station(transform.translation.x, footprint.half_width) {
        return;
    }

    if inventory.cook() {
        info!("[Cooking] Fish cooked at x={:.1}", transform.translation.x);
    }
}

/// Eat the cooked fish anywhere on the track.
pub fn eat_cooked_fish(input: Res<PlayerInput>, mut inventory: ResMut<Inventory>) {
    if !input.consume {
        return;
    }
    if inventory.consume() {
        info!("[Cooking] Cooked fish eaten");
    } else {
        debug!("[Cooking] Nothing cooked to eat ({:?})", inventory.current());
    }
}
