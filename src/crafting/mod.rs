use bevy::prelude::*;
use crate::shared::*;

mod cooking;

pub use cooking::{cook_at_oven, eat_cooked_fish};

pub struct CookingPlugin;

impl Plugin for CookingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .init_resource::<TrackLayout>()
            .add_systems(
                Update,
                (
                    cooking::cook_at_oven.in_set(SessionStep::Cook),
                    cooking::eat_cooked_fish.in_set(SessionStep::Consume),
                ),
            );
    }
}
