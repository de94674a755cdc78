use bevy::prelude::*;

use crate::clock::Scheduler;
use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
mod challenge;
mod orchestrator;
mod session;

pub use challenge::*;
pub use orchestrator::*;
pub use session::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct FishingPlugin;

impl Plugin for FishingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<FishingSession>()
            .init_resource::<Scheduler>()
            .init_resource::<Inventory>()
            .init_resource::<FishingConfig>()
            .init_resource::<TrackLayout>()
            .add_event::<FishingOutcomeEvent>()
            // One fixed order for the whole frame, shared with movement and cooking
            .configure_sets(
                Update,
                (
                    SessionStep::Movement,
                    SessionStep::Abort,
                    SessionStep::Timers,
                    SessionStep::Start,
                    SessionStep::Hit,
                    SessionStep::Cook,
                    SessionStep::Consume,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    orchestrator::abort_when_out_of_zone.in_set(SessionStep::Abort),
                    orchestrator::dispatch_timers.in_set(SessionStep::Timers),
                    orchestrator::start_when_requested.in_set(SessionStep::Start),
                    orchestrator::forward_hit.in_set(SessionStep::Hit),
                ),
            );
    }
}
