//! Per-frame fishing driver.
//!
//! Runs inside the `SessionStep` chain: abort, then timers, then start, then
//! hit. Abort goes first so a player who walks away on the same frame the
//! countdown expires is reported as having left.

use bevy::prelude::*;

use super::session::FishingSession;
use crate::clock::Scheduler;
use crate::shared::*;

/// Where the player stands this frame, if there is a player.
fn player_near_pole(
    layout: &TrackLayout,
    player_query: &Query<(&Transform, &Footprint), With<Player>>,
) -> Option<bool> {
    let (transform, footprint) = player_query.get_single().ok()?;
    Some(layout.near_fishing_spot(transform.translation.x, footprint.half_width))
}

/// End the session as soon as the player is no longer next to the pole.
pub fn abort_when_out_of_zone(
    mut session: ResMut<FishingSession>,
    mut scheduler: ResMut<Scheduler>,
    mut inventory: ResMut<Inventory>,
    layout: Res<TrackLayout>,
    player_query: Query<(&Transform, &Footprint), With<Player>>,
    mut outcome_events: EventWriter<FishingOutcomeEvent>,
) {
    if !session.is_active() {
        return;
    }
    // A missing player counts as having left.
    if player_near_pole(&layout, &player_query).unwrap_or(false) {
        return;
    }
    if let Some(outcome) = session.abort(&mut scheduler, &mut inventory) {
        outcome_events.send(FishingOutcomeEvent { outcome });
    }
}

/// Advance the clock by this frame's delta and hand each due timer to the
/// session, one at a time, in deadline order.
pub fn dispatch_timers(
    time: Res<Time>,
    mut scheduler: ResMut<Scheduler>,
    mut session: ResMut<FishingSession>,
    mut inventory: ResMut<Inventory>,
    config: Res<FishingConfig>,
    mut outcome_events: EventWriter<FishingOutcomeEvent>,
) {
    let until = scheduler.now() + time.delta();
    let mut rng = rand::thread_rng();

    while let Some(fired) = scheduler.pop_due(until) {
        if let Some(outcome) =
            session.on_timer(fired, &mut scheduler, &mut rng, &mut inventory, &config)
        {
            outcome_events.send(FishingOutcomeEvent { outcome });
        }
    }
    scheduler.settle(until);
}

pub fn start_when_requested(
    input: Res<PlayerInput>,
    mut session: ResMut<FishingSession>,
    mut scheduler: ResMut<Scheduler>,
    mut inventory: ResMut<Inventory>,
    config: Res<FishingConfig>,
    layout: Res<TrackLayout>,
    player_query: Query<(&Transform, &Footprint), With<Player>>,
) {
    if !input.start_fishing || !session.can_start(&inventory) {
        return;
    }
    if !player_near_pole(&layout, &player_query).unwrap_or(false) {
        return;
    }
    let mut rng = rand::thread_rng();
    session.start(&mut inventory, &mut scheduler, &mut rng, &config);
}

/// Forward a hit edge, then run the success check.
pub fn forward_hit(
    input: Res<PlayerInput>,
    mut session: ResMut<FishingSession>,
    mut scheduler: ResMut<Scheduler>,
    mut inventory: ResMut<Inventory>,
    config: Res<FishingConfig>,
    mut outcome_events: EventWriter<FishingOutcomeEvent>,
) {
    if !session.is_active() {
        return;
    }

    let outcome = if input.hit {
        let mut rng = rand::thread_rng();
        session.register_hit(&mut scheduler, &mut rng, &mut inventory, &config)
    } else {
        session.check_catch(&mut scheduler, &mut inventory, &config)
    };

    if let Some(outcome) = outcome {
        outcome_events.send(FishingOutcomeEvent { outcome });
    }
}
