//! Fishing session state machine.
//!
//! ```text
//!          start (in zone, slot != Caught)
//!   Idle ─────────────────────────────────▶ Active
//!    ▲                                        │
//!    ├──── hit_count == hits_to_catch ────────┤  Caught  (slot: Empty → Caught)
//!    ├──── countdown reaches 0 ───────────────┤  TimedOut
//!    └──── player leaves the zone ────────────┘  Aborted
//! ```
//!
//! Every exit goes through [`FishingSession::finish`], which cancels the
//! countdown and resets the challenge before returning. A second exit on an
//! already idle session reports nothing.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use super::challenge::ArrowChallenge;
use crate::clock::{Scheduler, TimerFired, TimerKind, TimerToken};
use crate::shared::*;

const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SessionPhase {
    #[default]
    Idle,
    Active,
}

/// Proof that a session is listening for hit intents. Created on start,
/// dropped on every exit; hits are only forwarded while one is held.
#[derive(Debug)]
pub struct HitSubscription(());

#[derive(Resource, Debug, Default)]
pub struct FishingSession {
    phase: SessionPhase,
    remaining_seconds: Option<u32>,
    countdown: Option<TimerToken>,
    hits: Option<HitSubscription>,
    challenge: ArrowChallenge,
}

impl FishingSession {
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Seconds left on the countdown; `None` while idle.
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    pub fn challenge(&self) -> &ArrowChallenge {
        &self.challenge
    }

    pub fn is_listening_for_hits(&self) -> bool {
        self.hits.is_some()
    }

    pub fn countdown_timer(&self) -> Option<TimerToken> {
        self.countdown
    }

    /// Whether a session could start right now, ignoring zone and intent.
    pub fn can_start(&self, inventory: &Inventory) -> bool {
        !self.is_active() && inventory.current() != FishSlot::Caught
    }

    /// Idle → Active. A cooked fish in the slot is eaten for bonus time.
    /// Returns `false` (and changes nothing) when a session is already running
    /// or a caught fish is still waiting to be cooked.
    pub fn start(
        &mut self,
        inventory: &mut Inventory,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        config: &FishingConfig,
    ) -> bool {
        if !self.can_start(inventory) {
            return false;
        }

        let mut seconds = config.base_seconds.max(1);
        if inventory.current() == FishSlot::Cooked {
            seconds = seconds.saturating_add(config.cooked_bonus_seconds);
            inventory.consume();
        }

        // Leftovers from a previous session must never survive into this one.
        self.challenge.reset(scheduler);

        self.phase = SessionPhase::Active;
        self.remaining_seconds = Some(seconds);
        self.countdown =
            Some(scheduler.schedule_repeating(COUNTDOWN_PERIOD, TimerKind::Countdown));
        self.challenge.arm_next_spawn(scheduler, rng, config);
        self.hits = Some(HitSubscription(()));

        info!("[Fishing] Session started with {}s on the clock", seconds);
        true
    }

    /// Route a timer firing. Fires for tokens this session does not hold are
    /// dropped.
    pub fn on_timer(
        &mut self,
        fired: TimerFired,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        inventory: &mut Inventory,
        config: &FishingConfig,
    ) -> Option<FishingOutcome> {
        if !self.is_active() {
            debug!("[Fishing] Ignoring {:?} fire on idle session", fired.kind);
            return None;
        }

        if self.countdown == Some(fired.token) {
            return self.tick_countdown(scheduler, inventory);
        }

        if self.challenge.owns(fired.token) {
            self.challenge.on_timer(fired, scheduler, rng, config);
            return None;
        }

        debug!("[Fishing] Ignoring stale {:?} fire", fired.kind);
        None
    }

    fn tick_countdown(
        &mut self,
        scheduler: &mut Scheduler,
        inventory: &mut Inventory,
    ) -> Option<FishingOutcome> {
        let remaining = self.remaining_seconds?.saturating_sub(1);
        self.remaining_seconds = Some(remaining);
        if remaining == 0 {
            return self.finish(FishingOutcome::TimedOut, scheduler, inventory);
        }
        None
    }

    /// Forward a hit intent. Lands the fish when the hit count reaches the
    /// configured requirement.
    pub fn register_hit(
        &mut self,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        inventory: &mut Inventory,
        config: &FishingConfig,
    ) -> Option<FishingOutcome> {
        if !self.is_listening_for_hits() {
            return None;
        }
        if !self.challenge.register_hit(scheduler, rng, config) {
            debug!("[Fishing] Hit with no arrow showing");
            return None;
        }
        debug!(
            "[Fishing] Arrow hit {}/{}",
            self.challenge.hit_count(),
            config.hits_to_catch
        );
        self.check_catch(scheduler, inventory, config)
    }

    /// Success check, also run by the orchestrator every frame.
    pub fn check_catch(
        &mut self,
        scheduler: &mut Scheduler,
        inventory: &mut Inventory,
        config: &FishingConfig,
    ) -> Option<FishingOutcome> {
        if self.is_active() && self.challenge.hit_count() >= config.hits_to_catch.max(1) {
            return self.finish(FishingOutcome::Caught, scheduler, inventory);
        }
        None
    }

    /// The player walked away from the pole.
    pub fn abort(
        &mut self,
        scheduler: &mut Scheduler,
        inventory: &mut Inventory,
    ) -> Option<FishingOutcome> {
        self.finish(FishingOutcome::Aborted, scheduler, inventory)
    }

    /// Active → Idle. Cancels every owned timer before applying the outcome.
    fn finish(
        &mut self,
        outcome: FishingOutcome,
        scheduler: &mut Scheduler,
        inventory: &mut Inventory,
    ) -> Option<FishingOutcome> {
        if !self.is_active() {
            return None;
        }

        if let Some(token) = self.countdown.take() {
            scheduler.cancel(token);
        }
        self.challenge.reset(scheduler);
        self.hits = None;
        self.remaining_seconds = None;
        self.phase = SessionPhase::Idle;

        if outcome == FishingOutcome::Caught {
            inventory.catch();
        }

        info!("[Fishing] Session ended: {:?}", outcome);
        Some(outcome)
    }
}
