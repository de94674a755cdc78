//! The arrow prompt that pops up during a fishing session.
//!
//! ```text
//!   armed ──spawn fires──▶ visible ──hit──────▶ armed (hit_count += 1)
//!     ▲                       │
//!     └──────auto-hide fires──┘
//! ```
//!
//! At most one of the two timers is pending at a time, and while a session is
//! running exactly one is. Fires for tokens the challenge no longer holds are
//! ignored.

use rand::Rng;

use crate::clock::{Scheduler, TimerFired, TimerKind, TimerToken};
use crate::shared::*;

#[derive(Debug, Default)]
pub struct ArrowChallenge {
    visible: bool,
    spawn_timer: Option<TimerToken>,
    hide_timer: Option<TimerToken>,
    hit_count: u32,
}

impl ArrowChallenge {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn spawn_timer(&self) -> Option<TimerToken> {
        self.spawn_timer
    }

    pub fn hide_timer(&self) -> Option<TimerToken> {
        self.hide_timer
    }

    pub fn owns(&self, token: TimerToken) -> bool {
        self.spawn_timer == Some(token) || self.hide_timer == Some(token)
    }

    /// True when nothing is visible and no timer is held.
    pub fn is_reset(&self) -> bool {
        !self.visible
            && self.spawn_timer.is_none()
            && self.hide_timer.is_none()
            && self.hit_count == 0
    }

    /// Schedule the next appearance. Does nothing while a prompt is showing or
    /// a spawn is already pending.
    pub fn arm_next_spawn(
        &mut self,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        config: &FishingConfig,
    ) {
        if self.visible || self.spawn_timer.is_some() {
            return;
        }
        let delay = config.spawn_delay_ms.sample(rng);
        self.spawn_timer = Some(scheduler.schedule_once(delay, TimerKind::ChallengeSpawn));
    }

    /// Route a timer firing. Returns `true` if the firing belonged to this
    /// challenge and changed it.
    pub fn on_timer(
        &mut self,
        fired: TimerFired,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        config: &FishingConfig,
    ) -> bool {
        match fired.kind {
            TimerKind::ChallengeSpawn if self.spawn_timer == Some(fired.token) => {
                self.on_spawn_fire(scheduler, rng, config);
                true
            }
            TimerKind::ChallengeHide if self.hide_timer == Some(fired.token) => {
                self.on_auto_hide_fire(scheduler, rng, config);
                true
            }
            _ => false,
        }
    }

    fn on_spawn_fire(
        &mut self,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        config: &FishingConfig,
    ) {
        self.spawn_timer = None;
        self.visible = true;
        let delay = config.hide_delay_ms.sample(rng);
        self.hide_timer = Some(scheduler.schedule_once(delay, TimerKind::ChallengeHide));
    }

    /// The prompt expired without being hit.
    fn on_auto_hide_fire(
        &mut self,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        config: &FishingConfig,
    ) {
        self.hide_timer = None;
        if self.visible {
            self.visible = false;
            self.arm_next_spawn(scheduler, rng, config);
        }
    }

    /// Count a hit if the prompt is showing. Returns whether it counted.
    pub fn register_hit(
        &mut self,
        scheduler: &mut Scheduler,
        rng: &mut impl Rng,
        config: &FishingConfig,
    ) -> bool {
        if !self.visible {
            return false;
        }
        self.hit_count += 1;
        self.visible = false;
        if let Some(token) = self.hide_timer.take() {
            scheduler.cancel(token);
        }
        self.arm_next_spawn(scheduler, rng, config);
        true
    }

    /// Cancel whatever is pending and forget all progress. Safe to call twice.
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        if let Some(token) = self.spawn_timer.take() {
            scheduler.cancel(token);
        }
        if let Some(token) = self.hide_timer.take() {
            scheduler.cancel(token);
        }
        self.visible = false;
        self.hit_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_config() -> FishingConfig {
        FishingConfig {
            spawn_delay_ms: DelayRange::new(2000, 2000),
            hide_delay_ms: DelayRange::new(1000, 1000),
            ..FishingConfig::default()
        }
    }

    fn pending_timers(challenge: &ArrowChallenge) -> usize {
        challenge.spawn_timer().is_some() as usize + challenge.hide_timer().is_some() as usize
    }

    /// Advance the clock and route every firing into the challenge.
    fn run_for(
        challenge: &mut ArrowChallenge,
        scheduler: &mut Scheduler,
        rng: &mut StdRng,
        config: &FishingConfig,
        delta: Duration,
    ) {
        let until = scheduler.now() + delta;
        while let Some(fired) = scheduler.pop_due(until) {
            challenge.on_timer(fired, scheduler, rng, config);
        }
        scheduler.settle(until);
    }

    #[test]
    fn test_spawn_then_auto_hide_then_rearm() {
        let config = fixed_config();
        let mut scheduler = Scheduler::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut challenge = ArrowChallenge::default();

        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        assert!(!challenge.is_visible());
        assert_eq!(pending_timers(&challenge), 1);

        run_for(&mut challenge, &mut scheduler, &mut rng, &config, Duration::from_millis(2000));
        assert!(challenge.is_visible());
        assert!(challenge.spawn_timer().is_none());
        assert!(challenge.hide_timer().is_some());

        run_for(&mut challenge, &mut scheduler, &mut rng, &config, Duration::from_millis(1000));
        assert!(!challenge.is_visible());
        assert_eq!(challenge.hit_count(), 0);
        assert!(challenge.spawn_timer().is_some());
        assert_eq!(pending_timers(&challenge), 1);
    }

    #[test]
    fn test_hit_only_counts_while_visible() {
        let config = fixed_config();
        let mut scheduler = Scheduler::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut challenge = ArrowChallenge::default();

        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        assert!(!challenge.register_hit(&mut scheduler, &mut rng, &config));
        assert_eq!(challenge.hit_count(), 0);

        run_for(&mut challenge, &mut scheduler, &mut rng, &config, Duration::from_millis(2000));
        let hide = challenge.hide_timer().unwrap();
        assert!(challenge.register_hit(&mut scheduler, &mut rng, &config));
        assert_eq!(challenge.hit_count(), 1);
        assert!(!challenge.is_visible());
        assert!(!scheduler.is_pending(hide));
        assert!(challenge.spawn_timer().is_some());

        // A second press on the now-hidden prompt is ignored.
        assert!(!challenge.register_hit(&mut scheduler, &mut rng, &config));
        assert_eq!(challenge.hit_count(), 1);
    }

    #[test]
    fn test_exactly_one_timer_pending_throughout() {
        let config = FishingConfig::default();
        let mut scheduler = Scheduler::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut challenge = ArrowChallenge::default();

        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        for step in 0..400 {
            run_for(&mut challenge, &mut scheduler, &mut rng, &config, Duration::from_millis(50));
            if step % 7 == 0 {
                challenge.register_hit(&mut scheduler, &mut rng, &config);
            }
            assert_eq!(pending_timers(&challenge), 1);
            assert_eq!(scheduler.pending_count(), 1);
            if challenge.is_visible() {
                assert!(challenge.hide_timer().is_some());
                assert!(challenge.spawn_timer().is_none());
            }
        }
    }

    #[test]
    fn test_arming_twice_keeps_single_spawn() {
        let config = FishingConfig::default();
        let mut scheduler = Scheduler::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut challenge = ArrowChallenge::default();

        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        let first = challenge.spawn_timer();
        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        assert_eq!(challenge.spawn_timer(), first);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_delays_stay_in_configured_bounds() {
        let config = FishingConfig::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..300 {
            let mut scheduler = Scheduler::default();
            let mut challenge = ArrowChallenge::default();
            challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);

            let spawn = challenge.spawn_timer().unwrap();
            let spawn_delay = scheduler.time_until(spawn).unwrap();
            assert!(config.spawn_delay_ms.contains(spawn_delay), "spawn {:?}", spawn_delay);

            run_for(&mut challenge, &mut scheduler, &mut rng, &config, spawn_delay);
            let hide = challenge.hide_timer().unwrap();
            let hide_delay = scheduler.time_until(hide).unwrap();
            assert!(config.hide_delay_ms.contains(hide_delay), "hide {:?}", hide_delay);
        }
    }

    #[test]
    fn test_reset_cancels_everything_and_is_idempotent() {
        let config = fixed_config();
        let mut scheduler = Scheduler::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut challenge = ArrowChallenge::default();

        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        run_for(&mut challenge, &mut scheduler, &mut rng, &config, Duration::from_millis(2000));
        challenge.register_hit(&mut scheduler, &mut rng, &config);
        run_for(&mut challenge, &mut scheduler, &mut rng, &config, Duration::from_millis(2000));
        assert!(challenge.is_visible());

        challenge.reset(&mut scheduler);
        assert!(challenge.is_reset());
        assert_eq!(scheduler.pending_count(), 0);

        challenge.reset(&mut scheduler);
        assert!(challenge.is_reset());
    }

    #[test]
    fn test_stale_fire_is_ignored() {
        let config = fixed_config();
        let mut scheduler = Scheduler::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut challenge = ArrowChallenge::default();

        challenge.arm_next_spawn(&mut scheduler, &mut rng, &config);
        let stale = TimerFired {
            token: challenge.spawn_timer().unwrap(),
            kind: TimerKind::ChallengeSpawn,
        };
        challenge.reset(&mut scheduler);

        assert!(!challenge.on_timer(stale, &mut scheduler, &mut rng, &config));
        assert!(challenge.is_reset());
        assert_eq!(scheduler.pending_count(), 0);
    }
}
