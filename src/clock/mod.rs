//! Cooperative timer service.
//!
//! Every timer lives here and is addressed by the [`TimerToken`] returned when
//! it was scheduled. Nothing fires on its own: the frame driver advances the
//! clock by the frame delta and pulls due timers out one at a time with
//! [`Scheduler::pop_due`], soonest first. Because the handler for one firing
//! runs before the next one is popped, a handler that cancels or schedules
//! timers sees a consistent view of what is still pending.
//!
//! Each pending entry wraps a one-shot [`Timer`]. Recurring timers are reset
//! when they fire instead of using `TimerMode::Repeating`, whose wrap-around
//! would swallow a firing that lands exactly on a step boundary.
//!
//! Cancelled tokens are removed immediately, so a cancelled timer can never be
//! returned by `pop_due`.

use std::time::Duration;

use bevy::prelude::*;

/// What a timer is for. Carried back on every firing so the owner can route it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// The 1 Hz fishing countdown.
    Countdown,
    /// Delay before the next arrow prompt appears.
    ChallengeSpawn,
    /// Lifetime of a visible arrow prompt.
    ChallengeHide,
}

/// Handle to a scheduled timer. Tokens are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// A single firing handed back by [`Scheduler::pop_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub token: TimerToken,
    pub kind: TimerKind,
}

#[derive(Debug, Clone)]
struct PendingTimer {
    token: TimerToken,
    kind: TimerKind,
    timer: Timer,
    repeating: bool,
}

#[derive(Resource, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_token: u64,
    pending: Vec<PendingTimer>,
}

impl Scheduler {
    /// Total time the scheduler has been advanced by.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a one-shot timer `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, kind: TimerKind) -> TimerToken {
        self.push(delay, kind, false)
    }

    /// Schedule a recurring timer that first fires one `period` from now.
    /// A zero period is bumped to one millisecond so the timer cannot spin.
    pub fn schedule_repeating(&mut self, period: Duration, kind: TimerKind) -> TimerToken {
        self.push(period.max(Duration::from_millis(1)), kind, true)
    }

    fn push(&mut self, delay: Duration, kind: TimerKind, repeating: bool) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending.push(PendingTimer {
            token,
            kind,
            timer: Timer::new(delay, TimerMode::Once),
            repeating,
        });
        token
    }

    /// Cancel a timer. Returns `false` if it had already fired (one-shot),
    /// was already cancelled, or never existed; that case is a no-op.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.token != token);
        self.pending.len() != before
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|t| t.token == token)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Time left until `token` next fires, or `None` if it is not pending.
    pub fn time_until(&self, token: TimerToken) -> Option<Duration> {
        self.pending
            .iter()
            .find(|t| t.token == token)
            .map(|t| t.timer.remaining())
    }

    /// Pop the soonest timer due at or before `until`, ticking every pending
    /// timer up to that moment. Recurring timers restart for another period.
    /// Ties are broken by scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerFired> {
        let window = until.saturating_sub(self.now);
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.timer.remaining() <= window)
            .min_by_key(|(_, t)| (t.timer.remaining(), t.token))
            .map(|(i, _)| i)?;

        let step = self.pending[index].timer.remaining();
        self.tick_all(step);

        let fired = if self.pending[index].repeating {
            let entry = &mut self.pending[index];
            entry.timer.reset();
            TimerFired {
                token: entry.token,
                kind: entry.kind,
            }
        } else {
            let entry = self.pending.swap_remove(index);
            TimerFired {
                token: entry.token,
                kind: entry.kind,
            }
        };
        Some(fired)
    }

    /// Move the clock forward to `until` once every due timer has been popped.
    pub fn settle(&mut self, until: Duration) {
        let step = until.saturating_sub(self.now);
        self.tick_all(step);
    }

    fn tick_all(&mut self, step: Duration) {
        for entry in &mut self.pending {
            entry.timer.tick(step);
        }
        self.now += step;
    }
}
