//! Tick scheduling for the game loop.
//!
//! The scheduler owns no game state. It is polled from the front-end's event
//! loop with the current instant and answers with the `dt` to feed into one
//! tick, or `None` when nothing is due. At most one tick is delivered per
//! poll: a late poll never replays the ticks it missed.

use crate::core::constants::MAX_FRAME_DT_MS;
use std::time::{Duration, Instant};

/// How a game wants to be clocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Discrete-step games: one tick per fixed wall-clock interval.
    Fixed(Duration),
    /// Continuous games: one tick per display refresh with the measured delta.
    PerFrame,
    /// Turn-based games: no ticks, only input and deferred tasks.
    EventDriven,
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    cadence: Cadence,
    running: bool,
    /// Instant of the last delivered tick (or of `start` before the first one).
    anchor: Option<Instant>,
    /// Fixed cadence only: when the next tick becomes due.
    next_due: Option<Instant>,
}

impl TickScheduler {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            running: false,
            anchor: None,
            next_due: None,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin scheduling. Starting an already running scheduler is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.anchor = Some(now);
        self.next_due = match self.cadence {
            Cadence::Fixed(interval) => Some(now + interval),
            Cadence::PerFrame | Cadence::EventDriven => None,
        };
    }

    /// Cancel every pending tick. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.anchor = None;
        self.next_due = None;
    }

    /// Re-arm a fixed cadence with a new interval, measured from the last
    /// delivered tick. Ignored for the other cadences.
    pub fn set_interval(&mut self, interval: Duration) {
        let Cadence::Fixed(current) = self.cadence else {
            return;
        };
        if current == interval {
            return;
        }
        self.cadence = Cadence::Fixed(interval);
        if let Some(anchor) = self.anchor {
            self.next_due = Some(anchor + interval);
        }
    }

    /// Deliver the next tick if one is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        match self.cadence {
            Cadence::Fixed(interval) => {
                let due = self.next_due?;
                if now < due {
                    return None;
                }
                // Fell more than a whole interval behind: resync on `now`
                // instead of firing a burst of catch-up ticks.
                let base = if now.duration_since(due) >= interval {
                    now
                } else {
                    due
                };
                self.anchor = Some(base);
                self.next_due = Some(base + interval);
                Some(interval)
            }
            Cadence::PerFrame => {
                let last = self.anchor?;
                let dt = now.saturating_duration_since(last);
                if dt.is_zero() {
                    return None;
                }
                self.anchor = Some(now);
                Some(dt.min(Duration::from_millis(MAX_FRAME_DT_MS)))
            }
            Cadence::EventDriven => None,
        }
    }

    /// How long the caller may sleep before the next tick could be due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        match self.cadence {
            Cadence::Fixed(_) => self.next_due.map(|due| due.saturating_duration_since(now)),
            Cadence::PerFrame => Some(Duration::ZERO),
            Cadence::EventDriven => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fixed_cadence_delivers_nominal_interval() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::Fixed(ms(150)));
        sched.start(t0);

        assert_eq!(sched.poll(t0 + ms(100)), None);
        assert_eq!(sched.poll(t0 + ms(160)), Some(ms(150)));
        // Already consumed; next due at 300ms
        assert_eq!(sched.poll(t0 + ms(200)), None);
        assert_eq!(sched.poll(t0 + ms(300)), Some(ms(150)));
    }

    #[test]
    fn test_fixed_cadence_never_bursts() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::Fixed(ms(100)));
        sched.start(t0);

        // A whole second late: exactly one tick, then resync
        assert!(sched.poll(t0 + ms(1000)).is_some());
        assert_eq!(sched.poll(t0 + ms(1000)), None);
        assert_eq!(sched.poll(t0 + ms(1050)), None);
        assert!(sched.poll(t0 + ms(1100)).is_some());
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::Fixed(ms(100)));
        sched.start(t0);
        sched.stop();

        assert_eq!(sched.poll(t0 + ms(500)), None);
        assert!(!sched.is_running());

        // Idempotent
        sched.stop();
        assert_eq!(sched.poll(t0 + ms(900)), None);
    }

    #[test]
    fn test_restart_after_stop_measures_from_new_start() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::Fixed(ms(100)));
        sched.start(t0);
        sched.stop();
        sched.start(t0 + ms(1000));

        assert_eq!(sched.poll(t0 + ms(1050)), None);
        assert!(sched.poll(t0 + ms(1100)).is_some());
    }

    #[test]
    fn test_per_frame_delivers_measured_delta() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::PerFrame);
        sched.start(t0);

        assert_eq!(sched.poll(t0 + ms(17)), Some(ms(17)));
        assert_eq!(sched.poll(t0 + ms(33)), Some(ms(16)));
        // Same instant twice: nothing elapsed, nothing delivered
        assert_eq!(sched.poll(t0 + ms(33)), None);
    }

    #[test]
    fn test_per_frame_delta_is_clamped() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::PerFrame);
        sched.start(t0);

        assert_eq!(sched.poll(t0 + ms(5000)), Some(ms(MAX_FRAME_DT_MS)));
    }

    #[test]
    fn test_set_interval_rearms_from_last_tick() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::Fixed(ms(150)));
        sched.start(t0);
        assert!(sched.poll(t0 + ms(150)).is_some());

        sched.set_interval(ms(140));
        assert_eq!(sched.cadence(), Cadence::Fixed(ms(140)));
        assert_eq!(sched.poll(t0 + ms(289)), None);
        assert_eq!(sched.poll(t0 + ms(290)), Some(ms(140)));
    }

    #[test]
    fn test_event_driven_never_ticks() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new(Cadence::EventDriven);
        sched.start(t0);
        assert!(sched.is_running());
        assert_eq!(sched.poll(t0 + ms(10_000)), None);
        assert_eq!(sched.time_until_next(t0), None);
    }
}
