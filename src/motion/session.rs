//! Spin session planning and state.
//!
//! A session captures one bounded move: where it started, where it is
//! headed, which direction that is, and the timing data the estimator and
//! watchdog need.

use crate::config::units::{Instant, Percent};
use crate::config::SpinRates;

/// Direction of travel.
///
/// Position increases toward fully closed, so moving to a higher percent is
/// `Closing`. Duty-cycle signal values are mapped from this at the actuator
/// boundary; the state machine never sees raw signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward 0 (fully open).
    Opening,
    /// Toward 100 (fully closed).
    Closing,
}

impl Direction {
    /// Direction of travel from one position toward another.
    ///
    /// Returns `None` when the positions are equal.
    #[inline]
    pub fn toward(from: Percent, to: Percent) -> Option<Self> {
        if to.value() > from.value() {
            Some(Direction::Closing)
        } else if to.value() < from.value() {
            Some(Direction::Opening)
        } else {
            None
        }
    }
}

/// Where the periodic actuator-refresh cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    /// Actuator engaged and spinning.
    Engaged,
    /// Actuator released; waiting out the settle delay before the command
    /// is reissued.
    Settling {
        /// When the actuator was released.
        since: Instant,
    },
}

/// A single bounded move, created when spinning starts and destroyed at
/// stop.
///
/// `interval_ms` is always greater than zero; [`SpinSession::plan`] refuses
/// to create a session that would divide by zero in the estimator.
#[derive(Debug, Clone)]
pub struct SpinSession {
    starting: Percent,
    target: Percent,
    direction: Direction,
    started_at: Instant,
    interval_ms: u64,
    last_refresh: Instant,
    refresh: RefreshPhase,
}

impl SpinSession {
    /// Plan a session from a live position toward a target.
    ///
    /// The travel interval is recomputed here from the live position, never
    /// reused from an earlier session. Returns `None` when there is nothing
    /// to spin for: the positions are equal, or the travel time truncates
    /// to zero milliseconds.
    pub fn plan(from: Percent, to: Percent, rates: &SpinRates, now: Instant) -> Option<Self> {
        let direction = Direction::toward(from, to)?;
        let rate = match direction {
            Direction::Opening => rates.opening,
            Direction::Closing => rates.closing,
        };

        let interval_ms = rate.travel_millis(from.distance_to(to));
        if interval_ms == 0 {
            return None;
        }

        Some(Self {
            starting: from,
            target: to,
            direction,
            started_at: now,
            interval_ms,
            last_refresh: now,
            refresh: RefreshPhase::Engaged,
        })
    }

    /// Position the move started from.
    #[inline]
    pub fn starting(&self) -> Percent {
        self.starting
    }

    /// Position the move is headed to.
    #[inline]
    pub fn target(&self) -> Percent {
        self.target
    }

    /// Direction of travel.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// When the move started.
    #[inline]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Planned travel time in milliseconds (always > 0).
    #[inline]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// When the actuator command was last (re)issued.
    #[inline]
    pub fn last_refresh(&self) -> Instant {
        self.last_refresh
    }

    /// Current refresh phase.
    #[inline]
    pub fn refresh(&self) -> RefreshPhase {
        self.refresh
    }

    /// Record that the actuator was released for a refresh.
    pub(crate) fn begin_settle(&mut self, now: Instant) {
        self.refresh = RefreshPhase::Settling { since: now };
    }

    /// Record that the command was reissued after settling.
    pub(crate) fn mark_refreshed(&mut self, now: Instant) {
        self.last_refresh = now;
        self.refresh = RefreshPhase::Engaged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(ms_open: u32, ms_close: u32) -> SpinRates {
        SpinRates {
            opening: crate::config::MillisPerPercent::new(ms_open),
            closing: crate::config::MillisPerPercent::new(ms_close),
        }
    }

    #[test]
    fn test_direction_toward() {
        let low = Percent::saturating(10.0);
        let high = Percent::saturating(90.0);
        assert_eq!(Direction::toward(low, high), Some(Direction::Closing));
        assert_eq!(Direction::toward(high, low), Some(Direction::Opening));
        assert_eq!(Direction::toward(low, low), None);
    }

    #[test]
    fn test_plan_closing_move() {
        let now = Instant::from_millis(0);
        let session = SpinSession::plan(
            Percent::FULLY_OPEN,
            Percent::saturating(50.0),
            &rates(100, 100),
            now,
        )
        .unwrap();

        assert_eq!(session.direction(), Direction::Closing);
        assert_eq!(session.interval_ms(), 5000);
        assert_eq!(session.starting(), Percent::FULLY_OPEN);
        assert_eq!(session.last_refresh(), now);
        assert_eq!(session.refresh(), RefreshPhase::Engaged);
    }

    #[test]
    fn test_plan_selects_direction_rate() {
        let now = Instant::from_millis(0);
        let session = SpinSession::plan(
            Percent::FULLY_CLOSED,
            Percent::saturating(40.0),
            &rates(120, 90),
            now,
        )
        .unwrap();

        // 60 percent of travel toward open at 120 ms/percent
        assert_eq!(session.direction(), Direction::Opening);
        assert_eq!(session.interval_ms(), 7200);
    }

    #[test]
    fn test_plan_nothing_to_do() {
        let now = Instant::from_millis(0);
        let at = Percent::saturating(33.0);
        assert!(SpinSession::plan(at, at, &rates(100, 100), now).is_none());
    }

    #[test]
    fn test_plan_sub_millisecond_travel() {
        let now = Instant::from_millis(0);
        let from = Percent::saturating(50.0);
        let to = Percent::saturating(50.001);
        assert!(SpinSession::plan(from, to, &rates(100, 100), now).is_none());
    }

    #[test]
    fn test_refresh_bookkeeping() {
        let now = Instant::from_millis(0);
        let mut session = SpinSession::plan(
            Percent::FULLY_OPEN,
            Percent::FULLY_CLOSED,
            &rates(100, 100),
            now,
        )
        .unwrap();

        session.begin_settle(now + 10_000);
        assert_eq!(
            session.refresh(),
            RefreshPhase::Settling { since: now + 10_000 }
        );

        session.mark_refreshed(now + 10_050);
        assert_eq!(session.refresh(), RefreshPhase::Engaged);
        assert_eq!(session.last_refresh(), now + 10_050);
        // travel bookkeeping untouched
        assert_eq!(session.started_at(), now);
        assert_eq!(session.interval_ms(), 10_000);
    }
}
