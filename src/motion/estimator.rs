//! Open-loop position estimation.
//!
//! Position is inferred purely from elapsed time against the calibrated
//! rate. There is no feedback sensor: a stalled or obstructed actuator is
//! indistinguishable from normal progress, and the estimate will still
//! report completion once the planned interval elapses. That blindness is
//! inherent to the hardware, not something this module can detect.

use crate::config::units::Instant;

use super::session::SpinSession;

/// Result of a position estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Estimated position in percent.
    ///
    /// Raw linear interpolation: once the interval has elapsed this can
    /// overshoot the target or leave the valid range. `complete` accounts
    /// for that; callers snap to the session target instead of exposing an
    /// overshot value.
    pub position: f64,

    /// Whether travel is finished.
    pub complete: bool,
}

/// Estimate travel progress for a session at the given instant.
///
/// `position = starting + elapsed/interval × (target − starting)`.
///
/// `complete` is true on the exact-target hit, plus two safety nets for
/// numerical edge cases: the elapsed fraction exceeding 1, or the estimate
/// leaving `0..=100`. Range validation proper happens at the request
/// boundary, not here.
///
/// Pure function of the session data and `now`; no side effects. The
/// session's interval is guaranteed non-zero by construction.
pub fn estimate(session: &SpinSession, now: Instant) -> Estimate {
    let elapsed = now.duration_since(session.started_at()) as f64;
    let fraction = elapsed / session.interval_ms() as f64;
    let position = session.starting().value()
        + fraction * (session.target().value() - session.starting().value());

    let complete = position == session.target().value()
        || fraction > 1.0
        || !(0.0..=100.0).contains(&position);

    Estimate { position, complete }
}
