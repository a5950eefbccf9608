//! Periodic actuator-command refresh.
//!
//! Some drive electronics quietly stop acting on a command that is not
//! re-asserted, so while a session is live the command is released and
//! reissued on a fixed cadence. The release and the reissue are separate
//! steps with a settle window recorded in the session between them, which
//! keeps the controller from ever blocking through the window.

use crate::config::units::Instant;
use crate::config::WatchdogConfig;
use crate::motion::{RefreshPhase, SpinSession};

/// The next action needed to keep the actuator command fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshStep {
    /// Release the actuator and start the settle window.
    Release,
    /// Settle window elapsed; reissue the direction command.
    Reissue,
}

/// Refresh cadence policy.
///
/// Consulted only with a live session in hand, so a refresh can never be
/// due while the drive is idle.
#[derive(Debug, Clone, Copy)]
pub struct RefreshPolicy {
    period_ms: u64,
    settle_ms: u32,
    enabled: bool,
}

impl RefreshPolicy {
    /// Build the policy from configuration.
    pub fn from_config(config: &WatchdogConfig) -> Self {
        Self {
            period_ms: config.period_millis(),
            settle_ms: config.settle_ms,
            enabled: config.required,
        }
    }

    /// A policy that never asks for a refresh.
    pub fn disabled() -> Self {
        Self {
            period_ms: 0,
            settle_ms: 0,
            enabled: false,
        }
    }

    /// Whether refreshes are performed at all.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Decide the next refresh step for a live session, if one is due.
    ///
    /// The period is measured from the last completed reissue, not from the
    /// release that preceded it.
    pub(crate) fn next_step(&self, session: &SpinSession, now: Instant) -> Option<RefreshStep> {
        if !self.enabled {
            return None;
        }

        match session.refresh() {
            RefreshPhase::Engaged => {
                if now.duration_since(session.last_refresh()) >= self.period_ms {
                    Some(RefreshStep::Release)
                } else {
                    None
                }
            }
            RefreshPhase::Settling { since } => {
                if now.duration_since(since) >= u64::from(self.settle_ms) {
                    Some(RefreshStep::Reissue)
                } else {
                    None
                }
            }
        }
    }
}
