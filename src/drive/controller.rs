//! Open-loop drive controller.
//!
//! Owns the actuator, the live spin session, and the persistence store.
//! Every time-sensitive operation takes the current instant as an argument,
//! so the controller itself holds no clock and runs unchanged on hardware,
//! in a host process, and under test.

use embedded_hal::delay::DelayNs;

use crate::config::units::{Instant, Percent};
use crate::config::SpinRates;
use crate::error::Result;
use crate::motion::{self, SpinSession};
use crate::store::{store_position, SettingsStore};

use super::actuator::{Actuator, SignalMap};
use super::state::DriveState;
use super::watchdog::{RefreshPolicy, RefreshStep};

/// Open-loop spin controller for a continuous-rotation drive.
///
/// Generic over:
/// - `ACT`: actuator signal sink (must implement [`Actuator`])
/// - `DELAY`: delay provider for the bounded stop pulse (must implement `DelayNs`)
/// - `STORE`: durable settings store (must implement [`SettingsStore`])
///
/// Position is never measured. While a session is live it is inferred from
/// elapsed time and the calibrated rate; at rest it is whatever the last
/// stop recorded. A mechanically stalled drive therefore goes unnoticed;
/// with no feedback hardware there is nothing to detect it with.
#[derive(Debug)]
pub struct DriveController<ACT, DELAY, STORE>
where
    ACT: Actuator,
    DELAY: DelayNs,
    STORE: SettingsStore,
{
    /// Actuator signal sink.
    actuator: ACT,

    /// Delay provider, used only to hold the optional stop pulse.
    delay: DELAY,

    /// Durable settings store.
    store: STORE,

    /// Calibrated per-direction spin rates.
    rates: SpinRates,

    /// Configured duty command per drive action.
    signals: SignalMap,

    /// Periodic command-refresh policy.
    watchdog: RefreshPolicy,

    /// Stop-pulse hold in milliseconds, when the drive needs one.
    stop_pulse: Option<u32>,

    /// Position the drive last came to rest at.
    position: Percent,

    /// Live move, if one is underway.
    session: Option<SpinSession>,
}

impl<ACT, DELAY, STORE> DriveController<ACT, DELAY, STORE>
where
    ACT: Actuator,
    DELAY: DelayNs,
    STORE: SettingsStore,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        actuator: ACT,
        delay: DELAY,
        store: STORE,
        rates: SpinRates,
        signals: SignalMap,
        watchdog: RefreshPolicy,
        stop_pulse: Option<u32>,
        position: Percent,
    ) -> Self {
        Self {
            actuator,
            delay,
            store,
            rates,
            signals,
            watchdog,
            stop_pulse,
            position,
            session: None,
        }
    }

    /// Start or retarget a move toward `target`.
    ///
    /// A retarget replans from the live estimate, so the move stays
    /// continuous: the drive keeps spinning through the command and only
    /// the bookkeeping restarts. Asking for the position the drive is
    /// already at (or close enough that the travel time rounds to zero)
    /// stops and settles there instead of planning an empty session.
    ///
    /// # Errors
    ///
    /// Returns `DriveError::ActuatorFault` if a signal operation fails, or
    /// a `StoreError` if settling here requires a persist that fails.
    pub fn request_move(&mut self, target: Percent, now: Instant) -> Result<()> {
        if self.session.is_some() {
            let from = self.position_at(now);
            match SpinSession::plan(from, target, &self.rates, now) {
                Some(next) => {
                    // Drop the old command before reissuing; some drive
                    // electronics glitch when the signal changes mid-frame.
                    self.actuator.detach()?;
                    self.engage(next)
                }
                None => self.halt_at(target),
            }
        } else if self.position == target {
            // Already resting there; nothing to command, nothing to persist.
            Ok(())
        } else {
            match SpinSession::plan(self.position, target, &self.rates, now) {
                Some(next) => self.engage(next),
                None => self.snap_to(target),
            }
        }
    }

    /// Advance the controller to `now`.
    ///
    /// Finishes the session once the estimate reaches the target and runs
    /// the command-refresh cadence otherwise. Idle ticks are free.
    ///
    /// # Errors
    ///
    /// Returns `DriveError::ActuatorFault` if a signal operation fails, or
    /// a `StoreError` if the completing persist fails.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let session = match self.session.as_ref() {
            Some(session) => session,
            None => return Ok(()),
        };

        if motion::estimate(session, now).complete {
            let target = session.target();
            self.halt_at(target)
        } else {
            self.refresh_if_due(now)
        }
    }

    /// Stop wherever the drive currently is and persist that position.
    ///
    /// A no-op when already idle.
    ///
    /// # Errors
    ///
    /// Returns `DriveError::ActuatorFault` if releasing the actuator fails,
    /// or a `StoreError` if the persist fails.
    pub fn stop(&mut self, now: Instant) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }
        let resting = self.position_at(now);
        self.halt_at(resting)
    }

    /// Position the drive last came to rest at.
    #[inline]
    pub fn position(&self) -> Percent {
        self.position
    }

    /// Best position estimate as of `now`.
    ///
    /// While spinning this is interpolated from elapsed time; a finished
    /// but not yet ticked session reads as its target, never beyond it.
    pub fn position_at(&self, now: Instant) -> Percent {
        match self.session.as_ref() {
            Some(session) => {
                let reading = motion::estimate(session, now);
                if reading.complete {
                    session.target()
                } else {
                    Percent::saturating(reading.position)
                }
            }
            None => self.position,
        }
    }

    /// Current drive state.
    pub fn state(&self) -> DriveState {
        match self.session.as_ref() {
            Some(session) => session.direction().into(),
            None => DriveState::Idle,
        }
    }

    /// Whether a move is underway.
    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// Target of the move underway, if any.
    pub fn target(&self) -> Option<Percent> {
        self.session.as_ref().map(|session| session.target())
    }

    /// Calibrated spin rates in use.
    #[inline]
    pub fn rates(&self) -> SpinRates {
        self.rates
    }

    /// Borrow the settings store.
    #[inline]
    pub fn store(&self) -> &STORE {
        &self.store
    }

    /// Tear down the controller and hand back its resources.
    pub fn release(self) -> (ACT, DELAY, STORE) {
        (self.actuator, self.delay, self.store)
    }

    /// Issue the direction command and install the session.
    fn engage(&mut self, session: SpinSession) -> Result<()> {
        self.actuator.attach()?;
        self.actuator
            .write(self.signals.for_direction(session.direction()))?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "drive: {} from {} toward {} over {} ms",
            session.direction(),
            session.starting().value(),
            session.target().value(),
            session.interval_ms()
        );

        self.session = Some(session);
        Ok(())
    }

    /// Release the drive, settle the bookkeeping at `resting`, persist.
    fn halt_at(&mut self, resting: Percent) -> Result<()> {
        if let Some(hold_ms) = self.stop_pulse {
            self.actuator.attach()?;
            self.actuator.write(self.signals.stop())?;
            self.delay.delay_ms(hold_ms);
        }
        self.actuator.detach()?;

        self.session = None;
        self.position = resting;
        store_position(&mut self.store, resting)?;

        #[cfg(feature = "defmt")]
        defmt::info!("drive: idle at {}", resting.value());

        Ok(())
    }

    /// Settle at `resting` without ever engaging the actuator.
    ///
    /// Used when the requested travel is too short to time.
    fn snap_to(&mut self, resting: Percent) -> Result<()> {
        self.position = resting;
        store_position(&mut self.store, resting)
    }

    fn refresh_if_due(&mut self, now: Instant) -> Result<()> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return Ok(()),
        };

        match self.watchdog.next_step(session, now) {
            Some(RefreshStep::Release) => {
                self.actuator.detach()?;
                session.begin_settle(now);

                #[cfg(feature = "defmt")]
                defmt::debug!("drive: refresh window opened");
            }
            Some(RefreshStep::Reissue) => {
                self.actuator.attach()?;
                self.actuator
                    .write(self.signals.for_direction(session.direction()))?;
                session.mark_refreshed(now);

                #[cfg(feature = "defmt")]
                defmt::debug!("drive: command reissued");
            }
            None => {}
        }

        Ok(())
    }
}
