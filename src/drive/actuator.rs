//! Actuator signaling.
//!
//! The controller talks to the drive through the [`Actuator`] trait using
//! validated [`DutyCycle`] commands. [`SignalMap`] resolves a travel
//! direction to its configured duty value once, at this boundary, so the
//! session and estimator code never see raw signal numbers.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::units::DutyCycle;
use crate::config::ActuatorConfig;
use crate::error::DriveError;
use crate::motion::Direction;

/// Hobby-servo pulse width range in microseconds.
const PULSE_MIN_US: u32 = 500;
const PULSE_MAX_US: u32 = 2500;

/// PWM period in microseconds (50 Hz frame).
const PERIOD_US: u32 = 20_000;

/// Signal sink for a continuous-rotation drive.
///
/// Mirrors the attach/write/detach lifecycle of RC servo control: `attach`
/// brings the signal output online, `write` issues a duty command, and
/// `detach` stops the signal entirely so the drive coasts free.
pub trait Actuator {
    /// Bring the signal output online. Must be idempotent.
    fn attach(&mut self) -> Result<(), DriveError>;

    /// Issue a duty-cycle command.
    fn write(&mut self, duty: DutyCycle) -> Result<(), DriveError>;

    /// Stop emitting the signal so the drive stops acting on commands.
    fn detach(&mut self) -> Result<(), DriveError>;
}

/// Duty values resolved from configuration, one per drive command.
#[derive(Debug, Clone, Copy)]
pub struct SignalMap {
    opening: DutyCycle,
    closing: DutyCycle,
    stop: DutyCycle,
}

impl SignalMap {
    /// Resolve the configured duty extremes.
    pub fn from_config(config: &ActuatorConfig) -> Self {
        Self {
            opening: config.opening_duty,
            closing: config.closing_duty,
            stop: config.stop_duty,
        }
    }

    /// Duty command for spinning in the given direction.
    #[inline]
    pub fn for_direction(&self, direction: Direction) -> DutyCycle {
        match direction {
            Direction::Opening => self.opening,
            Direction::Closing => self.closing,
        }
    }

    /// Duty command for holding still.
    #[inline]
    pub fn stop(&self) -> DutyCycle {
        self.stop
    }
}

/// [`Actuator`] adapter over an `embedded-hal` PWM channel.
///
/// Maps duty commands onto standard hobby-servo pulses: 500 µs at command 0
/// up to 2500 µs at command 180, inside a 20 ms frame. Detaching sets the
/// duty to zero, which stops pulse generation; servo electronics treat a
/// missing pulse train as a released drive.
pub struct PwmActuator<PWM>
where
    PWM: SetDutyCycle,
{
    pwm: PWM,
    max_duty: u16,
}

impl<PWM> PwmActuator<PWM>
where
    PWM: SetDutyCycle,
{
    /// Wrap a configured PWM channel.
    ///
    /// The channel must already be set up for a 20 ms period (50 Hz); the
    /// duty resolution is queried here and cached.
    pub fn new(pwm: PWM) -> Self {
        let max_duty = pwm.max_duty_cycle();
        Self { pwm, max_duty }
    }

    /// Tear down the adapter and hand the PWM channel back.
    pub fn release(self) -> PWM {
        self.pwm
    }

    fn duty_ticks(&self, duty: DutyCycle) -> u16 {
        let span = PULSE_MAX_US - PULSE_MIN_US;
        let pulse_us = PULSE_MIN_US + span * u32::from(duty.value()) / u32::from(DutyCycle::MAX);
        ((u64::from(pulse_us) * u64::from(self.max_duty)) / u64::from(PERIOD_US)) as u16
    }
}

impl<PWM> Actuator for PwmActuator<PWM>
where
    PWM: SetDutyCycle,
{
    fn attach(&mut self) -> Result<(), DriveError> {
        // Nothing to bring up: the channel is live once configured, and
        // pulses only flow after the first write.
        Ok(())
    }

    fn write(&mut self, duty: DutyCycle) -> Result<(), DriveError> {
        let ticks = self.duty_ticks(duty);
        self.pwm
            .set_duty_cycle(ticks)
            .map_err(|_| DriveError::ActuatorFault)
    }

    fn detach(&mut self) -> Result<(), DriveError> {
        self.pwm
            .set_duty_cycle(0)
            .map_err(|_| DriveError::ActuatorFault)
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::pwm::{Mock as PwmMock, Transaction as PwmTransaction};

    use super::*;

    #[test]
    fn test_signal_map_resolution() {
        let map = SignalMap::from_config(&ActuatorConfig::default());
        assert_eq!(map.for_direction(Direction::Opening), DutyCycle::FULL_FORWARD);
        assert_eq!(map.for_direction(Direction::Closing), DutyCycle::FULL_REVERSE);
        assert_eq!(map.stop(), DutyCycle::NEUTRAL);
    }

    #[test]
    fn test_pwm_pulse_mapping() {
        // 20_000 ticks over a 20 ms frame makes one tick one microsecond,
        // so commands 0/90/180 land at 500/1500/2500 us pulses.
        let expectations = [
            PwmTransaction::max_duty_cycle(20_000),
            PwmTransaction::set_duty_cycle(500),
            PwmTransaction::set_duty_cycle(1500),
            PwmTransaction::set_duty_cycle(2500),
        ];
        let mut pwm = PwmMock::new(&expectations);

        let mut actuator = PwmActuator::new(pwm.clone());
        actuator.write(DutyCycle::FULL_REVERSE).unwrap();
        actuator.write(DutyCycle::NEUTRAL).unwrap();
        actuator.write(DutyCycle::FULL_FORWARD).unwrap();

        pwm.done();
    }

    #[test]
    fn test_detach_stops_pulses() {
        let expectations = [
            PwmTransaction::max_duty_cycle(20_000),
            PwmTransaction::set_duty_cycle(0),
        ];
        let mut pwm = PwmMock::new(&expectations);

        let mut actuator = PwmActuator::new(pwm.clone());
        actuator.attach().unwrap();
        actuator.detach().unwrap();

        pwm.done();
    }
}
