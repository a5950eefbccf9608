//! Actuator signal configuration from TOML.

use serde::Deserialize;

use super::units::DutyCycle;

/// Duty-cycle command values for the actuator boundary.
///
/// The drive is binary-direction: only the two configured extremes and the
/// stop value are ever written, never intermediate speeds.
#[derive(Debug, Clone, Deserialize)]
pub struct ActuatorConfig {
    /// Command meaning "rotate toward fully open".
    #[serde(default = "default_opening_duty")]
    pub opening_duty: DutyCycle,

    /// Command meaning "rotate toward fully closed".
    #[serde(default = "default_closing_duty")]
    pub closing_duty: DutyCycle,

    /// Neutral command used by the optional stop pulse.
    #[serde(default = "default_stop_duty")]
    pub stop_duty: DutyCycle,

    /// Whether a stop pulse must be written before releasing the actuator.
    /// Some continuous-rotation servos latch the last command otherwise.
    #[serde(default)]
    pub stop_pulse_required: bool,

    /// How long the stop pulse is held, in milliseconds.
    #[serde(default = "default_stop_pulse_ms")]
    pub stop_pulse_ms: u32,
}

fn default_opening_duty() -> DutyCycle {
    DutyCycle::FULL_FORWARD
}

fn default_closing_duty() -> DutyCycle {
    DutyCycle::FULL_REVERSE
}

fn default_stop_duty() -> DutyCycle {
    DutyCycle::NEUTRAL
}

fn default_stop_pulse_ms() -> u32 {
    200
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            opening_duty: default_opening_duty(),
            closing_duty: default_closing_duty(),
            stop_duty: default_stop_duty(),
            stop_pulse_required: false,
            stop_pulse_ms: default_stop_pulse_ms(),
        }
    }
}
