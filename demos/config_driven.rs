//! Example: Configuration-driven drive setup.
//!
//! This example demonstrates how to:
//! - Parse and validate drive configuration from TOML
//! - Build a drive controller from the parsed settings
//! - Inspect the per-direction rates derived from calibration
//!
//! Run with: `cargo run --example config_driven --features std`
//! Pass a path argument to load the configuration from disk instead.

use shade_motion::config::parse_config;
use shade_motion::error::{DriveError, Result};
use shade_motion::{
    load_config, Actuator, DriveControllerBuilder, DutyCycle, Instant, MemoryStore, Percent,
};

/// Mock actuator for demonstration.
struct MockActuator;

impl Actuator for MockActuator {
    fn attach(&mut self) -> core::result::Result<(), DriveError> {
        Ok(())
    }

    fn write(&mut self, _duty: DutyCycle) -> core::result::Result<(), DriveError> {
        Ok(())
    }

    fn detach(&mut self) -> core::result::Result<(), DriveError> {
        Ok(())
    }
}

/// Mock delay for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would actually delay
    }
}

fn main() -> Result<()> {
    println!("=== Configuration-Driven Drive Example ===\n");

    // Travel times as measured with a stopwatch during installation
    let toml_content = r#"
[calibration]
seconds_to_open = 12
seconds_to_close = 8

[watchdog]
required = true
refresh_every_secs = 10
settle_ms = 50

[actuator]
opening_duty = 180
closing_duty = 0
stop_duty = 90
stop_pulse_required = true
stop_pulse_ms = 200
"#;

    // A path argument switches to loading from disk
    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading configuration from {path}");
            load_config(&path)?
        }
        None => parse_config(toml_content)?,
    };

    println!(
        "Calibration: {} s to open, {} s to close",
        config.calibration.seconds_to_open, config.calibration.seconds_to_close
    );
    println!(
        "Watchdog: refresh every {} s, settle {} ms",
        config.watchdog.refresh_every_secs, config.watchdog.settle_ms
    );

    let mut drive = DriveControllerBuilder::new()
        .actuator(MockActuator)
        .delay(MockDelay)
        .store(MemoryStore::<64>::new())
        .config(config)
        .build()?;

    println!(
        "\nDerived rates: opening {} ms/%, closing {} ms/%",
        drive.rates().opening.value(),
        drive.rates().closing.value()
    );

    // Close two thirds of the way, stop partway, read the estimate back
    let t0 = Instant::from_millis(0);
    drive.request_move(Percent::new(66.0)?, t0)?;
    println!("\nCommanded move to 66%: state {}", drive.state());

    let t1 = t0 + 2_000;
    println!("Estimate after 2 s: {:.2}%", drive.position_at(t1).value());

    drive.stop(t1)?;
    println!(
        "Stopped: state {}, resting at {:.2}%",
        drive.state(),
        drive.position().value()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
