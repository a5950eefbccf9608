//! Host-side simulation of a complete spin session.
//!
//! Demonstrates building a drive controller against mock hardware, issuing
//! transport-style commands, and watching the open-loop estimate converge
//! on the target. A simulated clock stands in for the firmware tick loop.
//!
//! Run with: `cargo run --example host_sim --features std`

use shade_motion::error::DriveError;
use shade_motion::{
    handle, Actuator, DriveControllerBuilder, DutyCycle, Instant, MemoryStore, SystemConfig,
};

/// Actuator that narrates every command instead of driving hardware.
struct ConsoleActuator;

impl Actuator for ConsoleActuator {
    fn attach(&mut self) -> Result<(), DriveError> {
        println!("  [actuator] attach");
        Ok(())
    }

    fn write(&mut self, duty: DutyCycle) -> Result<(), DriveError> {
        println!("  [actuator] write duty {}", duty.value());
        Ok(())
    }

    fn detach(&mut self) -> Result<(), DriveError> {
        println!("  [actuator] detach");
        Ok(())
    }
}

/// Mock delay provider for demonstration.
struct HostDelay;

impl embedded_hal::delay::DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real firmware this would block on a hardware timer
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

fn main() {
    println!("=== Shade Motion Host Simulation ===\n");

    let mut drive = DriveControllerBuilder::new()
        .actuator(ConsoleActuator)
        .delay(HostDelay)
        .store(MemoryStore::<64>::new())
        .config(SystemConfig::default())
        .build()
        .expect("Failed to build drive");

    println!(
        "Drive ready at {}% with rates: opening {} ms/%, closing {} ms/%\n",
        drive.position().value(),
        drive.rates().opening.value(),
        drive.rates().closing.value()
    );

    // Transport-style command script against a simulated clock. The retarget
    // at t=4000 lands mid-flight and replans from the live estimate.
    let script: &[(u64, &str)] = &[
        (0, "/set?position=50"),
        (1_000, "/state"),
        (2_500, "/position"),
        (4_000, "/set?position=20"),
        (5_000, "/position"),
        (9_000, "/state"),
    ];

    for &(at_ms, path) in script {
        let now = Instant::from_millis(at_ms);
        drive.tick(now).expect("tick failed");

        let response = handle(&mut drive, path, now);
        println!(
            "t={:>5} ms  GET {:<18} -> {} {}",
            at_ms,
            path,
            response.status(),
            response.body()
        );
    }

    let now = Instant::from_millis(10_000);
    drive.tick(now).expect("tick failed");

    println!("\nFinal state: {}", drive.state());
    println!("Resting position: {}%", drive.position().value());
    println!("Store commits: {}", drive.store().commit_count());

    println!("\n=== Simulation Complete ===");
}
