//! Command routing against the drive controller.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::config::units::{Instant, Percent};
use crate::drive::{Actuator, DriveController, DriveState};
use crate::store::SettingsStore;

use super::request::Command;

/// Outcome of handling a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// 200 with the live position estimate.
    Position(f64),
    /// 200 with the drive state name.
    State(DriveState),
    /// 204, command acknowledged with no payload.
    Accepted,
    /// 404, unknown route.
    NotFound,
}

impl Response {
    /// HTTP-style status code for this response.
    pub const fn status(&self) -> u16 {
        match self {
            Response::Position(_) | Response::State(_) => 200,
            Response::Accepted => 204,
            Response::NotFound => 404,
        }
    }

    /// Render the response body.
    ///
    /// Position renders as a plain decimal number and state as its name;
    /// the other responses carry no body.
    pub fn body(&self) -> heapless::String<32> {
        let mut body = heapless::String::new();
        match self {
            Response::Position(position) => {
                let _ = write!(body, "{}", position);
            }
            Response::State(state) => {
                let _ = body.push_str(state.as_str());
            }
            Response::Accepted | Response::NotFound => {}
        }
        body
    }
}

/// Handle one request path against the controller.
///
/// `set` is fire-and-forget: the requester gets the acknowledgment whether
/// or not the move was accepted, so an out-of-range target or a failed
/// persist never surfaces here. Position reads reflect the live estimate
/// at `now`.
pub fn handle<ACT, DELAY, STORE>(
    drive: &mut DriveController<ACT, DELAY, STORE>,
    path: &str,
    now: Instant,
) -> Response
where
    ACT: Actuator,
    DELAY: DelayNs,
    STORE: SettingsStore,
{
    match Command::parse(path) {
        Some(Command::Position) => Response::Position(drive.position_at(now).value()),
        Some(Command::State) => Response::State(drive.state()),
        Some(Command::Set(value)) => {
            if let Some(target) = value.and_then(|v| Percent::new(v).ok()) {
                let _ = drive.request_move(target, now);
            }
            Response::Accepted
        }
        None => Response::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::DutyCycle;
    use crate::drive::DriveControllerBuilder;
    use crate::error::DriveError;
    use crate::store::MemoryStore;

    struct NullActuator;

    impl Actuator for NullActuator {
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

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn controller() -> DriveController<NullActuator, NoopDelay, MemoryStore> {
        DriveControllerBuilder::new()
            .actuator(NullActuator)
            .delay(NoopDelay)
            .store(MemoryStore::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_set_then_live_position_read() {
        let mut drive = controller();
        let t0 = Instant::from_millis(0);

        let response = handle(&mut drive, "/set?position=50", t0);
        assert_eq!(response, Response::Accepted);
        assert_eq!(response.status(), 204);
        assert_eq!(response.body(), "");

        let response = handle(&mut drive, "/position", t0 + 2_500);
        assert_eq!(response, Response::Position(25.0));
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "25");
    }

    #[test]
    fn test_state_reporting() {
        let mut drive = controller();
        let t0 = Instant::from_millis(0);

        assert_eq!(
            handle(&mut drive, "/state", t0),
            Response::State(DriveState::Idle)
        );

        handle(&mut drive, "/set?position=100", t0);
        let response = handle(&mut drive, "/state", t0 + 1_000);
        assert_eq!(response, Response::State(DriveState::Closing));
        assert_eq!(response.body(), "Closing");
    }

    #[test]
    fn test_set_without_param_is_acknowledged_noop() {
        let mut drive = controller();
        let t0 = Instant::from_millis(0);

        assert_eq!(handle(&mut drive, "/set", t0), Response::Accepted);
        assert_eq!(handle(&mut drive, "/set?position=oops", t0), Response::Accepted);
        assert!(!drive.is_spinning());
    }

    #[test]
    fn test_set_out_of_range_is_acknowledged_noop() {
        let mut drive = controller();
        let t0 = Instant::from_millis(0);

        assert_eq!(
            handle(&mut drive, "/set?position=150", t0),
            Response::Accepted
        );
        assert_eq!(
            handle(&mut drive, "/set?position=-3", t0),
            Response::Accepted
        );
        assert_eq!(
            handle(&mut drive, "/set?position=inf", t0),
            Response::Accepted
        );
        assert!(!drive.is_spinning());
    }

    #[test]
    fn test_unknown_route() {
        let mut drive = controller();
        let t0 = Instant::from_millis(0);

        let response = handle(&mut drive, "/reboot", t0);
        assert_eq!(response, Response::NotFound);
        assert_eq!(response.status(), 404);
        assert_eq!(response.body(), "");
    }

    #[test]
    fn test_position_decimal_rendering() {
        let mut drive = controller();
        let t0 = Instant::from_millis(0);

        handle(&mut drive, "/set?position=100", t0);
        // a third of the way through an uneven stretch renders as a plain
        // decimal, no scientific notation
        let response = handle(&mut drive, "/position", t0 + 3_333);
        match response {
            Response::Position(value) => assert!((value - 33.33).abs() < 0.01),
            other => panic!("expected position, got {:?}", other),
        }
    }
}
