//! Command surface for shade-motion.
//!
//! Transport-agnostic: whatever serves the network or a serial console
//! reduces each request to a path string and hands it to [`handle`], which
//! runs it against the controller and returns a status plus body to send
//! back. `GET` is the only method in the contract, so the method never
//! reaches this layer.

mod request;
mod router;

pub use request::Command;
pub use router::{handle, Response};
