//! Application core — pattern logic, no direct hardware access.
//!
//! The sequencer and pattern loop live here. All interaction with the LEDs,
//! the RNG and the log goes through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod sequencer;
pub mod service;
