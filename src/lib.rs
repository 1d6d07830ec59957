//! Breathing-LED firmware library.
//!
//! Exposes the pure-logic modules for integration testing. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.
//!
//! ```text
//!  PatternLoop ──▶ Sequencer ──▶ curve ──▶ LedPort (LedBank / LEDC)
//!                     │
//!                     └─ patterns (sweep · counter · random masks)
//! ```

#![deny(unused_must_use)]

// The LEDC and RNG paths link against esp-idf-hal/svc, which the
// `espidf` feature pulls in.
#[cfg(all(target_os = "espidf", not(feature = "espidf")))]
compile_error!("building for target_os = \"espidf\" requires `--features espidf`");

pub mod app;
pub mod config;
pub mod curve;
pub mod error;
pub mod mask;
pub mod patterns;
pub mod pins;

pub mod adapters;
pub mod drivers;

pub use error::{Error, Result};
