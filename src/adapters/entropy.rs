//! Random-number adapter for the random pattern.
//!
//! - **`target_os = "espidf"`** — reads the hardware RNG via `esp_random()`.
//!   With RF off the output is pseudo-random, which is fine for picking LEDs.
//! - **`not(target_os = "espidf")`** — hashes a fresh `RandomState` per draw
//!   for host-side simulation. Not cryptographic.

use crate::app::ports::EntropySource;

/// Entropy source backed by the platform RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwareRng;

impl HardwareRng {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl EntropySource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        // SAFETY: esp_random reads the RNG data register; no shared state.
        unsafe { esp_idf_svc::sys::esp_random() }
    }
}

/// Simulation stub — uses `RandomState` to produce non-cryptographic entropy.
#[cfg(not(target_os = "espidf"))]
impl EntropySource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u32(0x5EED);
        let v = hasher.finish();
        (v ^ (v >> 32)) as u32
    }
}
