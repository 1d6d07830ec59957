//! Port traits — the hexagonal boundary between the pattern logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Sequencer / PatternLoop (domain)
//! ```
//!
//! Driven adapters (LED bank, entropy, event sink) implement these traits.
//! The domain consumes them via generics, so it never touches the LEDC
//! peripheral directly. Timed waits go through
//! [`embedded_hal::delay::DelayNs`] rather than a port of our own.

use crate::curve::Duty;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// LED port (driven adapter: domain → PWM hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port over an ordered set of PWM-driven LEDs.
///
/// `&mut self` on writes makes the owner of the port the only writer; the
/// sequencer holds its port by value.
pub trait LedPort {
    /// Number of LEDs, indexed `0..led_count()`.
    fn led_count(&self) -> usize;

    /// Highest duty value the channels accept (`2^resolution - 1`).
    fn duty_max(&self) -> Duty;

    /// Set LED `index` to `duty` immediately.
    ///
    /// Duty above [`duty_max`](Self::duty_max) is clamped; an out-of-range
    /// index is ignored.
    fn set_duty(&mut self, index: usize, duty: Duty);

    /// Drive every LED to duty 0.
    fn all_off(&mut self) {
        for index in 0..self.led_count() {
            self.set_duty(index, 0);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Entropy port (driven adapter: RNG → domain)
// ───────────────────────────────────────────────────────────────

/// Uniformly distributed 32-bit values. No seeding contract.
pub trait EntropySource {
    fn next_u32(&mut self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

