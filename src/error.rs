//! Unified error types for the breathing-LED firmware.
//!
//! Only start-up can fail: an invalid [`BreathConfig`](crate::config::BreathConfig)
//! or an LEDC timer/channel the peripheral refuses. Both are fatal. The pattern
//! loop itself has no error path. All variants are `Copy` so they can be
//! logged and returned without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible start-up operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The configuration set failed validation.
    Config(ConfigError),
    /// The PWM peripheral could not be configured.
    Pwm(PwmError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pwm(e) => write!(f, "pwm: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `led_count` is zero.
    NoLeds,
    /// More LEDs than channels the LED bank can hold.
    TooManyLeds { count: usize, max: usize },
    /// Duty resolution outside the supported 1..=14 bits.
    ResolutionOutOfRange(u8),
    /// PWM frequency of 0 Hz.
    ZeroFrequency,
    /// A breath cycle needs at least one step.
    ZeroSteps,
    /// Two LEDs were mapped onto the same PWM channel.
    DuplicateChannel(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLeds => write!(f, "led_count must be at least 1"),
            Self::TooManyLeds { count, max } => {
                write!(f, "led_count {count} exceeds maximum of {max}")
            }
            Self::ResolutionOutOfRange(bits) => {
                write!(f, "duty resolution {bits} bits out of range")
            }
            Self::ZeroFrequency => write!(f, "PWM frequency must be non-zero"),
            Self::ZeroSteps => write!(f, "step_count must be non-zero"),
            Self::DuplicateChannel(ch) => write!(f, "PWM channel {ch} assigned twice"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// PWM peripheral errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// LEDC timer configuration rejected (ESP-IDF error code).
    TimerConfigFailed(i32),
    /// LEDC channel configuration rejected (ESP-IDF error code).
    ChannelConfigFailed { channel: u8, code: i32 },
    /// The LEDC driver has no resolution variant for this bit width.
    UnsupportedResolution(u8),
    /// More LEDs requested than GPIOs wired on the board.
    NotEnoughPins { requested: usize, available: usize },
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerConfigFailed(rc) => write!(f, "LEDC timer config failed (rc={rc})"),
            Self::ChannelConfigFailed { channel, code } => {
                write!(f, "LEDC channel {channel} config failed (rc={code})")
            }
            Self::UnsupportedResolution(bits) => {
                write!(f, "LEDC does not support {bits}-bit resolution")
            }
            Self::NotEnoughPins {
                requested,
                available,
            } => write!(f, "{requested} LEDs requested, only {available} pins wired"),
        }
    }
}

impl From<PwmError> for Error {
    fn from(e: PwmError) -> Self {
        Self::Pwm(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
