//! System configuration parameters
//!
//! All tunable parameters for the breathing patterns. The set is fixed at
//! compile time through [`BreathConfig::default`]; it is validated once at
//! start-up before any PWM channel is configured.

use serde::{Deserialize, Serialize};

use crate::curve;
use crate::error::ConfigError;
use crate::mask::MAX_LEDS;
use crate::pins;

/// Highest LEDC duty resolution accepted on every ESP32 variant.
pub const MAX_DUTY_RESOLUTION_BITS: u8 = 14;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathConfig {
    // --- PWM ---
    /// Number of LED channels driven (1..=MAX_LEDS)
    pub led_count: usize,
    /// LEDC duty resolution in bits; DUTY_MAX = 2^bits - 1
    pub duty_resolution_bits: u8,
    /// LEDC timer frequency in Hz
    pub pwm_frequency_hz: u32,

    // --- Breath cycle ---
    /// Steps per half breath (ascend or descend)
    pub step_count: u16,
    /// Delay after each step (milliseconds)
    pub step_delay_ms: u32,
    /// Pause between patterns (milliseconds)
    pub hold_ms: u32,

    // --- Pattern lengths ---
    /// Sweep pattern: full bounce cycles
    pub sweep_cycles: u16,
    /// Counter pattern: passes over every mask
    pub counter_rounds: u16,
    /// Random pattern: number of flashes
    pub random_flashes: u16,
}

impl Default for BreathConfig {
    fn default() -> Self {
        Self {
            // PWM
            led_count: pins::LED_GPIOS.len(),
            duty_resolution_bits: pins::PWM_RESOLUTION_BITS,
            pwm_frequency_hz: pins::LED_PWM_FREQ_HZ,

            // Breath cycle
            step_count: 64,
            step_delay_ms: 15,
            hold_ms: 600,

            // Pattern lengths
            sweep_cycles: 3,
            counter_rounds: 2,
            random_flashes: 6,
        }
    }
}

impl BreathConfig {
    /// Check every field the firmware depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.led_count == 0 {
            return Err(ConfigError::NoLeds);
        }
        if self.led_count > MAX_LEDS {
            return Err(ConfigError::TooManyLeds {
                count: self.led_count,
                max: MAX_LEDS,
            });
        }
        if self.duty_resolution_bits == 0
            || self.duty_resolution_bits > MAX_DUTY_RESOLUTION_BITS
        {
            return Err(ConfigError::ResolutionOutOfRange(self.duty_resolution_bits));
        }
        if self.pwm_frequency_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if self.step_count == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }

    /// Highest duty value for the configured resolution.
    pub fn duty_max(&self) -> u16 {
        curve::duty_max(self.duty_resolution_bits)
    }

    /// Wall-clock length of one breathe cycle (both halves), in milliseconds.
    pub fn breath_duration_ms(&self) -> u64 {
        2 * (u64::from(self.step_count) + 1) * u64::from(self.step_delay_ms)
    }
}

/// Reject a channel table that maps two LEDs onto the same PWM channel.
pub fn check_unique_channels(channels: &[u8]) -> Result<(), ConfigError> {
    for (i, ch) in channels.iter().enumerate() {
        if channels[..i].contains(ch) {
            return Err(ConfigError::DuplicateChannel(*ch));
        }
    }
    Ok(())
}
