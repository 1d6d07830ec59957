//! LED bank driver.
//!
//! Wraps up to [`MAX_LEDS`] PWM channels implementing
//! [`embedded_hal::pwm::SetDutyCycle`] and exposes them through
//! [`LedPort`]. On ESP-IDF the channels are `LedcDriver`s sharing one LEDC
//! timer; on host/test any `SetDutyCycle` fake will do.
//!
//! ## Write failures
//!
//! The pattern loop has no error path. A rejected duty write is logged,
//! counted, and that channel keeps its previous duty for the step; the next
//! step (or the trailing all-off) retries naturally.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::LedPort;
use crate::curve::Duty;
use crate::error::ConfigError;
use crate::mask::MAX_LEDS;

pub struct LedBank<C> {
    channels: heapless::Vec<C, MAX_LEDS>,
    duties: [Duty; MAX_LEDS],
    duty_max: Duty,
    write_failures: u32,
}

impl<C: SetDutyCycle> LedBank<C> {
    /// Take ownership of the channels; LED `i` is the `i`-th channel yielded.
    ///
    /// DUTY_MAX is `duty_max` capped by the smallest `max_duty_cycle()`
    /// among the channels. LEDC reports `1 << bits` as its maximum, one above
    /// the top duty of a `bits`-wide timer, so callers pass `2^bits - 1`.
    pub fn new(
        channels: impl IntoIterator<Item = C>,
        duty_max: Duty,
    ) -> Result<Self, ConfigError> {
        let mut bank = heapless::Vec::new();
        let mut count = 0;
        for channel in channels {
            count += 1;
            // Overflow is reported below once the full count is known.
            let _ = bank.push(channel);
        }
        if count == 0 {
            return Err(ConfigError::NoLeds);
        }
        if count > MAX_LEDS {
            return Err(ConfigError::TooManyLeds {
                count,
                max: MAX_LEDS,
            });
        }

        let duty_max = bank
            .iter()
            .map(|c| c.max_duty_cycle())
            .fold(duty_max, Duty::min);

        Ok(Self {
            channels: bank,
            duties: [0; MAX_LEDS],
            duty_max,
            write_failures: 0,
        })
    }

    /// Last duty successfully written to LED `index`.
    pub fn duty(&self, index: usize) -> Option<Duty> {
        (index < self.channels.len()).then(|| self.duties[index])
    }

    /// Duty writes rejected by the hardware since start-up.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    pub fn channels(&self) -> &[C] {
        &self.channels
    }
}

impl<C: SetDutyCycle> LedPort for LedBank<C> {
    fn led_count(&self) -> usize {
        self.channels.len()
    }

    fn duty_max(&self) -> Duty {
        self.duty_max
    }

    fn set_duty(&mut self, index: usize, duty: Duty) {
        let duty = duty.min(self.duty_max);
        let Some(channel) = self.channels.get_mut(index) else {
            return;
        };
        match channel.set_duty_cycle(duty) {
            Ok(()) => self.duties[index] = duty,
            Err(e) => {
                self.write_failures = self.write_failures.wrapping_add(1);
                warn!("LED{} duty write ({}) failed: {:?}", index, duty, e);
            }
        }
    }
}
