//! One-shot LEDC PWM initialization.
//!
//! Configures LEDC timer 0 (low-speed mode, auto clock) and one channel per
//! LED using `esp-idf-hal`. Called once from `main()` before the pattern
//! loop starts. Any failure here is fatal: the patterns must never run on a
//! half-configured peripheral.

#[cfg(target_os = "espidf")]
use esp_idf_hal::gpio::{Gpio2, Gpio4, Gpio5};
#[cfg(target_os = "espidf")]
use esp_idf_hal::ledc::{
    config::TimerConfig, LedcDriver, LedcTimerDriver, Resolution, CHANNEL0, CHANNEL1,
    CHANNEL2, TIMER0,
};
#[cfg(target_os = "espidf")]
use esp_idf_hal::units::Hertz;
#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::EspError;
#[cfg(target_os = "espidf")]
use log::info;

use crate::config::{self, BreathConfig};
use crate::error::{Error, PwmError};
use crate::pins;

#[cfg(target_os = "espidf")]
use crate::drivers::led_bank::LedBank;

/// Validate `config` against the board wiring and return the LED count.
pub fn check_led_request(config: &BreathConfig) -> Result<usize, Error> {
    config.validate()?;
    let requested = config.led_count;
    if requested > pins::LED_GPIOS.len() {
        return Err(PwmError::NotEnoughPins {
            requested,
            available: pins::LED_GPIOS.len(),
        }
        .into());
    }
    config::check_unique_channels(&pins::LED_CHANNELS[..requested])?;
    Ok(requested)
}

// ── LEDC timer ────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn resolution_from_bits(bits: u8) -> Result<Resolution, PwmError> {
    Ok(match bits {
        1 => Resolution::Bits1,
        2 => Resolution::Bits2,
        3 => Resolution::Bits3,
        4 => Resolution::Bits4,
        5 => Resolution::Bits5,
        6 => Resolution::Bits6,
        7 => Resolution::Bits7,
        8 => Resolution::Bits8,
        9 => Resolution::Bits9,
        10 => Resolution::Bits10,
        11 => Resolution::Bits11,
        12 => Resolution::Bits12,
        13 => Resolution::Bits13,
        14 => Resolution::Bits14,
        other => return Err(PwmError::UnsupportedResolution(other)),
    })
}

/// Configure the shared LEDC timer at the configured frequency and resolution.
#[cfg(target_os = "espidf")]
pub fn init_timer(
    timer: TIMER0,
    config: &BreathConfig,
) -> Result<LedcTimerDriver<'static, TIMER0>, Error> {
    check_led_request(config)?;
    let resolution = resolution_from_bits(config.duty_resolution_bits)?;
    let timer_cfg = TimerConfig::new()
        .frequency(Hertz(config.pwm_frequency_hz))
        .resolution(resolution);

    let driver = LedcTimerDriver::new(timer, &timer_cfg)
        .map_err(|e| PwmError::TimerConfigFailed(e.code()))?;
    info!(
        "hw_init: LEDC timer {} at {} Hz, {}-bit",
        pins::LEDC_TIMER,
        config.pwm_frequency_hz,
        config.duty_resolution_bits
    );
    Ok(driver)
}

// ── LEDC channels ─────────────────────────────────────────────

/// Channel and pin peripherals for the three board LEDs.
#[cfg(target_os = "espidf")]
pub struct LedPeripherals {
    pub channel0: CHANNEL0,
    pub channel1: CHANNEL1,
    pub channel2: CHANNEL2,
    pub led1: Gpio2,
    pub led2: Gpio4,
    pub led3: Gpio5,
}

#[cfg(target_os = "espidf")]
fn attach<'d>(
    index: usize,
    result: Result<LedcDriver<'d>, EspError>,
) -> Result<LedcDriver<'d>, PwmError> {
    let channel = pins::LED_CHANNELS[index];
    let driver = result.map_err(|e| PwmError::ChannelConfigFailed {
        channel,
        code: e.code(),
    })?;
    info!(
        "hw_init: LED{} on GPIO{} -> LEDC CH{}",
        index + 1,
        pins::LED_GPIOS[index],
        channel
    );
    Ok(driver)
}

/// Bind the first `config.led_count` LEDs to LEDC channels on `timer`.
///
/// Channels start at duty 0; unused channel/pin peripherals are dropped.
#[cfg(target_os = "espidf")]
pub fn init_led_bank<'d>(
    timer: &'d LedcTimerDriver<'d, TIMER0>,
    p: LedPeripherals,
    config: &BreathConfig,
) -> Result<LedBank<LedcDriver<'d>>, Error> {
    let count = check_led_request(config)?;
    let mut drivers: heapless::Vec<LedcDriver<'d>, 3> = heapless::Vec::new();

    if count > 0 {
        drivers
            .push(attach(0, LedcDriver::new(p.channel0, timer, p.led1))?)
            .ok();
    }
    if count > 1 {
        drivers
            .push(attach(1, LedcDriver::new(p.channel1, timer, p.led2))?)
            .ok();
    }
    if count > 2 {
        drivers
            .push(attach(2, LedcDriver::new(p.channel2, timer, p.led3))?)
            .ok();
    }

    let bank = LedBank::new(drivers, config.duty_max())?;
    info!("hw_init: {} LED channels configured", count);
    Ok(bank)
}
