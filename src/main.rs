//! Breathing-LED firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Adapters / drivers (outer ring)                         │
//! │                                                          │
//! │  LedBank<LedcDriver>   HardwareRng   LogEventSink        │
//! │  (LedPort)             (Entropy)     (EventSink)         │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ───────────────    │
//! │                                                          │
//! │  ┌──────────────────────────────────────────────────┐    │
//! │  │  PatternLoop ─▶ Sequencer ─▶ brightness curve    │    │
//! │  └──────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::peripherals::Peripherals;

use breathleds::adapters::entropy::HardwareRng;
use breathleds::adapters::log_sink::LogEventSink;
use breathleds::app::sequencer::Sequencer;
use breathleds::app::service::PatternLoop;
use breathleds::config::BreathConfig;
use breathleds::drivers::hw_init::{self, LedPeripherals};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ESP32 LED Breathing Patterns v{} started", env!("CARGO_PKG_VERSION"));

    let config = BreathConfig::default();
    info!("Config: {:?}", config);

    // ── 2. LEDC PWM (fatal on failure) ────────────────────────
    let peripherals = Peripherals::take()?;

    let timer = hw_init::init_timer(peripherals.ledc.timer0, &config).inspect_err(|e| {
        error!("LEDC timer init failed: {} — halting", e);
    })?;

    let leds = hw_init::init_led_bank(
        &timer,
        LedPeripherals {
            channel0: peripherals.ledc.channel0,
            channel1: peripherals.ledc.channel1,
            channel2: peripherals.ledc.channel2,
            led1: peripherals.pins.gpio2,
            led2: peripherals.pins.gpio4,
            led3: peripherals.pins.gpio5,
        },
        &config,
    )
    .inspect_err(|e| error!("LEDC channel init failed: {} — halting", e))?;

    // ── 3. Pattern loop (never returns) ───────────────────────
    let mut seq = Sequencer::new(leds, FreeRtos, &config);
    let mut rng = HardwareRng::new();
    let mut sink = LogEventSink::new();
    let mut patterns = PatternLoop::new(config);

    patterns.start(&seq, &mut sink);
    patterns.run_forever(&mut seq, &mut rng, &mut sink)
}
