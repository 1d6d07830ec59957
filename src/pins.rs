//! GPIO / LEDC assignments for the three-LED breathing board.
//!
//! Single source of truth — the LEDC init code references this module rather
//! than hard-coding pin numbers. Index `i` in each table belongs to LED `i`.

// ---------------------------------------------------------------------------
// LEDs (active-high, series resistor to GND)
// ---------------------------------------------------------------------------

pub const LED1_GPIO: i32 = 2;
pub const LED2_GPIO: i32 = 4;
pub const LED3_GPIO: i32 = 5;

/// GPIO per LED index.
pub const LED_GPIOS: [i32; 3] = [LED1_GPIO, LED2_GPIO, LED3_GPIO];

// ---------------------------------------------------------------------------
// LEDC peripheral
// ---------------------------------------------------------------------------

/// LEDC timer shared by every LED channel (low-speed mode).
pub const LEDC_TIMER: u8 = 0;
/// First LEDC channel; LED `i` is driven by `LEDC_CHANNEL_BASE + i`.
pub const LEDC_CHANNEL_BASE: u8 = 0;

/// LEDC channel per LED index.
pub const LED_CHANNELS: [u8; 3] = [
    LEDC_CHANNEL_BASE,
    LEDC_CHANNEL_BASE + 1,
    LEDC_CHANNEL_BASE + 2,
];

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits). 10-bit gives 0 – 1023 duty levels.
pub const PWM_RESOLUTION_BITS: u8 = 10;
/// LEDC base frequency for the LEDs (5 kHz — flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 5_000;
