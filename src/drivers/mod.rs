//! PWM drivers and hardware initialisation.

pub mod hw_init;
pub mod led_bank;
