//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                    |
//! |------------|----------------|--------------------------------|
//! | `entropy`  | EntropySource  | ESP32 hardware RNG / host hash |
//! | `log_sink` | EventSink      | Serial log output              |
//!
//! The LED port is implemented by [`drivers::led_bank`](crate::drivers::led_bank).

pub mod entropy;
pub mod log_sink;
