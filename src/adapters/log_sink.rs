//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the ESP-IDF
//! logger (UART / USB-CDC in production). Pattern starts are `info!`, the
//! per-pattern and per-cycle bookkeeping is `debug!`.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink {
    emitted: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events logged so far.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match event {
            AppEvent::Started {
                led_count,
                duty_max,
            } => {
                info!("START | leds={} duty_max={}", led_count, duty_max);
            }
            AppEvent::PatternStarted { pattern, breaths } => {
                info!("Pattern: {} | breaths={}", pattern.name(), breaths);
            }
            AppEvent::PatternFinished(pattern) => {
                debug!("Pattern done: {}", pattern.name());
            }
            AppEvent::CycleCompleted(n) => {
                debug!("CYCLE | #{} complete", n);
            }
        }
    }
}
