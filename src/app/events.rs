//! Outbound application events.
//!
//! The [`Sequencer`](super::sequencer::Sequencer) and
//! [`PatternLoop`](super::service::PatternLoop) emit these through the
//! [`EventSink`](super::ports::EventSink) port. The only adapter today logs
//! them to the serial console.

use crate::curve::Duty;
use crate::patterns::PatternId;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The pattern loop is about to run for the first time.
    Started { led_count: usize, duty_max: Duty },

    /// A pattern begins; `breaths` is the number of breathe cycles it will run.
    PatternStarted { pattern: PatternId, breaths: u32 },

    /// A pattern finished and every LED is dark again.
    PatternFinished(PatternId),

    /// One sweep → counter → random pass completed (1-based count).
    CycleCompleted(u32),
}
