//! Pattern loop — the top-level schedule.
//!
//! ```text
//!  ┌─▶ sweep(3) ─▶ hold ─▶ counter(2) ─▶ hold ─▶ random(6) ─▶ hold ─┐
//!  └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`PatternLoop::run_forever`] never returns; the firmware runs until reset
//! or power-off. [`PatternLoop::run_cycles`] bounds the same loop for tests.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::config::BreathConfig;

use super::events::AppEvent;
use super::ports::{EntropySource, EventSink, LedPort};
use super::sequencer::Sequencer;

// ───────────────────────────────────────────────────────────────
// PatternLoop
// ───────────────────────────────────────────────────────────────

/// Orchestrates the three patterns with fixed holds between them.
pub struct PatternLoop {
    config: BreathConfig,
    cycles: u32,
}

impl PatternLoop {
    /// Construct the loop from a validated configuration.
    pub fn new(config: BreathConfig) -> Self {
        Self { config, cycles: 0 }
    }

    /// Completed sweep → counter → random passes.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the LED bank before the first pattern.
    pub fn start<L: LedPort, D: DelayNs>(
        &self,
        seq: &Sequencer<L, D>,
        sink: &mut impl EventSink,
    ) {
        sink.emit(&AppEvent::Started {
            led_count: seq.led_count(),
            duty_max: seq.leds().duty_max(),
        });
        info!(
            "PatternLoop started: breath={}ms hold={}ms",
            self.config.breath_duration_ms(),
            self.config.hold_ms
        );
    }

    /// Run one full pass: sweep, counter and random, each followed by a hold.
    pub fn run_cycle<L: LedPort, D: DelayNs>(
        &mut self,
        seq: &mut Sequencer<L, D>,
        rng: &mut impl EntropySource,
        sink: &mut impl EventSink,
    ) {
        let hold_ms = self.config.hold_ms;

        seq.sweep(self.config.sweep_cycles, sink);
        seq.hold(hold_ms);

        seq.counter(self.config.counter_rounds, sink);
        seq.hold(hold_ms);

        seq.random(self.config.random_flashes, rng, sink);
        seq.hold(hold_ms);

        self.cycles = self.cycles.wrapping_add(1);
        sink.emit(&AppEvent::CycleCompleted(self.cycles));
    }

    /// Run exactly `count` passes, then return.
    pub fn run_cycles<L: LedPort, D: DelayNs>(
        &mut self,
        count: u32,
        seq: &mut Sequencer<L, D>,
        rng: &mut impl EntropySource,
        sink: &mut impl EventSink,
    ) {
        for _ in 0..count {
            self.run_cycle(seq, rng, sink);
        }
    }

    /// Run passes until power-off.
    pub fn run_forever<L: LedPort, D: DelayNs>(
        &mut self,
        seq: &mut Sequencer<L, D>,
        rng: &mut impl EntropySource,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.run_cycle(seq, rng, sink);
        }
    }
}
