//! Pattern sequencer — breathe cycles and the three patterns built from them.
//!
//! [`Sequencer::breathe`] is the only primitive: it ramps every LED in a
//! [`GroupMask`] up and back down along the raised-cosine curve, holding
//! all other LEDs dark, then forces the whole bank off.
//!
//! ## Invariant
//!
//! Every LED is at duty 0 before and after each `breathe`. Patterns are plain
//! sequences of breaths and rely on this; there is no transition logic
//! between them. A breath cut short would leave LEDs lit for the next one.
//!
//! ## Timing
//!
//! One breath is `2 × (steps + 1)` writes, each followed by `step_delay_ms`
//! through [`DelayNs`]. On ESP-IDF the delay is a FreeRTOS task delay, so
//! the idle task and watchdog keep running while the LEDs fade.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::BreathConfig;
use crate::curve::{self, Duty};
use crate::mask::GroupMask;
use crate::patterns::{self, PatternId};

use super::events::AppEvent;
use super::ports::{EntropySource, EventSink, LedPort};

/// Drives one LED bank through breathe cycles.
///
/// Owns both the LED port and the delay, so only one breath can run on a
/// given bank at a time.
pub struct Sequencer<L, D> {
    leds: L,
    delay: D,
    steps: u16,
    step_delay_ms: u32,
}

impl<L: LedPort, D: DelayNs> Sequencer<L, D> {
    /// Build a sequencer with the configured step count and step delay.
    ///
    /// The bank is forced dark so the breathe invariant holds from the start.
    pub fn new(mut leds: L, delay: D, config: &BreathConfig) -> Self {
        leds.all_off();
        Self {
            leds,
            delay,
            steps: config.step_count,
            step_delay_ms: config.step_delay_ms,
        }
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn led_count(&self) -> usize {
        self.leds.led_count()
    }

    // ── Primitive ─────────────────────────────────────────────

    /// One full inhale/exhale over `mask`.
    ///
    /// An empty mask still takes the full step and delay budget with every
    /// LED dark, keeping pattern timing uniform.
    pub fn breathe(&mut self, mask: GroupMask) {
        let duty_max = self.leds.duty_max();
        debug!("breathe mask=0b{:08b}", mask);

        for step in 0..=self.steps {
            self.step(mask, curve::step_duty(step, self.steps, duty_max));
        }
        for step in (0..=self.steps).rev() {
            self.step(mask, curve::step_duty(step, self.steps, duty_max));
        }

        self.leds.all_off();
    }

    /// Write one duty to the group and wait out the step delay.
    fn step(&mut self, mask: GroupMask, duty: Duty) {
        self.set_group(mask, duty);
        self.delay.delay_ms(self.step_delay_ms);
    }

    fn set_group(&mut self, mask: GroupMask, duty: Duty) {
        for index in 0..self.leds.led_count() {
            let level = if mask.contains(index) { duty } else { 0 };
            self.leds.set_duty(index, level);
        }
    }

    /// Idle with every LED dark for `ms` milliseconds.
    pub fn hold(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    // ── Patterns ──────────────────────────────────────────────

    /// Knight-Rider bounce over single LEDs, `cycles` times.
    pub fn sweep(&mut self, cycles: u16, sink: &mut impl EventSink) {
        let led_count = self.led_count();
        self.begin(PatternId::Sweep, cycles, sink);
        for _ in 0..cycles {
            for mask in patterns::sweep_masks(led_count) {
                self.breathe(mask);
            }
        }
        self.finish(PatternId::Sweep, sink);
    }

    /// Binary count through every LED combination, `rounds` times.
    pub fn counter(&mut self, rounds: u16, sink: &mut impl EventSink) {
        let led_count = self.led_count();
        self.begin(PatternId::Counter, rounds, sink);
        for _ in 0..rounds {
            for mask in patterns::counter_masks(led_count) {
                self.breathe(mask);
            }
        }
        self.finish(PatternId::Counter, sink);
    }

    /// `flashes` breaths over random non-empty groups.
    pub fn random(
        &mut self,
        flashes: u16,
        rng: &mut impl EntropySource,
        sink: &mut impl EventSink,
    ) {
        let led_count = self.led_count();
        self.begin(PatternId::Random, flashes, sink);
        for _ in 0..flashes {
            let mask = patterns::random_mask(rng.next_u32(), led_count);
            self.breathe(mask);
        }
        self.finish(PatternId::Random, sink);
    }

    fn begin(&mut self, pattern: PatternId, repeats: u16, sink: &mut impl EventSink) {
        let breaths = pattern.breath_count(self.led_count(), repeats);
        sink.emit(&AppEvent::PatternStarted { pattern, breaths });
    }

    fn finish(&mut self, pattern: PatternId, sink: &mut impl EventSink) {
        self.leds.all_off();
        sink.emit(&AppEvent::PatternFinished(pattern));
    }
}
