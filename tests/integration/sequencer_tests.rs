//! Sequencer → LED port: breathe invariants and pattern mask order.

use breathleds::app::events::AppEvent;
use breathleds::app::sequencer::Sequencer;
use breathleds::config::BreathConfig;
use breathleds::curve;
use breathleds::drivers::led_bank::LedBank;
use breathleds::mask::GroupMask;
use breathleds::patterns::PatternId;

use crate::mock_hw::{
    new_trace, single_bits, LedcLikeChannel, MockDelay, MockLeds, RecordingSink, ScriptedEntropy, SharedTrace,
    XorShift,
};

const DUTY_MAX: u16 = 1023;

fn config(led_count: usize) -> BreathConfig {
    BreathConfig {
        led_count,
        ..BreathConfig::default()
    }
}

fn sequencer(cfg: &BreathConfig) -> (Sequencer<MockLeds, MockDelay>, SharedTrace) {
    let trace = new_trace(cfg.led_count);
    let seq = Sequencer::new(
        MockLeds::new(trace.clone(), DUTY_MAX),
        MockDelay::new(trace.clone()),
        cfg,
    );
    (seq, trace)
}

// ── breathe ───────────────────────────────────────────────────

#[test]
fn breathe_starts_and_ends_dark() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    assert!(trace.borrow().all_dark());

    for bits in 0..8 {
        seq.breathe(GroupMask::from_bits(bits, 3));
        assert!(trace.borrow().all_dark(), "mask {bits:03b} left LEDs lit");
    }
}

#[test]
fn breathe_follows_curve_on_masked_leds_only() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    let mask = GroupMask::from_bits(0b101, 3);
    let writes_before = trace.borrow().writes;
    seq.breathe(mask);

    let t = trace.borrow();
    let steps = cfg.step_count;
    assert_eq!(t.frames.len(), 2 * (usize::from(steps) + 1));
    // Every LED on every step, then the trailing all-off.
    let n = cfg.led_count;
    assert_eq!(t.writes - writes_before, 2 * (usize::from(steps) + 1) * n + n);

    let ascending = 0..=steps;
    let descending = (0..=steps).rev();
    for (frame, s) in t.frames.iter().zip(ascending.chain(descending)) {
        let expected = curve::step_duty(s, steps, DUTY_MAX);
        assert_eq!(frame.duties[0], expected, "step {s}");
        assert_eq!(frame.duties[1], 0, "unmasked LED lit at step {s}");
        assert_eq!(frame.duties[2], expected, "step {s}");
        assert_eq!(frame.delay_ms, cfg.step_delay_ms);
    }
}

#[test]
fn breathe_peaks_at_full_scale_and_midpoint_is_half() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    seq.breathe(GroupMask::all(3));

    let t = trace.borrow();
    let mid = &t.frames[32];
    for &d in &mid.duties {
        assert!((511..=513).contains(&d), "midpoint duty {d}");
    }
    assert!(t.frames[64].duties.iter().all(|&d| d == DUTY_MAX));
    assert!(t.frames[0].duties.iter().all(|&d| d == 0));
    assert!(t.frames.last().unwrap().duties.iter().all(|&d| d == 0));
}

#[test]
fn ledc_bank_peaks_at_resolution_duty_max() {
    let cfg = config(3);
    let bank = LedBank::new(
        (0..cfg.led_count).map(|_| LedcLikeChannel::new(cfg.duty_resolution_bits)),
        cfg.duty_max(),
    )
    .unwrap();
    let trace = new_trace(0);
    let mut seq = Sequencer::new(bank, MockDelay::new(trace), &cfg);
    seq.breathe(GroupMask::all(3));

    let channels = seq.leds().channels();
    assert!(channels.iter().all(|c| c.peak == cfg.duty_max()));
    assert!(channels.iter().all(|c| c.duty == 0));
}

#[test]
fn empty_mask_keeps_full_timing_budget() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    seq.breathe(GroupMask::none());

    let t = trace.borrow();
    assert_eq!(t.total_delay_ms(), cfg.breath_duration_ms());
    assert!(t.frames.iter().all(|f| f.duties.iter().all(|&d| d == 0)));
}

#[test]
fn hold_waits_with_leds_dark() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    seq.hold(600);
    let t = trace.borrow();
    assert_eq!(t.frames.len(), 1);
    assert_eq!(t.frames[0].delay_ms, 600);
    assert!(t.all_dark());
}

// ── sweep ─────────────────────────────────────────────────────

#[test]
fn sweep_three_leds_visits_out_and_back() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    let mut sink = RecordingSink::default();
    seq.sweep(2, &mut sink);

    let masks = trace.borrow().breath_masks(cfg.step_count, cfg.step_delay_ms);
    let one_cycle: [u8; 4] = [0b001, 0b010, 0b100, 0b010];
    assert_eq!(masks, [one_cycle, one_cycle].concat());
    assert!(trace.borrow().all_dark());
}

#[test]
fn sweep_single_led_has_no_return_leg() {
    let cfg = config(1);
    let (mut seq, trace) = sequencer(&cfg);
    seq.sweep(3, &mut RecordingSink::default());
    let masks = trace.borrow().breath_masks(cfg.step_count, cfg.step_delay_ms);
    assert_eq!(masks, vec![0b1u8; 3]);
}

#[test]
fn sweep_visits_every_single_led() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    seq.sweep(1, &mut RecordingSink::default());
    let masks = trace.borrow().breath_masks(cfg.step_count, cfg.step_delay_ms);
    for bit in single_bits(3) {
        assert!(masks.contains(&bit));
    }
}

// ── counter ───────────────────────────────────────────────────

#[test]
fn counter_counts_every_mask_each_round() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    seq.counter(2, &mut RecordingSink::default());

    let masks = trace.borrow().breath_masks(cfg.step_count, cfg.step_delay_ms);
    let round: Vec<u8> = (0..8).collect();
    assert_eq!(masks, [round.clone(), round].concat());
}

// ── random ────────────────────────────────────────────────────

#[test]
fn random_uses_low_bits_and_never_breathes_empty() {
    let cfg = config(3);
    let (mut seq, trace) = sequencer(&cfg);
    // 0b000 with high bits 0b01 falls back to LED 1.
    let mut rng = ScriptedEntropy::new(vec![0b110, 0b01_000, 0b111, 0b001]);
    seq.random(4, &mut rng, &mut RecordingSink::default());

    let masks = trace.borrow().breath_masks(cfg.step_count, cfg.step_delay_ms);
    assert_eq!(masks, vec![0b110, 0b010, 0b111, 0b001]);
}

#[test]
fn random_flashes_cover_singles_and_groups() {
    let cfg = BreathConfig {
        step_count: 2,
        ..config(3)
    };
    let (mut seq, trace) = sequencer(&cfg);
    let mut rng = XorShift(0x1234_5678);
    seq.random(500, &mut rng, &mut RecordingSink::default());

    let masks = trace.borrow().breath_masks(cfg.step_count, cfg.step_delay_ms);
    assert_eq!(masks.len(), 500);
    assert!(!masks.contains(&0));
    for bit in single_bits(3) {
        assert!(masks.contains(&bit), "LED mask {bit:03b} never drawn");
    }
    let multi = masks.iter().filter(|m| m.count_ones() > 1).count();
    assert!(multi > 50, "only {multi} multi-LED flashes");
}

// ── events ────────────────────────────────────────────────────

#[test]
fn patterns_announce_start_and_finish() {
    let cfg = config(3);
    let (mut seq, _trace) = sequencer(&cfg);
    let mut sink = RecordingSink::default();

    seq.sweep(3, &mut sink);
    seq.counter(2, &mut sink);
    seq.random(6, &mut XorShift(7), &mut sink);

    assert_eq!(
        sink.events,
        vec![
            AppEvent::PatternStarted {
                pattern: PatternId::Sweep,
                breaths: 12
            },
            AppEvent::PatternFinished(PatternId::Sweep),
            AppEvent::PatternStarted {
                pattern: PatternId::Counter,
                breaths: 16
            },
            AppEvent::PatternFinished(PatternId::Counter),
            AppEvent::PatternStarted {
                pattern: PatternId::Random,
                breaths: 6
            },
            AppEvent::PatternFinished(PatternId::Random),
        ]
    );
}
