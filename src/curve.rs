//! Raised-cosine brightness curve.
//!
//! Maps a normalized breath phase to a PWM duty value:
//!
//! ```text
//! intensity = 0.5 * (1 - cos(π · phase))        phase ∈ [0, 1]
//! duty      = round(intensity * DUTY_MAX)        duty  ∈ [0, DUTY_MAX]
//! ```
//!
//! The slope is zero at both ends, so a breath fades in and out without a
//! visible snap. Phases outside `[0, 1]` are clamped to the nearest end and
//! NaN is treated as `0.0`; callers are expected to stay inside the range.

use core::f32::consts::PI;

/// Duty value written to one PWM channel.
pub type Duty = u16;

/// Ease-in/ease-out intensity for `phase`, in `[0, 1]`.
pub fn intensity(phase: f32) -> f32 {
    let phase = if phase.is_nan() {
        0.0
    } else {
        phase.clamp(0.0, 1.0)
    };
    0.5 * (1.0 - (PI * phase).cos())
}

/// `2^bits - 1`, saturating at `u16::MAX` for widths of 16 bits and above.
pub fn duty_max(resolution_bits: u8) -> Duty {
    match resolution_bits {
        0 => 0,
        1..=15 => (1u16 << resolution_bits) - 1,
        _ => Duty::MAX,
    }
}

/// Duty for `phase`, rounded to the nearest level and bounded by `duty_max`.
pub fn duty_for_phase(phase: f32, duty_max: Duty) -> Duty {
    let max = f32::from(duty_max);
    (intensity(phase) * max).round().clamp(0.0, max) as Duty
}

/// Duty at step `step` of a `steps`-step half breath.
///
/// `steps == 0` degenerates to a single full-brightness step.
pub fn step_duty(step: u16, steps: u16, duty_max: Duty) -> Duty {
    let phase = if steps == 0 {
        1.0
    } else {
        f32::from(step) / f32::from(steps)
    };
    duty_for_phase(phase, duty_max)
}
