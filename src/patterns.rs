//! Mask generators for the three breathing patterns.
//!
//! Each generator is pure and finite, so the order of masks can be checked
//! without driving any PWM hardware. The [`Sequencer`](crate::app::sequencer::Sequencer)
//! turns every mask into one breath.
//!
//! | Pattern | One repeat                                   |
//! |---------|----------------------------------------------|
//! | Sweep   | singles `0..N`, then `N-2` down to `1`       |
//! | Counter | every mask `0..2^N` in numeric order         |
//! | Random  | one non-empty mask per entropy draw          |

use crate::mask::GroupMask;

/// Pattern identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternId {
    /// Knight-Rider bounce across single LEDs.
    Sweep,
    /// Binary count over every LED combination.
    Counter,
    /// Random non-empty LED groups.
    Random,
}

impl PatternId {
    pub const ALL: [PatternId; 3] = [PatternId::Sweep, PatternId::Counter, PatternId::Random];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sweep => "Knight Rider (breath)",
            Self::Counter => "Binary Counter (breath)",
            Self::Random => "Random (breath)",
        }
    }

    /// Number of breaths one call makes with `repeats` cycles/rounds/flashes.
    pub fn breath_count(self, led_count: usize, repeats: u16) -> u32 {
        let per_repeat = match self {
            Self::Sweep => (led_count + led_count.saturating_sub(2)) as u32,
            Self::Counter => u32::from(GroupMask::combinations(led_count)),
            Self::Random => 1,
        };
        per_repeat * u32::from(repeats)
    }
}

/// One sweep cycle: out along the bar, then back without repeating the ends.
pub fn sweep_masks(led_count: usize) -> impl Iterator<Item = GroupMask> {
    let back = (1..led_count.saturating_sub(1)).rev();
    (0..led_count).chain(back).map(GroupMask::single)
}

/// One counter round: masks `0..2^led_count` in increasing order.
pub fn counter_masks(led_count: usize) -> impl Iterator<Item = GroupMask> {
    (0..GroupMask::combinations(led_count))
        .map(move |bits| GroupMask::from_bits(u32::from(bits), led_count))
}

/// Turn one entropy draw into a mask with at least one LED lit.
///
/// The low `led_count` bits select the group. An empty group falls back to
/// a single LED picked from the remaining high bits, so the fallback index
/// is independent of the (all-zero) low bits.
pub fn random_mask(draw: u32, led_count: usize) -> GroupMask {
    let mask = GroupMask::from_bits(draw, led_count);
    if !mask.is_empty() || led_count == 0 {
        return mask;
    }
    let high = draw.checked_shr(led_count as u32).unwrap_or(0);
    GroupMask::single(high as usize % led_count)
}
