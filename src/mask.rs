//! Group mask — the set of LEDs taking part in one breath.
//!
//! Bit `i` set means LED `i` breathes; every other LED is held dark. Masks
//! are ephemeral: built per pattern step and dropped after the breath.

use core::fmt;

/// Capacity of a [`GroupMask`], equal to the number of LEDC channels.
pub const MAX_LEDS: usize = 8;

/// Bit-set over LED indices `0..MAX_LEDS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GroupMask(u8);

impl GroupMask {
    /// No LED selected.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Every LED in `0..led_count`.
    pub const fn all(led_count: usize) -> Self {
        if led_count >= MAX_LEDS {
            Self(u8::MAX)
        } else {
            Self((1u8 << led_count) - 1)
        }
    }

    /// Only LED `index`. Indices at or past `MAX_LEDS` give an empty mask.
    pub const fn single(index: usize) -> Self {
        if index < MAX_LEDS {
            Self(1u8 << index)
        } else {
            Self(0)
        }
    }

    /// Mask from raw bits, discarding bits at or above `led_count`.
    pub const fn from_bits(bits: u32, led_count: usize) -> Self {
        Self((bits as u8) & Self::all(led_count).0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, index: usize) -> bool {
        index < MAX_LEDS && self.0 & (1u8 << index) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of selected LEDs.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected indices below `led_count`, ascending.
    pub fn indices(self, led_count: usize) -> impl Iterator<Item = usize> {
        (0..led_count.min(MAX_LEDS)).filter(move |&i| self.contains(i))
    }

    /// Number of distinct masks over `led_count` LEDs (`2^led_count`).
    pub const fn combinations(led_count: usize) -> u16 {
        let n = if led_count > MAX_LEDS {
            MAX_LEDS
        } else {
            led_count
        };
        1u16 << n
    }
}

impl fmt::Binary for GroupMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
