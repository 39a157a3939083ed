//! Loop state carried from one iteration to the next.
//!
//! Both counters wrap like the 8-bit and 16-bit registers they stand in for.
//! Nothing here clamps: holding a button walks the value through zero.

use crate::config::{INITIAL_BRIGHTNESS, INITIAL_TONE_PERIOD};

/// LED on-time level, 0-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(pub u8);

impl Brightness {
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Apply one cycle's button input. Holding both decrements and then
    /// increments, which nets out to no change.
    pub fn adjust(&mut self, decrease: bool, increase: bool) {
        if decrease {
            self.decrement();
        }
        if increase {
            self.increment();
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(INITIAL_BRIGHTNESS)
    }
}

/// Tone half-period in microseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TonePeriod(pub u16);

impl TonePeriod {
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }

    #[inline]
    pub fn micros(self) -> u16 {
        self.0
    }

    pub fn adjust(&mut self, decrease: bool, increase: bool) {
        if decrease {
            self.decrement();
        }
        if increase {
            self.increment();
        }
    }
}

impl Default for TonePeriod {
    fn default() -> Self {
        Self(INITIAL_TONE_PERIOD)
    }
}

/// Everything the main loop keeps between iterations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopState {
    pub brightness: Brightness,
    pub tone_period: TonePeriod,
}

impl LoopState {
    pub fn new(brightness: u8, tone_period: u16) -> Self {
        Self {
            brightness: Brightness(brightness),
            tone_period: TonePeriod(tone_period),
        }
    }
}

/// Bookkeeping for the note test loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteState {
    /// Consecutive iterations without a note button.
    pub idle_ticks: u16,
    pub last_code: u8,
}

/// What the outer driver should do after an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Continue,
    /// Restart into the bootloader. Nothing else runs this iteration.
    RestartRequested,
    /// Power down until a button wakes the board.
    EnterSleep,
}

impl Outcome {
    #[inline]
    pub fn is_exit(self) -> bool {
        self != Outcome::Continue
    }
}
