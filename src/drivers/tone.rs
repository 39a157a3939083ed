//! Square-wave tones on the piezo beeper.
//!
//! The beeper pin is toggled and then held for one half-period, so `cycles`
//! toggles make `cycles / 2` full periods.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::config::TONE_CYCLES;
use crate::state::TonePeriod;

/// The four notes of the note test, by half-period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    E5,
    A5,
    CSharp6,
    E6,
}

impl Note {
    /// Note played for a button code. Codes outside 1-4 are silent.
    pub fn from_code(code: u8) -> Option<Note> {
        match code {
            1 => Some(Note::E6),
            2 => Some(Note::A5),
            3 => Some(Note::E5),
            4 => Some(Note::CSharp6),
            _ => None,
        }
    }

    pub fn half_period_us(self) -> u16 {
        match self {
            Note::E5 => 758,
            Note::A5 => 568,
            Note::CSharp6 => 451,
            Note::E6 => 379,
        }
    }

    /// Toggles played per press. Each note is called with its own
    /// half-period as the count.
    pub fn cycles(self) -> u16 {
        self.half_period_us()
    }
}

pub struct ToneGenerator<PIN> {
    pin: PIN,
    high: bool,
}

impl<PIN: OutputPin> ToneGenerator<PIN> {
    /// Takes the beeper pin, which is assumed to start low.
    pub fn new(pin: PIN) -> Self {
        Self { pin, high: false }
    }

    pub fn free(self) -> PIN {
        self.pin
    }

    #[inline]
    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn toggle(&mut self) -> Result<(), PIN::Error> {
        if self.high {
            self.pin.set_low()?;
        } else {
            self.pin.set_high()?;
        }
        self.high = !self.high;
        Ok(())
    }

    /// Toggle `cycles` times, waiting `half_period_us` after each toggle.
    pub fn play<D: DelayUs<u16>>(
        &mut self,
        half_period_us: u16,
        cycles: u16,
        delay: &mut D,
    ) -> Result<(), PIN::Error> {
        for _ in 0..cycles {
            self.toggle()?;
            delay.delay_us(half_period_us);
        }
        Ok(())
    }

    pub fn play_note<D: DelayUs<u16>>(&mut self, note: Note, delay: &mut D) -> Result<(), PIN::Error> {
        self.play(note.half_period_us(), note.cycles(), delay)
    }

    /// Play the note for a button code; anything but 1-4 is silence.
    pub fn sound<D: DelayUs<u16>>(&mut self, code: u8, delay: &mut D) -> Result<Option<Note>, PIN::Error> {
        match Note::from_code(code) {
            Some(note) => {
                self.play_note(note, delay)?;
                Ok(Some(note))
            }
            None => Ok(None),
        }
    }

    /// A burst of [`TONE_CYCLES`] toggles at the adjustable period. A period
    /// of 0 gives back-to-back toggles with no hold at all.
    pub fn burst<D: DelayUs<u16>>(&mut self, period: TonePeriod, delay: &mut D) -> Result<(), PIN::Error> {
        self.play(period.micros(), TONE_CYCLES, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Trace;

    #[test]
    fn fifty_cycles_toggle_fifty_times() {
        let trace = Trace::new();
        let mut tone = ToneGenerator::new(trace.pin("beeper"));
        tone.play(460, 50, &mut trace.clock()).unwrap();

        let edges = trace.edges("beeper");
        assert_eq!(edges.len(), 50);
        // 25 full high/low periods
        assert_eq!(edges.chunks(2).filter(|p| *p == [true, false]).count(), 25);
        assert_eq!(trace.delay_us_calls(), vec![460; 50]);
        assert!(!tone.is_high());
    }

    #[test]
    fn odd_cycle_count_leaves_the_pin_high() {
        let trace = Trace::new();
        let mut tone = ToneGenerator::new(trace.pin("beeper"));
        tone.play(100, 3, &mut trace.clock()).unwrap();
        assert!(tone.is_high());
        assert_eq!(trace.edges("beeper"), vec![true, false, true]);
    }

    #[test]
    fn code_selects_pitch() {
        let cases = [(1u8, 379u32), (2, 568), (3, 758), (4, 451)];
        for (code, half) in cases {
            let trace = Trace::new();
            let mut tone = ToneGenerator::new(trace.pin("beeper"));
            let note = tone.sound(code, &mut trace.clock()).unwrap();
            assert!(note.is_some());
            let delays = trace.delay_us_calls();
            assert!(!delays.is_empty());
            assert!(delays.iter().all(|&us| us == half), "code {}", code);
            assert_eq!(delays.len(), trace.edges("beeper").len());
        }
    }

    #[test]
    fn other_codes_are_silent() {
        for code in [0u8, 5, 42, 255] {
            let trace = Trace::new();
            let mut tone = ToneGenerator::new(trace.pin("beeper"));
            assert_eq!(tone.sound(code, &mut trace.clock()), Ok(None));
            assert!(trace.events().is_empty());
        }
    }

    #[test]
    fn burst_uses_the_current_period() {
        let trace = Trace::new();
        let mut tone = ToneGenerator::new(trace.pin("beeper"));
        let mut period = TonePeriod(0);
        period.decrement();
        tone.burst(period, &mut trace.clock()).unwrap();
        assert_eq!(trace.delay_us_calls(), vec![65535; 50]);
    }
}
