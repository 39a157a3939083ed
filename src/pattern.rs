//! Step pattern storage for the Simon-style note game.

use crate::config::PATTERN_LENGTH;

/// Append-only sequence of note codes (1-4).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern {
    steps: [u8; PATTERN_LENGTH],
    len: u8,
}

impl Pattern {
    pub const fn new() -> Self {
        Self {
            steps: [0; PATTERN_LENGTH],
            len: 0,
        }
    }

    /// Append a step. Returns the new length, or `None` when full.
    pub fn push(&mut self, code: u8) -> Option<usize> {
        let len = self.len as usize;
        if len >= PATTERN_LENGTH {
            return None;
        }
        self.steps[len] = code;
        self.len += 1;
        Some(len + 1)
    }

    pub fn get(&self, step: usize) -> Option<u8> {
        self.as_slice().get(step).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.steps[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == PATTERN_LENGTH
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Note code 1-4 from the low two bits of a random value.
#[inline]
pub fn next_step_code(random: u16) -> u8 {
    (random & 0b11) as u8 + 1
}

/// Shift the previous seed up a byte and append a new timer sample.
#[inline]
pub fn mix_seed(previous: u16, sample: u8) -> u16 {
    (previous << 8) | sample as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_to_capacity_then_refuses() {
        let mut pattern = Pattern::new();
        for i in 0..PATTERN_LENGTH {
            assert_eq!(pattern.push(next_step_code(i as u16)), Some(i + 1));
        }
        assert!(pattern.is_full());
        assert_eq!(pattern.push(1), None);
        assert_eq!(pattern.len(), 42);
        assert_eq!(pattern.get(0), Some(1));
        assert_eq!(pattern.get(3), Some(4));
        assert_eq!(pattern.get(42), None);
    }

    #[test]
    fn clear_forgets_steps() {
        let mut pattern = Pattern::new();
        pattern.push(2);
        pattern.clear();
        assert!(pattern.is_empty());
        assert_eq!(pattern.get(0), None);
    }

    #[test]
    fn step_codes_stay_in_range() {
        for r in [0u16, 1, 2, 3, 4, 0xFFFF] {
            assert!((1..=4).contains(&next_step_code(r)));
        }
    }

    #[test]
    fn seed_keeps_last_sample_in_low_byte() {
        assert_eq!(mix_seed(0x0000, 0xAB), 0x00AB);
        assert_eq!(mix_seed(0x12AB, 0xCD), 0xABCD);
    }
}
