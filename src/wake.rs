//! Wake-from-sleep bookkeeping.
//!
//! The board naps with only the pushbutton interrupts armed. The first
//! button interrupt disarms the controller inside a critical section; once
//! the board is awake the program starts over from reset.

/// Switches allowed to wake the board, one bit per switch index (bit 1 is
/// SW2, bit 4 is SW5). SW1 has no external interrupt line.
pub const BUTTON_WAKE_MASK: u8 = 0b0001_1110;

/// Map a switch mask onto external interrupt enable bits. SW2-SW5 sit on
/// INT4-INT7.
pub const fn interrupt_mask(switches: u8) -> u8 {
    (switches & BUTTON_WAKE_MASK) << 3
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeAction {
    /// First button change since arming: mask the button interrupts and
    /// carry on after the sleep instruction.
    Resume,
    /// Already disarmed; nothing to do.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakeController {
    armed: bool,
}

impl WakeController {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Allow the buttons to wake the board. Returns the interrupt enable
    /// bits to set.
    pub fn arm(&mut self) -> u8 {
        self.armed = true;
        interrupt_mask(BUTTON_WAKE_MASK)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn on_button_change(&mut self) -> WakeAction {
        if core::mem::replace(&mut self.armed, false) {
            WakeAction::Resume
        } else {
            WakeAction::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sw1_cannot_wake() {
        assert_eq!(BUTTON_WAKE_MASK & 1, 0);
        assert_eq!(interrupt_mask(BUTTON_WAKE_MASK), 0xF0);
        assert_eq!(interrupt_mask(0b0000_0001), 0);
    }

    #[test]
    fn arm_enables_int4_to_int7() {
        let mut wake = WakeController::new();
        assert!(!wake.is_armed());
        assert_eq!(wake.arm(), 0xF0);
        assert!(wake.is_armed());
    }

    #[test]
    fn button_change_resumes_once_then_disarms() {
        let mut wake = WakeController::new();
        wake.arm();
        assert_eq!(wake.on_button_change(), WakeAction::Resume);
        assert!(!wake.is_armed());
        assert_eq!(wake.on_button_change(), WakeAction::Ignored);
    }

    #[test]
    fn button_change_while_disarmed_is_ignored() {
        let mut wake = WakeController::new();
        assert_eq!(wake.on_button_change(), WakeAction::Ignored);
        assert!(!wake.is_armed());
    }
}
