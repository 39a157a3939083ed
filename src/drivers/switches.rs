use embedded_hal::digital::v2::InputPin;

/// The five UBMP4 pushbuttons. SW1 doubles as the bootloader button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    Sw1,
    Sw2,
    Sw3,
    Sw4,
    Sw5,
}

impl Switch {
    #[inline]
    fn index(self) -> usize {
        match self {
            Switch::Sw1 => 0,
            Switch::Sw2 => 1,
            Switch::Sw3 => 2,
            Switch::Sw4 => 3,
            Switch::Sw5 => 4,
        }
    }
}

/// Polled pushbuttons. No debouncing: each call is one raw read.
pub struct Switches<P> {
    pins: [P; 5],
}

impl<P: InputPin> Switches<P> {
    /// Pins in SW1..SW5 order.
    pub fn new(pins: [P; 5]) -> Self {
        Self { pins }
    }

    pub fn free(self) -> [P; 5] {
        self.pins
    }

    /// Buttons are active low: a pressed switch reads 0.
    #[inline]
    pub fn read_switch(&self, switch: Switch) -> Result<bool, P::Error> {
        self.pins[switch.index()].is_low()
    }

    /// Code of the pressed note button: SW2 is 1, SW3 is 2, none is 0.
    /// SW2 wins when both are held, and SW3 is not read in that case.
    pub fn button_code(&self) -> Result<u8, P::Error> {
        if self.read_switch(Switch::Sw2)? {
            Ok(1)
        } else if self.read_switch(Switch::Sw3)? {
            Ok(2)
        } else {
            Ok(0)
        }
    }
}
