use avr_device::atmega128a::{PORTA, PORTB, PORTE};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    E,
}

// Runs `$body` with the port's (DDR, PORT, PIN) registers bound.
macro_rules! with_regs {
    ($port:expr, |$ddr:ident, $out:ident, $inp:ident| $body:expr) => {
        unsafe {
            match $port {
                Port::A => {
                    let p = &*PORTA::ptr();
                    let ($ddr, $out, $inp) = (&p.ddra, &p.porta, &p.pina);
                    $body
                }
                Port::B => {
                    let p = &*PORTB::ptr();
                    let ($ddr, $out, $inp) = (&p.ddrb, &p.portb, &p.pinb);
                    $body
                }
                Port::E => {
                    let p = &*PORTE::ptr();
                    let ($ddr, $out, $inp) = (&p.ddre, &p.porte, &p.pine);
                    $body
                }
            }
        }
    };
}

/// A port pin with its port and bit chosen at runtime, so pins of one mode
/// share a type and fit in arrays.
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    bit: u8,
    _mode: PhantomData<MODE>,
}

impl Pin<Input> {
    /// Input with the internal pull-up on, for an active-low button.
    pub fn pull_up(port: Port, bit: u8) -> Self {
        let mask = 1 << bit;
        with_regs!(port, |ddr, out, _inp| {
            ddr.modify(|r, w| w.bits(r.bits() & !mask));
            out.modify(|r, w| w.bits(r.bits() | mask));
        });
        Pin {
            port,
            bit,
            _mode: PhantomData,
        }
    }

    #[inline]
    fn read(&self) -> bool {
        let mask = 1 << self.bit;
        with_regs!(self.port, |_ddr, _out, inp| inp.read().bits() & mask != 0)
    }
}

impl Pin<Output> {
    /// Output, driven low.
    pub fn output(port: Port, bit: u8) -> Self {
        let mask = 1 << bit;
        with_regs!(port, |ddr, out, _inp| {
            out.modify(|r, w| w.bits(r.bits() & !mask));
            ddr.modify(|r, w| w.bits(r.bits() | mask));
        });
        Pin {
            port,
            bit,
            _mode: PhantomData,
        }
    }

    #[inline]
    fn write(&mut self, high: bool) {
        let mask = 1 << self.bit;
        with_regs!(self.port, |_ddr, out, _inp| {
            if high {
                out.modify(|r, w| w.bits(r.bits() | mask));
            } else {
                out.modify(|r, w| w.bits(r.bits() & !mask));
            }
        });
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.read())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.read())
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

/// Board wiring: LEDs D3-D6 on PA0-PA3, beeper on PB4, SW1 on PE3 and
/// SW2-SW5 on PE4-PE7 (INT4-INT7, so they can wake the chip).
pub mod board {
    use super::*;
    use avr_device::atmega128a::{CPU, EXINT};

    pub struct Board {
        pub switches: [Pin<Input>; 5],
        pub leds: [Pin<Output>; 4],
        pub beeper: Pin<Output>,
    }

    /// Run the core at the full crystal frequency.
    pub fn configure_oscillator() {
        unsafe {
            (*CPU::ptr()).xdiv.write(|w| w.bits(0));
        }
    }

    pub fn configure_io() -> Board {
        Board {
            switches: [
                Pin::pull_up(Port::E, 3),
                Pin::pull_up(Port::E, 4),
                Pin::pull_up(Port::E, 5),
                Pin::pull_up(Port::E, 6),
                Pin::pull_up(Port::E, 7),
            ],
            leds: [
                Pin::output(Port::A, 0),
                Pin::output(Port::A, 1),
                Pin::output(Port::A, 2),
                Pin::output(Port::A, 3),
            ],
            beeper: Pin::output(Port::B, 4),
        }
    }

    /// Low-level triggered external interrupts for the bits in `mask`, the
    /// only ones that wake us from power-down. Stale flags are cleared first.
    pub fn arm_button_wake(mask: u8) {
        unsafe {
            let p = &*EXINT::ptr();
            p.eicrb.write(|w| w.bits(0x00));
            p.eifr.write(|w| w.bits(mask));
            p.eimsk.modify(|r, w| w.bits(r.bits() | mask));
        }
    }

    /// A held button would keep re-entering a level interrupt.
    pub fn disarm_button_wake(mask: u8) {
        unsafe {
            (*EXINT::ptr()).eimsk.modify(|r, w| w.bits(r.bits() & !mask));
        }
    }
}
