use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use ufmt::uWrite;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

// UCSR0A
const UDRE: u8 = 1 << 5;
// UCSR0B
const TXEN: u8 = 1 << 3;
// UCSR0C: 8 data bits, no parity, 1 stop
const FRAME_8N1: u8 = 0x06;

/// Transmit-only USART0, polled. Used for the log console.
pub struct Uart {
    _private: (),
}

impl Uart {
    pub fn new() -> Self {
        unsafe {
            let p = &*USART0::ptr();
            p.ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            p.ubrr0l.write(|w| w.bits(UBRR as u8));
            p.ucsr0c.write(|w| w.bits(FRAME_8N1));
            p.ucsr0b.write(|w| w.bits(TXEN));
        }
        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            let p = &*USART0::ptr();
            while p.ucsr0a.read().bits() & UDRE == 0 {}
            p.udr0.write(|w| w.bits(byte));
        }
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}

impl uWrite for Uart {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
