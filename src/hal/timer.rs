use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use crate::config::CPU_FREQ_HZ;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Div8 = 2,
}

const PRESCALER_MASK: u8 = 0x07;

/// Timer0 ticks per microsecond with the /8 prescaler (2 at 16MHz).
const TICKS_PER_US: u32 = CPU_FREQ_HZ / 8 / 1_000_000;

/// Busy-wait delays on a free-running Timer0.
pub struct Delay {
    _private: (),
}

impl Delay {
    pub fn new() -> Self {
        unsafe {
            let p = &*TC0::ptr();
            p.tcnt0.write(|w| w.bits(0));
            p.tccr0.modify(|r, w| {
                w.bits((r.bits() & !PRESCALER_MASK) | (Prescaler::Div8 as u8 & PRESCALER_MASK))
            });
        }
        Self { _private: () }
    }

    #[inline]
    fn counter(&self) -> u8 {
        unsafe { (*TC0::ptr()).tcnt0.read().bits() }
    }

    // Counts elapsed ticks across 8-bit wraps; polled well within 128 ticks.
    fn wait_ticks(&mut self, mut ticks: u32) {
        let mut last = self.counter();
        while ticks > 0 {
            let now = self.counter();
            let elapsed = now.wrapping_sub(last) as u32;
            last = now;
            ticks = ticks.saturating_sub(elapsed);
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        self.wait_ticks(us as u32 * TICKS_PER_US);
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            self.wait_ticks(1000 * TICKS_PER_US);
        }
    }
}
