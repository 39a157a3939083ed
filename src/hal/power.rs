use avr_device::atmega128a::CPU;

// MCUCR: SE is bit 5, SM1:SM0 bits 4:3, SM2 bit 2
const SLEEP_ENABLE: u8 = 0x20;
const SLEEP_MODE_MASK: u8 = 0x1C;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    PowerDown = 0x10,
}

pub struct Power {
    _private: (),
}

impl Power {
    pub fn new() -> Self {
        Self { _private: () }
    }

    #[inline]
    pub fn set_sleep_mode(&mut self, mode: SleepMode) {
        unsafe {
            let p = CPU::ptr();
            (*p).mcucr
                .modify(|r, w| w.bits((r.bits() & !SLEEP_MODE_MASK) | mode as u8));
        }
    }

    #[inline]
    pub fn enable_sleep(&mut self) {
        unsafe {
            let p = CPU::ptr();
            (*p).mcucr.modify(|r, w| w.bits(r.bits() | SLEEP_ENABLE));
        }
    }

    #[inline]
    pub fn disable_sleep(&mut self) {
        unsafe {
            let p = CPU::ptr();
            (*p).mcucr.modify(|r, w| w.bits(r.bits() & !SLEEP_ENABLE));
        }
    }

    /// Power down with interrupts enabled. Returns once a wake interrupt
    /// has been serviced.
    pub fn nap(&mut self) {
        self.set_sleep_mode(SleepMode::PowerDown);
        self.enable_sleep();
        unsafe { avr_device::interrupt::enable() };
        avr_device::asm::sleep();
        self.disable_sleep();
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::new()
    }
}
