use avr_device::atmega128a::WDT;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum WatchdogTimeout {
    Ms16 = 0,
}

pub struct Watchdog {
    _private: (),
}

impl Watchdog {
    #[inline]
    pub fn new() -> Self {
        Self { _private: () }
    }

    #[inline]
    pub fn start(&mut self, timeout: WatchdogTimeout) {
        unsafe {
            let p = WDT::ptr();
            // Enable change bit and system reset mode
            (*p).wdtcr.write(|w| w.bits(0x18));
            // Set timeout and enable watchdog
            (*p).wdtcr.write(|w| w.bits(0x08 | timeout as u8));
        }
    }

    /// Restart the chip from the reset vector, where the bootloader
    /// gets first look.
    pub fn reset_device(&mut self) -> ! {
        avr_device::interrupt::disable();
        self.start(WatchdogTimeout::Ms16);
        loop {}
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}
