//! Software PWM for one LED.
//!
//! Each sweep counts a comparator down from 255 to 1, one 20us step at a time,
//! and writes the pin high on the single step where the counter equals the
//! brightness level. Nothing clears it until the sweep ends.
//! Level 0 never matches and leaves the LED dark.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::config::{PWM_STEP_US, PWM_TOP};
use crate::state::Brightness;

pub struct BrightnessController<LED> {
    led: LED,
    step_us: u16,
}

impl<LED: OutputPin> BrightnessController<LED> {
    pub fn new(led: LED) -> Self {
        Self::with_step(led, PWM_STEP_US)
    }

    pub fn with_step(led: LED, step_us: u16) -> Self {
        Self { led, step_us }
    }

    pub fn free(self) -> LED {
        self.led
    }

    /// Run one full PWM cycle of 255 sub-steps and leave the LED off.
    pub fn sweep<D: DelayUs<u16>>(&mut self, level: Brightness, delay: &mut D) -> Result<(), LED::Error> {
        let mut counter = PWM_TOP;
        while counter != 0 {
            if counter == level.level() {
                self.led.set_high()?;
            }
            counter -= 1;
            delay.delay_us(self.step_us);
        }
        self.led.set_low()
    }
}
