use embedded_hal::digital::v2::OutputPin;

/// The four user LEDs, D3 to D6.
pub struct Leds<P> {
    leds: [P; 4],
}

impl<P: OutputPin> Leds<P> {
    /// Pins in D3..D6 order.
    pub fn new(leds: [P; 4]) -> Self {
        Self { leds }
    }

    pub fn free(self) -> [P; 4] {
        self.leds
    }

    pub fn set_pattern(&mut self, pattern: u8) -> Result<(), P::Error> {
        for (i, led) in self.leds.iter_mut().enumerate() {
            if (pattern & (1 << i)) != 0 {
                led.set_high()?;
            } else {
                led.set_low()?;
            }
        }
        Ok(())
    }

    pub fn set_all(&mut self, state: bool) -> Result<(), P::Error> {
        self.set_pattern(if state { 0x0F } else { 0x00 })
    }

    /// Light the LED for a button code: 1 is D3, 2 is D4. Any other code
    /// turns all four off. Lighting one LED leaves the others as they were.
    pub fn show(&mut self, code: u8) -> Result<(), P::Error> {
        match code {
            1 => self.leds[0].set_high(),
            2 => self.leds[1].set_high(),
            _ => self.set_all(false),
        }
    }
}
