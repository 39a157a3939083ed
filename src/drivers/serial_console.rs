use core::convert::Infallible;
use ufmt::uWrite;

/// Line-oriented log output over any `ufmt` writer.
///
/// Write errors are dropped; logging must never stall the loop.
pub struct SerialConsole<W> {
    out: W,
}

impl<W: uWrite> SerialConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn free(self) -> W {
        self.out
    }

    /// Raw writer, for `uwriteln!` with arguments.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.write_str(s).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    pub fn write_hex(&mut self, val: u8) {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.out.write_char(HEX_CHARS[(val >> 4) as usize] as char).ok();
        self.out.write_char(HEX_CHARS[(val & 0xF) as usize] as char).ok();
    }

    // [DBG] msg: 0xNN
    pub fn debug(&mut self, msg: &str, val: u8) {
        self.write_str("[DBG] ");
        self.write_str(msg);
        self.write_str(": 0x");
        self.write_hex(val);
        self.write_str("\r\n");
    }
}

/// Writer that discards everything, for builds without a console.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoConsole;

impl uWrite for NoConsole {
    type Error = Infallible;

    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use core::convert::Infallible;
    use std::string::String;
    use ufmt::uWrite;

    #[derive(Default)]
    pub struct Capture(pub String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capture::Capture;
    use super::*;

    #[test]
    fn debug_line_is_hex_formatted() {
        let mut console = SerialConsole::new(Capture::default());
        console.debug("Brightness", 0x7F);
        console.write_line("Ready");
        assert_eq!(console.free().0, "[DBG] Brightness: 0x7F\r\nReady\r\n");
    }

    #[test]
    fn formatted_output_goes_through_writer() {
        let mut console = SerialConsole::new(Capture::default());
        ufmt::uwrite!(console.writer(), "period {}", 460u16).ok();
        assert_eq!(console.free().0, "period 460");
    }
}
