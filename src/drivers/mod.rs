pub mod brightness;
pub mod leds;
pub mod serial_console;
pub mod switches;
pub mod tone;

pub use brightness::BrightnessController;
pub use leds::Leds;
pub use serial_console::{NoConsole, SerialConsole};
pub use switches::{Switch, Switches};
pub use tone::{Note, ToneGenerator};
