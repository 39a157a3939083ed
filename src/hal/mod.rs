pub mod gpio;
pub mod power;
pub mod timer;
pub mod uart;
pub mod watchdog;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin, Port};
pub use power::{Power, SleepMode};
pub use timer::{Delay, Prescaler};
pub use uart::Uart;
pub use watchdog::{Watchdog, WatchdogTimeout};
