//! Button-driven LED brightness and tone loops for the UBMP4 learning board.
//!
//! The loop logic runs against `embedded-hal` pin and delay traits so it can
//! be stepped on the host with fake pins. The `hal` module binds it to the
//! ATmega128 when building for AVR.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod bootloader;
pub mod config;
pub mod drivers;
pub mod pattern;
pub mod state;
pub mod wake;

#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
mod testing;

pub use application::{run_until_exit, LoopsApp, NoteApp, Program};
pub use state::{Brightness, LoopState, NoteState, Outcome, TonePeriod};
