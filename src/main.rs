#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use panic_halt as _;
use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;
use core::convert::Infallible;

use ubmp4_loops::drivers::{SerialConsole, Switches};
use ubmp4_loops::hal::{board, Delay, Power, Uart, Watchdog};
use ubmp4_loops::wake::{interrupt_mask, WakeAction, WakeController, BUTTON_WAKE_MASK};
use ubmp4_loops::{run_until_exit, Outcome, Program};

#[cfg(not(feature = "note-test"))]
use ubmp4_loops::{config::LoopConfig, LoopsApp};
#[cfg(feature = "note-test")]
use ubmp4_loops::{config::NoteConfig, drivers::Leds, NoteApp};

// Shared with the wake interrupt handlers
static WAKE: Mutex<RefCell<WakeController>> = Mutex::new(RefCell::new(WakeController::new()));

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[avr_device::entry]
fn main() -> ! {
    board::configure_oscillator();
    let io = board::configure_io();

    let mut delay = Delay::new();
    let mut console = SerialConsole::new(Uart::new());
    let switches = Switches::new(io.switches);

    #[cfg(not(feature = "note-test"))]
    let outcome = {
        let [_, led, _, _] = io.leds;
        #[cfg(feature = "tone")]
        let config = LoopConfig::with_tone();
        #[cfg(not(feature = "tone"))]
        let config = LoopConfig::default();
        let mut app = LoopsApp::new(switches, led, io.beeper, config);
        let mut state = app.initial_state();
        app.banner(&mut console, &state);
        infallible(run_until_exit(&mut app, &mut state, &mut delay, &mut console))
    };

    #[cfg(feature = "note-test")]
    let outcome = {
        let mut app = NoteApp::new(switches, Leds::new(io.leds), io.beeper, NoteConfig::default());
        let mut state = app.initial_state();
        app.banner(&mut console);
        let outcome = infallible(run_until_exit(&mut app, &mut state, &mut delay, &mut console));
        if outcome == Outcome::EnterSleep {
            infallible(app.lights_out());
        }
        outcome
    };

    if outcome == Outcome::EnterSleep {
        nap();
    }

    // Both exits restart the program from the top
    Watchdog::new().reset_device()
}

fn nap() {
    let mask = interrupt::free(|cs| WAKE.borrow(cs).borrow_mut().arm());
    board::arm_button_wake(mask);
    Power::new().nap();
}

fn on_button_change() {
    interrupt::free(|cs| match WAKE.borrow(cs).borrow_mut().on_button_change() {
        WakeAction::Resume => board::disarm_button_wake(interrupt_mask(BUTTON_WAKE_MASK)),
        WakeAction::Ignored => {}
    });
}

#[avr_device::interrupt(atmega128a)]
fn INT4() {
    on_button_change();
}

#[avr_device::interrupt(atmega128a)]
fn INT5() {
    on_button_change();
}

#[avr_device::interrupt(atmega128a)]
fn INT6() {
    on_button_change();
}

#[avr_device::interrupt(atmega128a)]
fn INT7() {
    on_button_change();
}
