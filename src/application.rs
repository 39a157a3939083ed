//! Application layer: the two loop programs and the driver that runs them.
//!
//! A program does one pass of its main loop per [`Program::step`] call and
//! reports an [`Outcome`]. [`run_until_exit`] keeps stepping until a pass
//! asks for a restart or a nap; acting on that is left to the caller,
//! since on hardware neither returns.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};
use ufmt::{uWrite, uwriteln};

use crate::bootloader::BootTrigger;
use crate::config::{LoopConfig, NoteConfig};
use crate::drivers::{BrightnessController, Leds, SerialConsole, Switch, Switches, ToneGenerator};
use crate::state::{LoopState, NoteState, Outcome};

pub trait Program {
    type State;
    type Error;

    /// Power-up state for this program.
    fn initial_state(&self) -> Self::State;

    /// One pass of the main loop.
    fn step<D>(&mut self, state: &mut Self::State, delay: &mut D) -> Result<Outcome, Self::Error>
    where
        D: DelayUs<u16> + DelayMs<u16>;
}

/// Step `program` until it returns anything but [`Outcome::Continue`].
pub fn run_until_exit<P, D, W>(
    program: &mut P,
    state: &mut P::State,
    delay: &mut D,
    console: &mut SerialConsole<W>,
) -> Result<Outcome, P::Error>
where
    P: Program,
    D: DelayUs<u16> + DelayMs<u16>,
    W: uWrite,
{
    loop {
        let outcome = program.step(state, delay)?;
        match outcome {
            Outcome::Continue => continue,
            Outcome::RestartRequested => console.write_line("Restarting into bootloader..."),
            Outcome::EnterSleep => console.write_line("Entering power down mode..."),
        }
        return Ok(outcome);
    }
}

/// LED dimmer: SW2 dims, SW3 brightens, SW1 restarts. With the tone
/// activity on, SW4 and SW5 lower and raise the beeper period.
pub struct LoopsApp<SW, LED, BEEP> {
    switches: Switches<SW>,
    pwm: BrightnessController<LED>,
    beeper: ToneGenerator<BEEP>,
    trigger: BootTrigger,
    config: LoopConfig,
}

impl<SW, LED, BEEP, E> LoopsApp<SW, LED, BEEP>
where
    SW: InputPin<Error = E>,
    LED: OutputPin<Error = E>,
    BEEP: OutputPin<Error = E>,
{
    pub fn new(switches: Switches<SW>, led: LED, beeper: BEEP, config: LoopConfig) -> Self {
        Self {
            switches,
            pwm: BrightnessController::with_step(led, config.step_us),
            beeper: ToneGenerator::new(beeper),
            trigger: BootTrigger::default(),
            config,
        }
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn free(self) -> (Switches<SW>, LED, BEEP) {
        (self.switches, self.pwm.free(), self.beeper.free())
    }

    pub fn banner<W: uWrite>(&self, console: &mut SerialConsole<W>, state: &LoopState) {
        console.write_line("UBMP4 loops: brightness");
        console.debug("Brightness", state.brightness.level());
        if self.config.tone_enabled {
            uwriteln!(console.writer(), "Tone period: {}us\r", state.tone_period.micros()).ok();
        }
    }
}

impl<SW, LED, BEEP, E> Program for LoopsApp<SW, LED, BEEP>
where
    SW: InputPin<Error = E>,
    LED: OutputPin<Error = E>,
    BEEP: OutputPin<Error = E>,
{
    type State = LoopState;
    type Error = E;

    fn initial_state(&self) -> LoopState {
        LoopState::new(self.config.initial_brightness, self.config.initial_tone_period)
    }

    fn step<D>(&mut self, state: &mut LoopState, delay: &mut D) -> Result<Outcome, E>
    where
        D: DelayUs<u16> + DelayMs<u16>,
    {
        let decrease = self.switches.read_switch(Switch::Sw2)?;
        let increase = self.switches.read_switch(Switch::Sw3)?;
        state.brightness.adjust(decrease, increase);

        self.pwm.sweep(state.brightness, delay)?;

        if self.config.tone_enabled {
            let lower = self.switches.read_switch(Switch::Sw4)?;
            let raise = self.switches.read_switch(Switch::Sw5)?;
            state.tone_period.adjust(lower, raise);
            self.beeper
                .play(state.tone_period.micros(), self.config.tone_cycles, delay)?;
        }

        self.trigger.poll(&self.switches)
    }
}

/// Button, light and sound test: SW2 plays E6 on D3, SW3 plays A5 on D4.
/// Powers down after a stretch with no note button pressed.
pub struct NoteApp<SW, LED, BEEP> {
    switches: Switches<SW>,
    leds: Leds<LED>,
    beeper: ToneGenerator<BEEP>,
    trigger: BootTrigger,
    config: NoteConfig,
}

impl<SW, LED, BEEP, E> NoteApp<SW, LED, BEEP>
where
    SW: InputPin<Error = E>,
    LED: OutputPin<Error = E>,
    BEEP: OutputPin<Error = E>,
{
    pub fn new(switches: Switches<SW>, leds: Leds<LED>, beeper: BEEP, config: NoteConfig) -> Self {
        Self {
            switches,
            leds,
            beeper: ToneGenerator::new(beeper),
            trigger: BootTrigger::default(),
            config,
        }
    }

    pub fn free(self) -> (Switches<SW>, Leds<LED>, BEEP) {
        (self.switches, self.leds, self.beeper.free())
    }

    /// Dark LEDs before a nap.
    pub fn lights_out(&mut self) -> Result<(), E> {
        self.leds.set_all(false)
    }

    pub fn banner<W: uWrite>(&self, console: &mut SerialConsole<W>) {
        console.write_line("UBMP4 loops: note test");
        if self.config.idle_timeout_ticks != 0 {
            uwriteln!(
                console.writer(),
                "Idle power down after {} x {}ms\r",
                self.config.idle_timeout_ticks,
                self.config.idle_tick_ms
            )
            .ok();
        }
    }
}

impl<SW, LED, BEEP, E> Program for NoteApp<SW, LED, BEEP>
where
    SW: InputPin<Error = E>,
    LED: OutputPin<Error = E>,
    BEEP: OutputPin<Error = E>,
{
    type State = NoteState;
    type Error = E;

    fn initial_state(&self) -> NoteState {
        NoteState::default()
    }

    fn step<D>(&mut self, state: &mut NoteState, delay: &mut D) -> Result<Outcome, E>
    where
        D: DelayUs<u16> + DelayMs<u16>,
    {
        let code = self.switches.button_code()?;
        self.leds.show(code)?;
        self.beeper.sound(code, delay)?;
        self.leds.show(0)?;
        state.last_code = code;

        if self.trigger.poll(&self.switches)?.is_exit() {
            return Ok(Outcome::RestartRequested);
        }

        if code != 0 {
            state.idle_ticks = 0;
            return Ok(Outcome::Continue);
        }

        delay.delay_ms(self.config.idle_tick_ms);
        state.idle_ticks = state.idle_ticks.saturating_add(1);
        let timeout = self.config.idle_timeout_ticks;
        if timeout != 0 && state.idle_ticks >= timeout {
            state.idle_ticks = 0;
            return Ok(Outcome::EnterSleep);
        }
        Ok(Outcome::Continue)
    }
}
