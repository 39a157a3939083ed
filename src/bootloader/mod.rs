//! Bootloader re-entry.
//!
//! Holding SW1 at the end of a loop iteration restarts the board, and the
//! bootloader takes over from reset. The trigger only reports the request;
//! the outer driver performs the reset, which never returns.

use embedded_hal::digital::v2::InputPin;

use crate::drivers::{Switch, Switches};
use crate::state::Outcome;

pub struct BootTrigger {
    switch: Switch,
}

impl BootTrigger {
    pub const fn new(switch: Switch) -> Self {
        Self { switch }
    }

    pub fn switch(&self) -> Switch {
        self.switch
    }

    /// Read the trigger button once.
    pub fn poll<P: InputPin>(&self, switches: &Switches<P>) -> Result<Outcome, P::Error> {
        if switches.read_switch(self.switch)? {
            Ok(Outcome::RestartRequested)
        } else {
            Ok(Outcome::Continue)
        }
    }
}

impl Default for BootTrigger {
    fn default() -> Self {
        Self::new(Switch::Sw1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSwitch;

    #[test]
    fn sw1_requests_restart() {
        let sw1 = ScriptedSwitch::pressed_for(1);
        let switches = Switches::new([
            sw1.clone(),
            ScriptedSwitch::pressed_for(5),
            ScriptedSwitch::released(),
            ScriptedSwitch::released(),
            ScriptedSwitch::released(),
        ]);
        let trigger = BootTrigger::default();
        assert_eq!(trigger.poll(&switches), Ok(Outcome::RestartRequested));
        assert_eq!(trigger.poll(&switches), Ok(Outcome::Continue));
        assert_eq!(sw1.reads(), 2);
    }
}
