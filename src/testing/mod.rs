//! Recording fakes for host-side tests.
//!
//! Output pins and the clock share one [`Trace`], so a test can see exactly
//! which delay a pin edge landed between.

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::{InputPin, OutputPin};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    High(&'static str),
    Low(&'static str),
    DelayUs(u32),
    DelayMs(u32),
}

#[derive(Clone, Debug, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn pin(&self, name: &'static str) -> TracePin {
        TracePin {
            name,
            trace: self.clone(),
        }
    }

    pub fn clock(&self) -> FakeClock {
        FakeClock {
            trace: self.clone(),
        }
    }

    /// Every edge written to `name`, in order. `true` is high.
    pub fn edges(&self, name: &str) -> Vec<bool> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match *e {
                Event::High(n) if n == name => Some(true),
                Event::Low(n) if n == name => Some(false),
                _ => None,
            })
            .collect()
    }

    /// Number of microsecond delays recorded before the first high edge on `name`.
    pub fn delays_before_high(&self, name: &str) -> Option<usize> {
        let mut delays = 0;
        for e in self.0.borrow().iter() {
            match *e {
                Event::DelayUs(_) => delays += 1,
                Event::High(n) if n == name => return Some(delays),
                _ => {}
            }
        }
        None
    }

    pub fn delay_us_calls(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match *e {
                Event::DelayUs(us) => Some(us),
                _ => None,
            })
            .collect()
    }

    pub fn total_us(&self) -> u64 {
        self.0
            .borrow()
            .iter()
            .map(|e| match *e {
                Event::DelayUs(us) => us as u64,
                Event::DelayMs(ms) => ms as u64 * 1000,
                _ => 0,
            })
            .sum()
    }
}

/// Output pin that logs every write.
#[derive(Clone, Debug)]
pub struct TracePin {
    name: &'static str,
    trace: Trace,
}

impl OutputPin for TracePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Low(self.name));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::High(self.name));
        Ok(())
    }
}

/// Delay provider that returns at once and logs the requested time.
#[derive(Clone, Debug)]
pub struct FakeClock {
    trace: Trace,
}

impl DelayUs<u16> for FakeClock {
    fn delay_us(&mut self, us: u16) {
        self.trace.push(Event::DelayUs(us as u32));
    }
}

impl DelayMs<u16> for FakeClock {
    fn delay_ms(&mut self, ms: u16) {
        self.trace.push(Event::DelayMs(ms as u32));
    }
}

/// Active-low input that plays back a script of presses, then reads released.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSwitch {
    script: Rc<RefCell<VecDeque<bool>>>,
    reads: Rc<RefCell<usize>>,
}

impl ScriptedSwitch {
    pub fn released() -> Self {
        Self::default()
    }

    pub fn pressed_for(reads: usize) -> Self {
        Self::script(&vec![true; reads])
    }

    pub fn script(presses: &[bool]) -> Self {
        Self {
            script: Rc::new(RefCell::new(presses.iter().copied().collect())),
            reads: Rc::default(),
        }
    }

    pub fn reads(&self) -> usize {
        *self.reads.borrow()
    }

    fn next_pressed(&self) -> bool {
        *self.reads.borrow_mut() += 1;
        self.script.borrow_mut().pop_front().unwrap_or(false)
    }
}

impl InputPin for ScriptedSwitch {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(!self.next_pressed())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.next_pressed())
    }
}
