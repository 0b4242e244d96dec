//! Heater element driver (solid-state relay drive).
//!
//! One driver instance per heating element.  Dumb actuator: the control
//! loop re-asserts the state every cycle and this driver touches the pin
//! on every call, so redundant writes are the normal case.
//!
//! ## Safety contract
//!
//! The output is forced off at construction so the element is in a known
//! state before the first operator command arrives.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::commands::HeaterChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterState {
    Off,
    On,
}

pub struct HeaterDriver<P: OutputPin> {
    pin: P,
    channel: HeaterChannel,
    /// Pin level that energises the element (`true` = active high).
    active_high: bool,
    state: HeaterState,
}

impl<P: OutputPin> HeaterDriver<P> {
    /// Wrap an output pin and force it to the off level.
    pub fn new(pin: P, channel: HeaterChannel, active_high: bool) -> Self {
        let mut driver = Self {
            pin,
            channel,
            active_high,
            state: HeaterState::Off,
        };
        driver.set(false);
        driver
    }

    /// Drive the element on or off.  Fire-and-forget: a pin-level
    /// failure is logged, not propagated.
    pub fn set(&mut self, on: bool) {
        let level_high = on == self.active_high;
        let result = if level_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            warn!("heater {:?}: pin write failed", self.channel);
        }
        self.state = if on { HeaterState::On } else { HeaterState::Off };
    }

    pub fn state(&self) -> HeaterState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, HeaterState::On)
    }
}
