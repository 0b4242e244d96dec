//! Mock hardware adapter for integration tests.
//!
//! Records every heater call and serves scripted bus frames so tests can
//! assert on the full command history without touching real GPIO/SPI
//! registers.

use std::collections::VecDeque;

use reflowctl::app::commands::HeaterChannel;
use reflowctl::app::events::CycleEvent;
use reflowctl::app::ports::{
    BusError, BusReader, CommandLine, CommandSource, EventSink, HeaterActuator,
};
use reflowctl::sensors::thermocouple::RawFrame;

// ── Heater call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaterCall {
    Set { channel: HeaterChannel, on: bool },
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub heater_calls: Vec<HeaterCall>,
    frames: VecDeque<Result<RawFrame, BusError>>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            heater_calls: Vec::new(),
            frames: VecDeque::new(),
        }
    }

    /// Queue a frame for the next bus read.
    pub fn queue_frame(&mut self, frame: RawFrame) {
        self.frames.push_back(Ok(frame));
    }

    /// Queue a bus fault for the next bus read.
    pub fn queue_fault(&mut self, err: BusError) {
        self.frames.push_back(Err(err));
    }

    /// Effective state of `channel` after the recorded call history.
    pub fn heater_on(&self, channel: HeaterChannel) -> bool {
        self.heater_calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HeaterCall::Set { channel: ch, on } if *ch == channel => Some(*on),
                HeaterCall::AllOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Number of `Set` calls recorded for `channel`.
    pub fn set_calls_for(&self, channel: HeaterChannel) -> usize {
        self.heater_calls
            .iter()
            .filter(|c| matches!(c, HeaterCall::Set { channel: ch, .. } if *ch == channel))
            .count()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl BusReader for MockHardware {
    fn read_frame(&mut self) -> Result<RawFrame, BusError> {
        // An unscripted read is a test bug; fail loudly as a bus fault.
        self.frames.pop_front().unwrap_or(Err(BusError::Other))
    }
}

impl HeaterActuator for MockHardware {
    fn set_heater(&mut self, channel: HeaterChannel, on: bool) {
        self.heater_calls.push(HeaterCall::Set { channel, on });
    }

    fn all_off(&mut self) {
        self.heater_calls.push(HeaterCall::AllOff);
    }
}

// ── ScriptedConsole ───────────────────────────────────────────

/// Serves a fixed sequence of operator lines, then empty lines.
pub struct ScriptedConsole {
    lines: VecDeque<CommandLine>,
}

impl ScriptedConsole {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: lines
                .into_iter()
                .map(|l| CommandLine::try_from(l).expect("scripted line too long"))
                .collect(),
        }
    }
}

impl CommandSource for ScriptedConsole {
    fn next_line(&mut self) -> CommandLine {
        self.lines.pop_front().unwrap_or_default()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<CycleEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn readings(&self) -> Vec<&CycleEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, CycleEvent::Reading(_)))
            .collect()
    }

    pub fn bus_faults(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CycleEvent::BusFault(_)))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &CycleEvent) {
        self.events.push(event.clone());
    }
}
