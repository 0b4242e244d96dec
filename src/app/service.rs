//! Control loop — the hexagonal core.
//!
//! [`ControlLoop`] owns the commanded heater state and the polling
//! cadence.  It exposes a clean, hardware-agnostic API; all I/O flows
//! through port traits injected at call sites, making the entire loop
//! testable with mock adapters.
//!
//! ```text
//!  CommandSource ──▶ ┌───────────────────────┐ ──▶ EventSink
//!      BusReader ──▶ │      ControlLoop       │
//! HeaterActuator ◀── │  parse · apply · poll  │
//!                    └───────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::sensors::thermocouple;

use super::commands::{HeaterChannel, HeaterCommand};
use super::events::CycleEvent;
use super::ports::{BusReader, CommandSource, EventSink, HeaterActuator};

/// Loop lifecycle.  There is no terminal state: once cycling, the loop
/// runs until the process is torn down externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed; heaters not yet forced to a known state.
    Idle,
    /// Command → heaters → frame → report, forever.
    Cycling,
}

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

pub struct ControlLoop {
    state: LoopState,
    /// Heater state as last commanded, in [`HeaterChannel::ALL`] order.
    heaters: [bool; HeaterChannel::COUNT],
    cycle_count: u64,
    echo_commands: bool,
}

impl ControlLoop {
    /// Construct the loop from configuration.
    ///
    /// Does **not** touch the heaters — call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: LoopState::Idle,
            heaters: [false; HeaterChannel::COUNT],
            cycle_count: 0,
            echo_commands: config.echo_commands,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force every heater off and enter the cycling state.
    pub fn start(&mut self, hw: &mut impl HeaterActuator, sink: &mut impl EventSink) {
        hw.all_off();
        self.heaters = [false; HeaterChannel::COUNT];
        self.state = LoopState::Cycling;
        sink.emit(&CycleEvent::Started);
        info!("control loop started, heaters off");
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle: command → heaters → frame → report.
    ///
    /// The `hw` parameter satisfies **both** [`BusReader`] and
    /// [`HeaterActuator`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn run_cycle(
        &mut self,
        console: &mut impl CommandSource,
        hw: &mut (impl BusReader + HeaterActuator),
        sink: &mut impl EventSink,
    ) {
        self.cycle_count += 1;

        // 1. Block for the next operator line.
        let line = console.next_line();
        if self.echo_commands {
            sink.emit(&CycleEvent::CommandReceived(line.clone()));
        }

        // 2. Resolve and apply the heater vector.  Every channel is
        //    re-asserted each cycle, whether or not it changed.
        let command = HeaterCommand::parse(&line);
        for channel in HeaterChannel::ALL {
            let on = command.is_on(channel);
            hw.set_heater(channel, on);
            self.heaters[channel.index()] = on;
        }

        // 3. Poll the thermocouple.  A bus fault is reported and the
        //    cycle ends; the heater outputs applied above stay in
        //    effect — sensor transport and heater policy are separate
        //    concerns.
        match hw.read_frame() {
            Ok(frame) => {
                sink.emit(&CycleEvent::Reading(thermocouple::decode(frame)));
            }
            Err(e) => {
                sink.emit(&CycleEvent::BusFault(e));
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Heater state as last commanded (there is no hardware readback).
    pub fn heater_commanded(&self, channel: HeaterChannel) -> bool {
        self.heaters[channel.index()]
    }

    /// Total control cycles executed since start.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}
