//! Outbound cycle events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them — log to serial, feed a test
//! recorder, etc.

use super::ports::{BusError, CommandLine};
use crate::sensors::thermocouple::ThermocoupleReading;

/// Structured events emitted by the control loop.
#[derive(Debug, Clone)]
pub enum CycleEvent {
    /// The loop has started and both heaters are in a known (off) state.
    Started,

    /// An operator line was received, emitted before it is acted on.
    CommandReceived(CommandLine),

    /// A frame was read and decoded; IC fault bits, if any, are data
    /// inside the reading, not a failure of the cycle.
    Reading(ThermocoupleReading),

    /// The bus transaction failed; no reading exists for this cycle.
    BusFault(BusError),
}
