//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (the SPI bus, heater outputs, operator console, event
//! sinks) implement these traits.  The
//! [`ControlLoop`](super::service::ControlLoop) consumes them via
//! generics, so the domain core never touches hardware directly.

use heapless::String;

use super::commands::HeaterChannel;
use super::events::CycleEvent;
use crate::sensors::thermocouple::RawFrame;

/// Maximum accepted operator command line length, in bytes.
///
/// Longer input is truncated at the port boundary; only the first
/// [`HeaterChannel::COUNT`] positions are ever inspected anyway.
pub const COMMAND_CAPACITY: usize = 16;

/// One operator command line, terminator stripped.
pub type CommandLine = String<COMMAND_CAPACITY>;

// ───────────────────────────────────────────────────────────────
// Bus port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one SPI transaction yielding one raw sensor frame.
pub trait BusReader {
    /// Clock a full 4-byte frame out of the thermocouple interface IC.
    ///
    /// Blocks for the duration of the transaction; at most one
    /// transaction is outstanding at any time.
    fn read_frame(&mut self) -> Result<RawFrame, BusError>;
}

// ───────────────────────────────────────────────────────────────
// Heater port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the heater outputs.
///
/// Calls are fire-and-forget with no readback.  The domain re-asserts
/// every channel on every cycle, so implementations must tolerate
/// redundant writes.
pub trait HeaterActuator {
    /// Drive one heater channel on or off.
    fn set_heater(&mut self, channel: HeaterChannel, on: bool);

    /// Force every channel off (startup / shutdown).
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Command port (driven adapter: operator → domain)
// ───────────────────────────────────────────────────────────────

/// Blocking source of operator command lines.
pub trait CommandSource {
    /// Wait for the next line.  The terminator is stripped and input is
    /// truncated to [`COMMAND_CAPACITY`] bytes.
    fn next_line(&mut self) -> CommandLine;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`CycleEvent`]s through this port.
/// Adapters decide where they go (serial log, test recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &CycleEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`BusReader`] transactions.
///
/// The variants mirror the HAL's error taxonomy for diagnostics, but the
/// control loop treats them all identically: report once, skip the
/// cycle's reading, carry on.  There is no retry and no
/// transient/permanent distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The SPI transfer did not complete (overrun, mode or framing fault).
    Transfer,
    /// Chip-select handling failed.
    ChipSelect,
    /// The HAL reported an unclassified error.
    Other,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transfer => write!(f, "SPI transfer failed"),
            Self::ChipSelect => write!(f, "chip-select fault"),
            Self::Other => write!(f, "bus error"),
        }
    }
}
