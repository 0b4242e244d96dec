//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing cycle events to the logger (which
//! goes to UART / USB-CDC in production).  Readings use the labelled
//! two-decimal layout operators already know from the bench tooling.

use log::{info, warn};

use crate::app::events::CycleEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`CycleEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &CycleEvent) {
        match event {
            CycleEvent::Started => {
                info!("START | heaters off, polling");
            }
            CycleEvent::CommandReceived(line) => {
                info!("CMD   | {}", line.as_str());
            }
            CycleEvent::Reading(r) => {
                info!(
                    "READ  | probe={:.2}C reference={:.2}C | scv={} scg={} oc={} fault={}",
                    r.probe_temperature_c,
                    r.reference_temperature_c,
                    u8::from(r.fault_short_to_vcc),
                    u8::from(r.fault_short_to_gnd),
                    u8::from(r.fault_open_circuit),
                    u8::from(r.fault_any),
                );
            }
            CycleEvent::BusFault(e) => {
                warn!("BUS   | read failed: {e}");
            }
        }
    }
}
