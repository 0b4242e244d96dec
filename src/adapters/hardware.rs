//! Hardware adapter — bridges real peripherals to the domain port traits.
//!
//! Owns the SPI bus adapter and both heater drivers, exposing them
//! through [`BusReader`] and [`HeaterActuator`].  The generic parameters
//! keep the adapter target-neutral: the binary instantiates it with
//! ESP-IDF HAL types, the tests with in-memory fakes.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use super::spi_bus::SpiBusAdapter;
use crate::app::commands::HeaterChannel;
use crate::app::ports::{BusError, BusReader, HeaterActuator};
use crate::drivers::heater::HeaterDriver;
use crate::sensors::thermocouple::RawFrame;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<S: SpiDevice, P: OutputPin> {
    bus: SpiBusAdapter<S>,
    heater_top: HeaterDriver<P>,
    heater_bottom: HeaterDriver<P>,
}

impl<S: SpiDevice, P: OutputPin> HardwareAdapter<S, P> {
    pub fn new(
        bus: SpiBusAdapter<S>,
        heater_top: HeaterDriver<P>,
        heater_bottom: HeaterDriver<P>,
    ) -> Self {
        Self {
            bus,
            heater_top,
            heater_bottom,
        }
    }

    fn heater(&mut self, channel: HeaterChannel) -> &mut HeaterDriver<P> {
        match channel {
            HeaterChannel::Top => &mut self.heater_top,
            HeaterChannel::Bottom => &mut self.heater_bottom,
        }
    }
}

// ── BusReader implementation ──────────────────────────────────

impl<S: SpiDevice, P: OutputPin> BusReader for HardwareAdapter<S, P> {
    fn read_frame(&mut self) -> Result<RawFrame, BusError> {
        self.bus.read_frame()
    }
}

// ── HeaterActuator implementation ─────────────────────────────

impl<S: SpiDevice, P: OutputPin> HeaterActuator for HardwareAdapter<S, P> {
    fn set_heater(&mut self, channel: HeaterChannel, on: bool) {
        self.heater(channel).set(on);
    }

    fn all_off(&mut self) {
        for channel in HeaterChannel::ALL {
            self.heater(channel).set(false);
        }
    }
}
