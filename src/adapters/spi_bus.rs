//! SPI bus adapter for the thermocouple interface IC.
//!
//! Implements [`BusReader`] over any [`embedded_hal::spi::SpiDevice`].
//! The IC has no registers and no write path: asserting chip-select and
//! clocking 32 bits out is the entire transaction.  Framing, clock rate
//! and chip-select timing live in the HAL device handed in here.

use embedded_hal::spi::{Error as _, ErrorKind, SpiDevice};

use crate::app::ports::{BusError, BusReader};
use crate::sensors::thermocouple::RawFrame;

/// Bridges a HAL SPI device to the [`BusReader`] port.
pub struct SpiBusAdapter<S: SpiDevice> {
    spi: S,
}

impl<S: SpiDevice> SpiBusAdapter<S> {
    pub fn new(spi: S) -> Self {
        Self { spi }
    }
}

impl<S: SpiDevice> BusReader for SpiBusAdapter<S> {
    fn read_frame(&mut self) -> Result<RawFrame, BusError> {
        let mut frame: RawFrame = [0; 4];
        self.spi
            .read(&mut frame)
            .map_err(|e| classify(e.kind()))?;
        Ok(frame)
    }
}

/// Collapse the HAL error taxonomy into the bus fault the loop reports.
fn classify(kind: ErrorKind) -> BusError {
    match kind {
        ErrorKind::ChipSelectFault => BusError::ChipSelect,
        ErrorKind::Overrun | ErrorKind::ModeFault | ErrorKind::FrameFormat => BusError::Transfer,
        _ => BusError::Other,
    }
}
