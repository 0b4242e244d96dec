//! System configuration parameters
//!
//! All tunable parameters for the oven controller. The defaults match
//! the bench board; a future provisioning path can override them at
//! boot.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Thermocouple bus ---
    /// SPI clock for the thermocouple interface IC (Hz)
    pub spi_frequency_hz: u32,

    // --- Heaters ---
    /// Pin level that energises a heater element (true = active high)
    pub heater_active_high: bool,

    // --- Operator console ---
    /// Echo each received command line through the event sink
    pub echo_commands: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            spi_frequency_hz: 500_000,
            heater_active_high: true,
            echo_commands: true,
        }
    }
}
