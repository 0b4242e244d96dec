//! GPIO / peripheral pin assignments for the oven controller board.
//!
//! Single source of truth — the binary references this module rather
//! than hard-coding pin numbers in the bring-up sequence.

// ---------------------------------------------------------------------------
// SPI bus to the thermocouple interface IC
// ---------------------------------------------------------------------------

/// SPI2 clock.
pub const TC_SPI_SCLK_GPIO: i32 = 12;
/// SPI2 MISO — the IC's data-out line.
pub const TC_SPI_MISO_GPIO: i32 = 13;
/// SPI2 MOSI — the IC has no data-in line; the pin is reserved by the
/// bus driver and left idle.
pub const TC_SPI_MOSI_GPIO: i32 = 11;
/// Chip select, active low.
pub const TC_SPI_CS_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Heater outputs (SSR drive)
// ---------------------------------------------------------------------------

/// Upper heating element.
pub const HEATER_TOP_GPIO: i32 = 8;
/// Lower heating element.
pub const HEATER_BOTTOM_GPIO: i32 = 9;
