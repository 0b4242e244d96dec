//! Reflow oven controller — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter          ConsoleCommandSource           │
//! │  (BusReader+Heater)       (CommandSource)                │
//! │  LogEventSink                                            │
//! │  (EventSink)                                             │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ─────────────        │
//! │                                                          │
//! │  ┌──────────────────────────────────────────────────┐    │
//! │  │            ControlLoop (pure logic)              │    │
//! │  │  parse command · drive heaters · decode frame    │    │
//! │  └──────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use embedded_hal::spi::MODE_0;
use log::info;

use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::spi::config::Config as SpiConfig;
use esp_idf_hal::spi::{SpiDeviceDriver, SpiDriverConfig};
use esp_idf_hal::units::Hertz;

use reflowctl::adapters::console::ConsoleCommandSource;
use reflowctl::adapters::hardware::HardwareAdapter;
use reflowctl::adapters::log_sink::LogEventSink;
use reflowctl::adapters::spi_bus::SpiBusAdapter;
use reflowctl::app::commands::HeaterChannel;
use reflowctl::app::service::ControlLoop;
use reflowctl::config::SystemConfig;
use reflowctl::drivers::heater::HeaterDriver;
use reflowctl::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("reflowctl v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();

    // ── 2. Peripheral bring-up ────────────────────────────────
    let peripherals = Peripherals::take()?;
    let gpio = peripherals.pins;

    let spi = SpiDeviceDriver::new_single(
        peripherals.spi2,
        gpio.gpio12, // SCLK  (pins::TC_SPI_SCLK_GPIO)
        gpio.gpio11, // MOSI  (pins::TC_SPI_MOSI_GPIO) — idle, the IC is read-only
        Some(gpio.gpio13), // MISO (pins::TC_SPI_MISO_GPIO)
        Some(gpio.gpio10), // CS   (pins::TC_SPI_CS_GPIO)
        &SpiDriverConfig::new(),
        &SpiConfig::new()
            .baudrate(Hertz(config.spi_frequency_hz))
            .data_mode(MODE_0),
    )?;

    let heater_top = HeaterDriver::new(
        PinDriver::output(gpio.gpio8.downgrade_output())?,
        HeaterChannel::Top,
        config.heater_active_high,
    );
    let heater_bottom = HeaterDriver::new(
        PinDriver::output(gpio.gpio9.downgrade_output())?,
        HeaterChannel::Bottom,
        config.heater_active_high,
    );

    info!(
        "thermocouple on SPI2 (sclk={} miso={} cs={}), heaters on gpio {}/{}",
        pins::TC_SPI_SCLK_GPIO,
        pins::TC_SPI_MISO_GPIO,
        pins::TC_SPI_CS_GPIO,
        pins::HEATER_TOP_GPIO,
        pins::HEATER_BOTTOM_GPIO,
    );

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(SpiBusAdapter::new(spi), heater_top, heater_bottom);
    let mut console = ConsoleCommandSource::stdin();
    let mut sink = LogEventSink::new();

    // ── 4. Control loop ───────────────────────────────────────
    let mut oven = ControlLoop::new(&config);
    oven.start(&mut hw, &mut sink);

    info!("System ready. Awaiting operator commands.");

    loop {
        oven.run_cycle(&mut console, &mut hw, &mut sink);
    }
}
