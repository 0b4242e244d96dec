//! Fuzz target: `sensors::thermocouple::decode`
//!
//! Drives arbitrary 4-byte frames into the decoder and asserts that it
//! never panics, always produces field values bounded by their bit
//! widths, and is a pure function of its input.
//!
//! cargo fuzz run fuzz_thermocouple_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use reflowctl::sensors::thermocouple::decode;

fuzz_target!(|frame: [u8; 4]| {
    let reading = decode(frame);

    // Fixed-point fields are bounded by their widths: 14 bits at
    // 0.25 °C, 12 bits at 0.0625 °C.
    assert!((-2048.0..=2047.75).contains(&reading.probe_temperature_c));
    assert!((-128.0..=127.9375).contains(&reading.reference_temperature_c));

    // Decoding is pure.
    assert_eq!(decode(frame), reading);
});
