//! Cold-junction-compensated thermocouple interface IC (MAX31855 class).
//!
//! The IC clocks out a fixed 32-bit frame, MSB first:
//!
//! | Bits                    | Field                                               |
//! |-------------------------|-----------------------------------------------------|
//! | byte0\[7:0\] byte1\[7:2\] | 14-bit probe temperature, two's complement, 1/4 °C  |
//! | byte1\[0\]              | aggregate fault                                     |
//! | byte2\[7:0\] byte3\[7:4\] | 12-bit reference temperature, two's complement, 1/16 °C |
//! | byte3\[2\]              | thermocouple shorted to Vcc                         |
//! | byte3\[1\]              | thermocouple shorted to GND                         |
//! | byte3\[0\]              | thermocouple open circuit                           |
//!
//! The aggregate fault bit lives in byte 1 while the three specific
//! fault bits live in byte 3, and the IC can assert the aggregate with
//! no specific cause reported.  Decoding is total: any 4 bytes produce a
//! fully populated reading.  Transport failures are the bus layer's
//! concern, never the decoder's.

/// One raw 4-byte frame as clocked out of the IC, MSB first.
pub type RawFrame = [u8; 4];

/// Scale of the 14-bit probe field: 0.25 °C per LSB.
const PROBE_LSB_C: f32 = 0.25;
/// Scale of the 12-bit reference field: 0.0625 °C per LSB.
const REFERENCE_LSB_C: f32 = 0.0625;

/// A fully decoded thermocouple readout.
///
/// Fault bits are data, not errors: a reading with faults set is still
/// a successful read of the IC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermocoupleReading {
    /// Compensated temperature at the thermocouple tip (°C).
    pub probe_temperature_c: f32,
    /// Cold-junction temperature at the IC's own terminals (°C).
    pub reference_temperature_c: f32,
    /// Thermocouple input shorted to the supply rail.
    pub fault_short_to_vcc: bool,
    /// Thermocouple input shorted to ground.
    pub fault_short_to_gnd: bool,
    /// Thermocouple input open (broken wire or no probe).
    pub fault_open_circuit: bool,
    /// The IC's aggregate fault bit.  Sourced from a different byte than
    /// the three specific bits and may be set without any of them.
    pub fault_any: bool,
}

/// Decode one raw frame.
///
/// Total function: every 4-byte input yields exactly one fully populated
/// reading.  Garbage bytes decode to implausible but well-defined
/// values.
pub fn decode(frame: RawFrame) -> ThermocoupleReading {
    // 14-bit probe field: byte 0 plus the top six bits of byte 1.
    let probe_raw = ((u16::from(frame[0]) << 8) | u16::from(frame[1] & 0xFC)) >> 2;
    let probe = sign_extend(probe_raw, 14);

    // 12-bit reference field: byte 2 plus the top four bits of byte 3.
    let reference_raw = ((u16::from(frame[2]) << 8) | u16::from(frame[3] & 0xF0)) >> 4;
    let reference = sign_extend(reference_raw, 12);

    ThermocoupleReading {
        probe_temperature_c: f32::from(probe) * PROBE_LSB_C,
        reference_temperature_c: f32::from(reference) * REFERENCE_LSB_C,
        fault_short_to_vcc: frame[3] & 0x04 != 0,
        fault_short_to_gnd: frame[3] & 0x02 != 0,
        fault_open_circuit: frame[3] & 0x01 != 0,
        fault_any: frame[1] & 0x01 != 0,
    }
}

/// Interpret the low `bits` bits of `raw` as two's complement.
fn sign_extend(raw: u16, bits: u32) -> i16 {
    let shift = 16 - bits;
    ((raw << shift) as i16) >> shift
}
