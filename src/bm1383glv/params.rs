//! Strongly typed parameter enumerations for the BM1383GLV driver.

use modular_bitfield::prelude::Specifier;

/// Measurement mode and continuous rate selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum MeasurementMode {
    /// No measurement.
    Standby = 0b000,
    /// One measurement, then stop.
    OneShot = 0b001,
    /// Continuous measurement at 20 Hz.
    Rate20Hz = 0b010,
    /// Continuous measurement at 10 Hz.
    Rate10Hz = 0b011,
    /// Continuous measurement at 5 Hz.
    Rate5Hz = 0b100,
}

/// Number of raw conversions averaged into one pressure sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum AverageFilter {
    /// No averaging.
    Off = 0b000,
    /// Average of 2 conversions.
    X2 = 0b001,
    /// Average of 4 conversions.
    X4 = 0b010,
    /// Average of 8 conversions.
    X8 = 0b011,
    /// Average of 16 conversions.
    X16 = 0b100,
    /// Average of 32 conversions.
    X32 = 0b101,
    /// Average of 64 conversions.
    X64 = 0b110,
}
