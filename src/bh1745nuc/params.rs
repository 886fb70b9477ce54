//! Strongly typed parameter enumerations for the BH1745NUC driver.

use modular_bitfield::prelude::Specifier;

/// RGBC measurement gain selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Gain {
    /// Gain ×1.
    X1 = 0b00,
    /// Gain ×2.
    X2 = 0b01,
    /// Gain ×16.
    X16 = 0b10,
}

/// Measurement period selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum MeasurementRate {
    /// 160 ms measurement period.
    Ms160 = 0b000,
    /// 320 ms measurement period.
    Ms320 = 0b001,
    /// 640 ms measurement period.
    Ms640 = 0b010,
    /// 1280 ms measurement period.
    Ms1280 = 0b011,
    /// 2560 ms measurement period.
    Ms2560 = 0b100,
    /// 5120 ms measurement period.
    Ms5120 = 0b101,
}

/// Color channel driving the threshold interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum InterruptSource {
    /// Red channel.
    Red = 0b00,
    /// Green channel.
    Green = 0b01,
    /// Blue channel.
    Blue = 0b10,
    /// Clear channel.
    Clear = 0b11,
}

/// Number of consecutive threshold violations required before the
/// interrupt line asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Persistence {
    /// Assert at each end of measurement.
    EndOfMeasurement = 0b00,
    /// Update at each end of measurement.
    UpdateEndOfMeasurement = 0b01,
    /// Assert after four consecutive violations.
    UpdateFourTimes = 0b10,
    /// Assert after eight consecutive violations.
    UpdateEightTimes = 0b11,
}
