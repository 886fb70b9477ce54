//! Strongly typed parameter enumerations for the BM1422GMV driver.

use modular_bitfield::prelude::Specifier;

/// Continuous measurement rate selections (`CNTL1` ODR bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum MeasurementRate {
    /// 10 Hz output data rate.
    Hz10 = 0b00,
    /// 100 Hz output data rate.
    Hz100 = 0b01,
    /// 20 Hz output data rate.
    Hz20 = 0b10,
    /// 1 kHz output data rate.
    Hz1000 = 0b11,
}

/// Output precision selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Precision {
    /// 12-bit output, 6 LSB/µT.
    Bit12 = 0,
    /// 14-bit output, 24 LSB/µT.
    Bit14 = 1,
}

impl Precision {
    /// Counts per microtesla delivered at this precision.
    pub const fn lsb_per_microtesla(self) -> f32 {
        match self {
            Self::Bit12 => 6.0,
            Self::Bit14 => 24.0,
        }
    }
}

/// Conversion scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Free-running conversion at the configured rate.
    Continuous,
    /// One conversion per trigger.
    SingleShot,
}

/// Number of samples averaged into one output (`AVE_A` register).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum AverageFilter {
    /// Average of 4 samples (power-on default).
    X4 = 0b000,
    /// No averaging.
    X1 = 0b001,
    /// Average of 2 samples.
    X2 = 0b010,
    /// Average of 8 samples.
    X8 = 0b011,
    /// Average of 16 samples.
    X16 = 0b100,
}
