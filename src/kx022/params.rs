//! Strongly typed parameter enumerations for the KX022-1020 driver.

use modular_bitfield::prelude::Specifier;

/// Acceleration range selections (`CNTL1` GSEL bits).
///
/// The range also selects the LSB-per-g scale used to decode samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±2 g full scale, 16384 LSB/g.
    G2 = 0b00,
    /// ±4 g full scale, 8192 LSB/g.
    G4 = 0b01,
    /// ±8 g full scale, 4096 LSB/g.
    G8 = 0b10,
}

impl Range {
    /// Counts per g at this range in high-resolution mode.
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
        }
    }
}

/// Output data rate selections (`ODCNTL` OSA bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// 12.5 Hz output data rate.
    Hz12_5 = 0b0000,
    /// 25 Hz output data rate.
    Hz25 = 0b0001,
    /// 50 Hz output data rate.
    Hz50 = 0b0010,
    /// 100 Hz output data rate.
    Hz100 = 0b0011,
    /// 200 Hz output data rate.
    Hz200 = 0b0100,
    /// 400 Hz output data rate.
    Hz400 = 0b0101,
    /// 800 Hz output data rate.
    Hz800 = 0b0110,
    /// 1600 Hz output data rate.
    Hz1600 = 0b0111,
    /// 0.781 Hz output data rate.
    Hz0_781 = 0b1000,
    /// 1.563 Hz output data rate.
    Hz1_563 = 0b1001,
    /// 3.125 Hz output data rate.
    Hz3_125 = 0b1010,
    /// 6.25 Hz output data rate.
    Hz6_25 = 0b1011,
}

impl OutputDataRate {
    /// Returns the ODR in hertz.
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz12_5 => 12.5,
            Self::Hz25 => 25.0,
            Self::Hz50 => 50.0,
            Self::Hz100 => 100.0,
            Self::Hz200 => 200.0,
            Self::Hz400 => 400.0,
            Self::Hz800 => 800.0,
            Self::Hz1600 => 1600.0,
            Self::Hz0_781 => 0.781,
            Self::Hz1_563 => 1.563,
            Self::Hz3_125 => 3.125,
            Self::Hz6_25 => 6.25,
        }
    }
}

/// Sample buffer operating modes (`BUF_CNTL2` BM bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum BufferMode {
    /// Stop collecting when full.
    Fifo = 0b00,
    /// Overwrite the oldest sample when full.
    Stream = 0b01,
    /// Collect around a trigger event.
    Trigger = 0b10,
}
