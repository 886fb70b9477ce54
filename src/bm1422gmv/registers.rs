//! Register map definitions for the BM1422GMV magnetometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::registers::{Register, RegisterAccess};

use super::params::{AverageFilter, MeasurementRate, Precision};

/// Register address of `WIA` (who-am-I).
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `DATAX_LSB`.
pub const REG_DATAX_L: u8 = 0x10;
/// Register address of `STA1`.
pub const REG_STA1: u8 = 0x18;
/// Register address of `CNTL1`.
pub const REG_CNTL1: u8 = 0x1B;
/// Register address of `CNTL2`.
pub const REG_CNTL2: u8 = 0x1C;
/// Register address of `CNTL3`.
pub const REG_CNTL3: u8 = 0x1D;
/// Register address of `AVE_A` (averaging control).
pub const REG_AVER: u8 = 0x40;
/// Register address of `CNTL4_LSB`.
pub const REG_CNTL4: u8 = 0x5C;
/// Register address of `TEMP_LSB`.
pub const REG_TEMP_L: u8 = 0x60;
/// Register address of `OFF_X_LSB`.
pub const REG_OFFX_L: u8 = 0x6C;
/// Register address of `OFF_Y_LSB`.
pub const REG_OFFY_L: u8 = 0x72;
/// Register address of `OFF_Z_LSB`.
pub const REG_OFFZ_L: u8 = 0x78;

/// Expected `WIA` value.
pub const EXPECTED_WHO_AM_I: u8 = 0x41;

/// `CNTL3` value triggering a measurement.
pub const CNTL3_FORCE: u8 = 0x40;

/// Bitfield representation of `CNTL1` (address `0x1B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cntl1 {
    #[skip]
    __: B1,
    // Single-shot measurement selection (bit 1, FS1).
    pub single_shot: bool,
    #[skip]
    __: B1,
    // Output data rate selection (bits 4:3).
    pub rate: MeasurementRate,
    // Logic reset release level (bit 5, RST_LV).
    pub rst_lv: bool,
    // Output precision selection (bit 6, OUT_BIT).
    pub precision: Precision,
    // Power control (bit 7, PC1).
    pub power_on: bool,
}

impl From<u8> for Cntl1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Cntl1> for u8 {
    fn from(value: Cntl1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CNTL2` (address `0x1C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cntl2 {
    #[skip]
    __: B2,
    // DRDY pin polarity (bit 2, DRP); 0 = active low.
    pub drdy_active_high: bool,
    // DRDY pin enable (bit 3, DREN).
    pub drdy_enable: bool,
    #[skip]
    __: B4,
}

impl From<u8> for Cntl2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Cntl2> for u8 {
    fn from(value: Cntl2) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `AVE_A` register (address `0x40`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AverageControl {
    #[skip]
    __: B2,
    // Number of samples averaged (bits 4:2).
    pub filter: AverageFilter,
    #[skip]
    __: B3,
}

impl From<u8> for AverageControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AverageControl> for u8 {
    fn from(value: AverageControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `STA1` (address `0x18`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sta1 {
    #[skip]
    __: B6,
    // Data ready flag (bit 6, RD_DRDY).
    pub data_ready: bool,
    #[skip]
    __: B1,
}

impl From<u8> for Sta1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Sta1> for u8 {
    fn from(value: Sta1) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Cntl1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CNTL1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x22);
}

impl Register for Cntl2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CNTL2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for AverageControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_AVER;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Sta1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_STA1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cntl1_layout_matches_datasheet() {
        let cntl1 = Cntl1::new()
            .with_power_on(true)
            .with_precision(Precision::Bit14)
            .with_rate(MeasurementRate::Hz1000)
            .with_single_shot(true);

        assert_eq!(u8::from(cntl1), 0b1101_1010);
    }

    #[test]
    fn average_control_uses_bits_4_2() {
        assert_eq!(
            u8::from(AverageControl::new().with_filter(AverageFilter::X16)),
            0b0001_0000
        );
        assert_eq!(
            u8::from(AverageControl::new().with_filter(AverageFilter::X1)),
            0b0000_0100
        );
    }

    #[test]
    fn sta1_data_ready_is_bit_6() {
        assert!(Sta1::from(0x40u8).data_ready());
        assert!(!Sta1::from(0xBFu8).data_ready());
    }
}
