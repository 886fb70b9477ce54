//! Register map definitions for the BH1745NUC color sensor.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::registers::{Register, RegisterAccess};

use super::params::{Gain, InterruptSource, MeasurementRate, Persistence};

/// Register address of `SYSTEM_CONTROL` (soft reset).
pub const REG_SWRST: u8 = 0x40;
/// Register address of `MODE_CONTROL1`.
pub const REG_MODE1: u8 = 0x41;
/// Register address of `MODE_CONTROL2`.
pub const REG_MODE2: u8 = 0x42;
/// Register address of `MODE_CONTROL3`.
pub const REG_MODE3: u8 = 0x44;
/// Register address of `RED_DATA_LSB`.
pub const REG_RED_L: u8 = 0x50;
/// Register address of `INTERRUPT`.
pub const REG_INT: u8 = 0x60;
/// Register address of `PERSISTENCE`.
pub const REG_PERSISTENCE: u8 = 0x61;
/// Register address of `TH_LSB` (high watermark).
pub const REG_TH_L: u8 = 0x62;
/// Register address of `TH_MSB`.
pub const REG_TH_H: u8 = 0x63;
/// Register address of `TL_LSB` (low watermark).
pub const REG_TL_L: u8 = 0x64;
/// Register address of `TL_MSB`.
pub const REG_TL_H: u8 = 0x65;
/// Register address of `MANUFACTURER_ID`.
pub const REG_ID: u8 = 0x92;

/// Expected `MANUFACTURER_ID` value.
pub const EXPECTED_ID: u8 = 0xE0;

/// Interrupt soft-reset command.
pub const INT_RESET_COMMAND: u8 = 0x40;
/// System soft-reset command.
pub const SYS_RESET_COMMAND: u8 = 0x80;

/// Bitfield representation of `MODE_CONTROL1` (address `0x41`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode1 {
    // Measurement period selection (bits 2:0).
    pub rate: MeasurementRate,
    #[skip]
    __: B5,
}

impl From<u8> for Mode1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Mode1> for u8 {
    fn from(value: Mode1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `MODE_CONTROL2` (address `0x42`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode2 {
    // RGBC measurement gain (bits 1:0).
    pub gain: Gain,
    #[skip]
    __: B2,
    // RGBC measurement enable (bit 4).
    pub rgbc_enable: bool,
    #[skip]
    __: B2,
    // Measurement data valid flag (bit 7, read-only).
    pub valid: bool,
}

impl From<u8> for Mode2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Mode2> for u8 {
    fn from(value: Mode2) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INTERRUPT` register (address `0x60`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntControl {
    // Interrupt enable (bit 0).
    pub enable: bool,
    #[skip]
    __: B1,
    // Interrupt source channel selection (bits 3:2).
    pub source: InterruptSource,
    // Latch until the interrupt register is read (bit 4).
    pub latch: bool,
    #[skip]
    __: B2,
    // Latched interrupt status (bit 7, read-only).
    pub status: bool,
}

impl From<u8> for IntControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<IntControl> for u8 {
    fn from(value: IntControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PERSISTENCE` register (address `0x61`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistenceControl {
    // Interrupt persistence selection (bits 1:0).
    pub persistence: Persistence,
    #[skip]
    __: B6,
}

impl From<u8> for PersistenceControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PersistenceControl> for u8 {
    fn from(value: PersistenceControl) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Mode1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_MODE1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Mode2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_MODE2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for IntControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for PersistenceControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_PERSISTENCE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x01);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode2_layout_matches_datasheet() {
        let mode2 = Mode2::new().with_rgbc_enable(true).with_gain(Gain::X16);
        assert_eq!(u8::from(mode2), 0b0001_0010);
    }

    #[test]
    fn int_control_source_sits_in_bits_3_2() {
        let int = IntControl::new()
            .with_enable(true)
            .with_source(InterruptSource::Blue);
        assert_eq!(u8::from(int), 0b0000_1001);

        let decoded = IntControl::from(0b1000_0000u8);
        assert!(decoded.status());
        assert!(!decoded.enable());
    }
}
