//! Register map definitions for the BM1383GLV barometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::registers::{Register, RegisterAccess};

use super::params::{AverageFilter, MeasurementMode};

/// Register address of `ID`.
pub const REG_ID: u8 = 0x10;
/// Register address of `SOFT_RESET`.
pub const REG_SWRST: u8 = 0x11;
/// Register address of `POWER`.
pub const REG_PWR: u8 = 0x12;
/// Register address of `RESET` (measurement block reset).
pub const REG_RST: u8 = 0x13;
/// Register address of `MODE_CONTROL`.
pub const REG_MODE: u8 = 0x14;
/// Register address of `PDTH_H_MSB` (high watermark, high byte).
pub const REG_PDTH_H_H: u8 = 0x15;
/// Register address of `PDTH_H_LSB`.
pub const REG_PDTH_H_L: u8 = 0x16;
/// Register address of `PDTH_L_MSB` (low watermark, high byte).
pub const REG_PDTH_L_H: u8 = 0x17;
/// Register address of `PDTH_L_LSB`.
pub const REG_PDTH_L_L: u8 = 0x18;
/// Register address of `INTERRUPT`.
pub const REG_INT: u8 = 0x19;
/// Register address of `PRESSURE_MSB`.
pub const REG_PRESS_H: u8 = 0x1C;

/// Expected `ID` value.
pub const EXPECTED_ID: u8 = 0x31;

/// Interrupt soft-reset command.
pub const INT_RESET_COMMAND: u8 = 0x40;
/// System soft-reset command.
pub const SYS_RESET_COMMAND: u8 = 0x80;

/// `POWER` register value enabling the device.
pub const PWR_ON: u8 = 0x01;
/// `RESET` register value releasing the measurement block.
pub const RST_RELEASE: u8 = 0x01;
/// `RESET` register value holding the measurement block in reset.
pub const RST_HOLD: u8 = 0x00;

/// Bitfield representation of `MODE_CONTROL` (address `0x14`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeControl {
    // Measurement mode selection (bits 2:0).
    pub mode: MeasurementMode,
    // Average the temperature channel as well (bit 3).
    pub temperature_average: bool,
    #[skip]
    __: B1,
    // Pressure averaging selection (bits 7:5).
    pub average: AverageFilter,
}

impl From<u8> for ModeControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ModeControl> for u8 {
    fn from(value: ModeControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INTERRUPT` register (address `0x19`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntControl {
    // Interrupt output enable (bit 0).
    pub enable: bool,
    // Interrupt pin drive mode (bit 1).
    pub mode: bool,
    #[skip]
    __: B1,
    // Internal pull-up resistor control (bit 3); set when the external
    // line has no pull-up of its own.
    pub pu_en: bool,
    // Low watermark interrupt enable (bit 4).
    pub low_enable: bool,
    // High watermark interrupt enable (bit 5).
    pub high_enable: bool,
    // Latched low watermark status (bit 6, read-only).
    pub low_status: bool,
    // Latched high watermark status (bit 7, read-only).
    pub high_status: bool,
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

impl Register for ModeControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_MODE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for IntControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_control_places_average_in_the_top_bits() {
        let mode = ModeControl::new()
            .with_mode(MeasurementMode::Rate20Hz)
            .with_temperature_average(true)
            .with_average(AverageFilter::X16);

        assert_eq!(u8::from(mode), 0b100_0_1_010);
    }

    #[test]
    fn int_control_status_bits_sit_on_top() {
        let int = IntControl::from(0b1100_0000u8);
        assert!(int.high_status());
        assert!(int.low_status());
        assert!(!int.enable());
    }
}
