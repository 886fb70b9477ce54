//! Register map definitions for the BU9873 real-time clock.
//!
//! The device decodes a 4-bit internal address from the high nibble of the
//! address byte; the constants below carry that shifted form. Burst access
//! wraps from `0xF` back to `0x0`, which the driver exploits to move the
//! control word and all seven time fields in one transfer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::registers::{Register, RegisterAccess};

/// Register address of `SECONDS`.
pub const REG_SECONDS: u8 = 0x00;
/// Register address of `MINUTES`.
pub const REG_MINUTES: u8 = 0x10;
/// Register address of `HOURS`.
pub const REG_HOURS: u8 = 0x20;
/// Register address of `DAY_OF_WEEK`.
pub const REG_DAYOFWEEK: u8 = 0x30;
/// Register address of `DAY_OF_MONTH`.
pub const REG_DAY: u8 = 0x40;
/// Register address of `MONTH`.
pub const REG_MONTH: u8 = 0x50;
/// Register address of `YEAR`.
pub const REG_YEAR: u8 = 0x60;
/// Register address of `ADJUST` (oscillation adjustment).
pub const REG_ADJUST: u8 = 0x70;
/// Register address of `CONTROL1` (alarm enables).
pub const REG_CTRL1: u8 = 0xE0;
/// Register address of `CONTROL2`.
pub const REG_CTRL2: u8 = 0xF0;

/// In 12-hour mode the hour value occupies the low five bits of the hours
/// byte; bit 5 carries the PM flag.
pub const HOURS_VALUE_MASK: u8 = 0x1F;
/// PM flag inside the hours byte (12-hour mode only).
pub const HOURS_PM_BIT: u8 = 0x20;

/// Bitfield representation of `CONTROL2` (address nibble `0xF`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl2 {
    // Alarm B triggered flag (bit 0, BAFG).
    pub alarm_b_flag: bool,
    // Alarm A triggered flag (bit 1, AAFG).
    pub alarm_a_flag: bool,
    // Periodic interrupt flag (bit 2, CTFG).
    pub periodic_flag: bool,
    // 32 kHz clock output disable (bit 3, CLENB).
    pub clock_output_disable: bool,
    // Oscillation stop detected (bit 4, XSTP).
    pub oscillator_stopped: bool,
    // 12-hour mode selection (bit 5); clear for 24-hour counting.
    pub twelve_hour: bool,
    #[skip]
    __: B2,
}

impl From<u8> for Ctrl2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl2> for u8 {
    fn from(value: Ctrl2) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Ctrl2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl2_twelve_hour_is_bit_5() {
        assert!(Ctrl2::from(0x20u8).twelve_hour());
        assert!(!Ctrl2::from(0xDFu8).twelve_hour());
        assert_eq!(u8::from(Ctrl2::new().with_twelve_hour(true)), 0x20);
    }
}
