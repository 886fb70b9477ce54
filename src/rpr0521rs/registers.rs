//! Register map definitions for the RPR-0521RS proximity/ambient light
//! sensor.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::registers::{Register, RegisterAccess};

use super::params::{
    AlsGain, AmbientIr, InterruptMode, LedCurrent, MeasurementRate, Persistence, PsGain, PsPulse,
};

/// Register address of `SYSTEM_CONTROL` (soft reset).
pub const REG_SWRST: u8 = 0x40;
/// Register address of `MODE_CONTROL`.
pub const REG_MODE: u8 = 0x41;
/// Register address of `ALS_PS_CONTROL`.
pub const REG_ALS_CNTL: u8 = 0x42;
/// Register address of `PS_CONTROL`.
pub const REG_PS_CNTL: u8 = 0x43;
/// Register address of `PS_DATA_LSB`.
pub const REG_PS_DATA_L: u8 = 0x44;
/// Register address of `ALS_DATA0_LSB` (visible + infrared).
pub const REG_ALS_DATA0_L: u8 = 0x46;
/// Register address of `ALS_DATA1_LSB` (infrared).
pub const REG_ALS_DATA1_L: u8 = 0x48;
/// Register address of `INTERRUPT`.
pub const REG_INT: u8 = 0x4A;
/// Register address of `PS_TH_LSB` (proximity high watermark).
pub const REG_PS_TH_L: u8 = 0x4B;
/// Register address of `PS_TH_MSB`.
pub const REG_PS_TH_H: u8 = 0x4C;
/// Register address of `PS_TL_LSB` (proximity low watermark).
pub const REG_PS_TL_L: u8 = 0x4D;
/// Register address of `PS_TL_MSB`.
pub const REG_PS_TL_H: u8 = 0x4E;
/// Register address of `ALS_DATA0_TH_LSB` (ambient high watermark).
pub const REG_ALS_TH_L: u8 = 0x4F;
/// Register address of `ALS_DATA0_TH_MSB`.
pub const REG_ALS_TH_H: u8 = 0x50;
/// Register address of `ALS_DATA0_TL_LSB` (ambient low watermark).
pub const REG_ALS_TL_L: u8 = 0x51;
/// Register address of `ALS_DATA0_TL_MSB`.
pub const REG_ALS_TL_H: u8 = 0x52;
/// Register address of `PS_OFFSET_LSB`.
pub const REG_PS_OFFS_L: u8 = 0x53;
/// Register address of `PS_OFFSET_MSB`.
pub const REG_PS_OFFS_H: u8 = 0x54;
/// Register address of `MANUFACT_ID`.
pub const REG_ID: u8 = 0x92;

/// Expected `MANUFACT_ID` value.
pub const EXPECTED_ID: u8 = 0xE0;

/// Interrupt soft-reset command: clears the latched interrupt without
/// touching measurement data or configuration.
pub const INT_RESET_COMMAND: u8 = 0x40;
/// System soft-reset command: returns every register to its default.
pub const SYS_RESET_COMMAND: u8 = 0x80;

/// Bitfield representation of the `MODE_CONTROL` register (address `0x41`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeControl {
    // Measurement rate selection (bits 3:0).
    pub rate: MeasurementRate,
    // PS double-measurement enable (bit 4).
    pub ps_double: bool,
    // PS LED pulse width selection (bit 5).
    pub ps_pulse: PsPulse,
    // Proximity measurement enable (bit 6).
    pub ps_enable: bool,
    // Ambient light measurement enable (bit 7).
    pub als_enable: bool,
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

/// Bitfield representation of the `ALS_PS_CONTROL` register (address `0x42`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlsControl {
    // LED drive current selection (bits 1:0).
    pub led_current: LedCurrent,
    // ALS DATA1 (infrared) gain (bits 3:2).
    pub gain_ir: AlsGain,
    // ALS DATA0 (visible + infrared) gain (bits 5:4).
    pub gain_visible: AlsGain,
    #[skip]
    __: B2,
}

impl From<u8> for AlsControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AlsControl> for u8 {
    fn from(value: AlsControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PS_CONTROL` register (address `0x43`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsControl {
    // Interrupt persistence selection (bits 1:0).
    pub persistence: Persistence,
    #[skip]
    __: B2,
    // Proximity gain (bits 5:4).
    pub gain: PsGain,
    // Ambient infrared level classification (bits 7:6, read-only).
    pub ambient_ir: AmbientIr,
}

impl From<u8> for PsControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PsControl> for u8 {
    fn from(value: PsControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INTERRUPT` register (address `0x4A`).
///
/// The low bits configure the interrupt source and mode; the two top bits
/// report the latched trigger status and read back as zero after an
/// interrupt soft-reset.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntControl {
    // PS threshold interrupt enable (bit 0).
    pub ps_enable: bool,
    // ALS threshold interrupt enable (bit 1).
    pub als_enable: bool,
    // Latch until the interrupt register is read (bit 2).
    pub latch: bool,
    // INT pin assert behaviour (bit 3).
    pub pin_assert: bool,
    // Interrupt trigger mode (bits 5:4).
    pub mode: InterruptMode,
    // Latched ALS trigger status (bit 6).
    pub als_status: bool,
    // Latched PS trigger status (bit 7).
    pub ps_status: bool,
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

impl Register for AlsControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_ALS_CNTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for PsControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_PS_CNTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for IntControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates the MODE_CONTROL layout against the datasheet bit map.
    #[test]
    fn mode_control_layout_matches_datasheet() {
        let mode = ModeControl::new()
            .with_rate(MeasurementRate::Als10HzPs10Hz)
            .with_ps_pulse(PsPulse::Us330)
            .with_ps_enable(true)
            .with_als_enable(true);

        assert_eq!(u8::from(mode), 0b1110_0110);
    }

    #[test]
    fn int_control_roundtrip() {
        let int = IntControl::from(0b1001_0011u8);
        assert!(int.ps_status());
        assert!(!int.als_status());
        assert_eq!(int.mode(), InterruptMode::Hysteresis);
        assert!(int.ps_enable());
        assert!(int.als_enable());
        assert_eq!(u8::from(int), 0b1001_0011);
    }
}
