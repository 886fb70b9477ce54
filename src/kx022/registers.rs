//! Register map definitions for the KX022-1020 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::registers::{Register, RegisterAccess};

use super::params::{BufferMode, OutputDataRate, Range};

/// Register address of `XOUT_L`.
pub const REG_XOUT_L: u8 = 0x06;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `INS2` (interrupt source 2).
pub const REG_INS2: u8 = 0x13;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x15;
/// Register address of `INT_REL` (interrupt latch release).
pub const REG_INT_REL: u8 = 0x17;
/// Register address of `CNTL1`.
pub const REG_CNTL1: u8 = 0x18;
/// Register address of `ODCNTL`.
pub const REG_ODCNTL: u8 = 0x1B;
/// Register address of `INC1` (interrupt pin 1 control).
pub const REG_INC1: u8 = 0x1C;
/// Register address of `INC4` (interrupt pin 1 routing).
pub const REG_INC4: u8 = 0x1F;
/// Register address of `BUF_CNTL1` (buffer watermark).
pub const REG_BUF_CNTL1: u8 = 0x3A;
/// Register address of `BUF_CNTL2`.
pub const REG_BUF_CNTL2: u8 = 0x3B;
/// Register address of `BUF_STATUS_1` (buffered byte count).
pub const REG_BUF_STATUS_1: u8 = 0x3C;
/// Register address of `BUF_CLEAR`.
pub const REG_BUF_CLEAR: u8 = 0x3E;
/// Register address of `BUF_READ`.
pub const REG_BUF_READ: u8 = 0x3F;

/// Expected `WHO_AM_I` value.
pub const EXPECTED_WHO_AM_I: u8 = 0x14;

/// Bitfield representation of `CNTL1` (address `0x18`).
///
/// Writable only while `operating` is clear (stand-by); the commit
/// sequence programs everything first and sets `operating` last.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cntl1 {
    // Tilt position engine enable (bit 0).
    pub tilt_enable: bool,
    // Wake-up engine enable (bit 1).
    pub wakeup_enable: bool,
    // Directional tap engine enable (bit 2).
    pub tap_enable: bool,
    // Acceleration range selection (bits 4:3).
    pub range: Range,
    // Data ready interrupt enable (bit 5).
    pub drdy_enable: bool,
    // High resolution (16-bit) mode (bit 6).
    pub high_resolution: bool,
    // Operating mode; clear for stand-by (bit 7, PC1).
    pub operating: bool,
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

/// Bitfield representation of `ODCNTL` (address `0x1B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OdControl {
    // Output data rate selection (bits 3:0).
    pub rate: OutputDataRate,
    #[skip]
    __: B2,
    // Low-power rate rollover (bit 6).
    pub low_power: bool,
    // IIR filter bypass (bit 7).
    pub iir_bypass: bool,
}

impl From<u8> for OdControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<OdControl> for u8 {
    fn from(value: OdControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INC1` (address `0x1C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inc1 {
    #[skip]
    __: B3,
    // Pulse instead of latch until INT_REL is read (bit 3, IEL1).
    pub pulse: bool,
    // Interrupt pin active level; clear for active low (bit 4, IEA1).
    pub active_high: bool,
    // Physical interrupt pin enable (bit 5, IEN1).
    pub enable: bool,
    #[skip]
    __: B2,
}

impl From<u8> for Inc1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Inc1> for u8 {
    fn from(value: Inc1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INC4` (address `0x1F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inc4 {
    #[skip]
    __: B4,
    // Route data ready to pin 1 (bit 4).
    pub data_ready: bool,
    // Route buffer watermark to pin 1 (bit 5).
    pub watermark: bool,
    // Route buffer full to pin 1 (bit 6).
    pub buffer_full: bool,
    #[skip]
    __: B1,
}

impl From<u8> for Inc4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Inc4> for u8 {
    fn from(value: Inc4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INS2` (address `0x13`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ins2 {
    #[skip]
    __: B4,
    // Data ready (bit 4, DRDY).
    pub data_ready: bool,
    // Buffer watermark exceeded (bit 5, WMI).
    pub watermark: bool,
    // Buffer full (bit 6, BFI).
    pub buffer_full: bool,
    #[skip]
    __: B1,
}

impl From<u8> for Ins2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ins2> for u8 {
    fn from(value: Ins2) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `BUF_CNTL2` (address `0x3B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufControl2 {
    // Buffer operating mode (bits 1:0).
    pub mode: BufferMode,
    #[skip]
    __: B3,
    // Buffer full interrupt enable (bit 5, BFIE).
    pub full_interrupt: bool,
    // 16-bit sample resolution (bit 6, BRES).
    pub resolution_16bit: bool,
    // Sample buffer enable (bit 7, BFE).
    pub enable: bool,
}

impl From<u8> for BufControl2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<BufControl2> for u8 {
    fn from(value: BufControl2) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Cntl1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CNTL1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for OdControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_ODCNTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x02);
}

impl Register for Inc1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_INC1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x10);
}

impl Register for Inc4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_INC4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Ins2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_INS2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for BufControl2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_BUF_CNTL2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cntl1_layout_matches_datasheet() {
        let cntl1 = Cntl1::new()
            .with_operating(true)
            .with_high_resolution(true)
            .with_drdy_enable(true)
            .with_range(Range::G8);

        assert_eq!(u8::from(cntl1), 0b1111_0000);
    }

    #[test]
    fn buf_cntl2_fifo_16bit_full_interrupt() {
        let cntl2 = BufControl2::new()
            .with_enable(true)
            .with_resolution_16bit(true)
            .with_full_interrupt(true)
            .with_mode(BufferMode::Fifo);

        assert_eq!(u8::from(cntl2), 0xE0);
    }

    #[test]
    fn ins2_flags_decode() {
        let ins2 = Ins2::from(0x60u8);
        assert!(ins2.buffer_full());
        assert!(ins2.watermark());
        assert!(!ins2.data_ready());
    }
}
