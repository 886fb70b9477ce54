//! Strongly typed parameter enumerations for the RPR-0521RS driver.
//!
//! Each enum maps directly to a datasheet field encoding; using them keeps
//! every configurable value inside its documented domain by construction.

use modular_bitfield::prelude::Specifier;

/// Ambient light sensor gain selections, shared by both ALS channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AlsGain {
    /// Gain ×1.
    X1 = 0b00,
    /// Gain ×2.
    X2 = 0b01,
    /// Gain ×64.
    X64 = 0b10,
    /// Gain ×128.
    X128 = 0b11,
}

/// Proximity sensor gain selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum PsGain {
    /// Gain ×1.
    X1 = 0b00,
    /// Gain ×2.
    X2 = 0b01,
    /// Gain ×4.
    X4 = 0b10,
}

/// LED drive current selections for proximity measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum LedCurrent {
    /// 25 mA drive current.
    Ma25 = 0b00,
    /// 50 mA drive current.
    Ma50 = 0b01,
    /// 100 mA drive current.
    Ma100 = 0b10,
    /// 200 mA drive current.
    Ma200 = 0b11,
}

/// Ambient infrared level as classified by the device (read-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AmbientIr {
    /// Weak infrared environment.
    Weak = 0b00,
    /// Strong infrared environment.
    Strong = 0b01,
    /// Very strong infrared environment.
    VeryStrong = 0b11,
}

/// PS LED pulse width selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum PsPulse {
    /// 200 µs LED pulse.
    Us200 = 0,
    /// 330 µs LED pulse.
    Us330 = 1,
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
    /// Assert after two consecutive violations.
    UpdateTwice = 0b10,
    /// Assert only while the violation persists.
    UpdatePersist = 0b11,
}

/// Interrupt trigger mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum InterruptMode {
    /// Trigger when the value exceeds the high watermark.
    High = 0b00,
    /// Hysteresis between the low and high watermarks.
    Hysteresis = 0b01,
    /// Trigger outside the low/high watermark window.
    OutOfRange = 0b10,
}

/// Combined ALS/PS measurement rate selections (`MODE_CONTROL` bits 3:0).
///
/// Variant names read as `Als<rate>Ps<rate>`; a missing stage is off. The
/// 20 Hz/20 Hz mode changes how the ALS data registers report saturation;
/// the data-read path clamps accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum MeasurementRate {
    /// Both stages off.
    BothOff = 0,
    /// ALS off, PS at 100 Hz.
    Ps100Hz = 1,
    /// ALS off, PS at 25 Hz.
    Ps25Hz = 2,
    /// ALS off, PS at 10 Hz.
    Ps10Hz = 3,
    /// ALS off, PS at 2.5 Hz.
    Ps2_5Hz = 4,
    /// ALS at 10 Hz, PS at 20 Hz.
    Als10HzPs20Hz = 5,
    /// ALS at 10 Hz, PS at 10 Hz.
    Als10HzPs10Hz = 6,
    /// ALS at 10 Hz, PS at 2.5 Hz.
    Als10HzPs2_5Hz = 7,
    /// ALS at 2.5 Hz, PS at 20 Hz.
    Als2_5HzPs20Hz = 8,
    /// ALS at 2.5 Hz, PS at 10 Hz.
    Als2_5HzPs10Hz = 9,
    /// ALS at 2.5 Hz, PS off.
    Als2_5HzPsOff = 10,
    /// ALS at 2.5 Hz, PS at 2.5 Hz.
    Als2_5HzPs2_5Hz = 11,
    /// ALS and PS both at 20 Hz (50 ms measurement window).
    Als20HzPs20Hz = 12,
}
