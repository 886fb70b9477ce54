//! Configuration primitives for the RPR-0521RS driver.

use super::params::{
    AlsGain, InterruptMode, LedCurrent, MeasurementRate, Persistence, PsGain, PsPulse,
};

/// Pending configuration for the RPR-0521RS sensor.
///
/// Committed to hardware as a whole on each wake; the driver's setter
/// methods are the validated mutation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Ambient light measurement enable.
    pub als_enable: bool,
    /// Proximity measurement enable.
    pub ps_enable: bool,
    /// PS LED pulse width.
    pub ps_pulse: PsPulse,
    /// Measure proximity twice per period.
    pub ps_double: bool,
    /// LED drive current.
    pub led_current: LedCurrent,
    /// Combined ALS/PS measurement rate.
    pub rate: MeasurementRate,
    /// Gain for the visible + infrared ALS channel.
    pub als_gain_visible: AlsGain,
    /// Gain for the infrared-only ALS channel.
    pub als_gain_ir: AlsGain,
    /// Proximity gain.
    pub ps_gain: PsGain,
    /// Ambient light high watermark (raw counts).
    pub als_watermark_high: u16,
    /// Ambient light low watermark (raw counts).
    pub als_watermark_low: u16,
    /// Proximity high watermark (raw counts, 12-bit).
    pub ps_watermark_high: u16,
    /// Proximity low watermark (raw counts, 12-bit).
    pub ps_watermark_low: u16,
    /// Proximity offset compensation (10-bit).
    pub ps_offset: u16,
    /// Proximity threshold interrupt enable.
    pub interrupt_ps: bool,
    /// Ambient threshold interrupt enable.
    pub interrupt_als: bool,
    /// Interrupt trigger mode.
    pub interrupt_mode: InterruptMode,
    /// Interrupt persistence.
    pub persistence: Persistence,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            als_enable: false,
            ps_enable: false,
            ps_pulse: PsPulse::Us200,
            ps_double: false,
            led_current: LedCurrent::Ma25,
            rate: MeasurementRate::BothOff,
            als_gain_visible: AlsGain::X1,
            als_gain_ir: AlsGain::X1,
            ps_gain: PsGain::X1,
            als_watermark_high: 0,
            als_watermark_low: 0,
            ps_watermark_high: 0,
            ps_watermark_low: 0,
            ps_offset: 0,
            interrupt_ps: false,
            interrupt_als: false,
            interrupt_mode: InterruptMode::High,
            persistence: Persistence::EndOfMeasurement,
        }
    }
}
