//! Configuration primitives for the BH1745NUC driver.

use super::params::{Gain, InterruptSource, MeasurementRate, Persistence};

/// Pending configuration for the BH1745NUC sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Measurement period.
    pub rate: MeasurementRate,
    /// RGBC gain.
    pub gain: Gain,
    /// High watermark (raw counts).
    pub watermark_high: u16,
    /// Low watermark (raw counts).
    pub watermark_low: u16,
    /// Threshold interrupt enable.
    pub interrupt_enable: bool,
    /// Channel driving the threshold comparison.
    pub interrupt_source: InterruptSource,
    /// Interrupt persistence.
    pub persistence: Persistence,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate: MeasurementRate::Ms160,
            gain: Gain::X1,
            watermark_high: 0,
            watermark_low: 0,
            interrupt_enable: false,
            interrupt_source: InterruptSource::Clear,
            persistence: Persistence::EndOfMeasurement,
        }
    }
}
