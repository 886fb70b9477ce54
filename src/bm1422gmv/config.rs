//! Configuration primitives for the BM1422GMV driver.

use super::params::{AverageFilter, MeasurementRate, OperatingMode, Precision};

/// Pending configuration for the BM1422GMV magnetometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Conversion scheduling.
    pub mode: OperatingMode,
    /// Output precision; also selects the µT scale factor.
    pub precision: Precision,
    /// Output data rate.
    pub rate: MeasurementRate,
    /// Sample averaging.
    pub average: AverageFilter,
    /// Per-axis offset adjustment written at commit time when present.
    pub offsets: Option<[i16; 3]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: OperatingMode::Continuous,
            precision: Precision::Bit14,
            rate: MeasurementRate::Hz10,
            average: AverageFilter::X4,
            offsets: None,
        }
    }
}
