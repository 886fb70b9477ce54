//! Configuration primitives for the BM1383GLV driver.

use super::params::{AverageFilter, MeasurementMode};

/// Pending configuration for the BM1383GLV barometer.
///
/// Watermarks are stored pre-scaled (1/32 hPa counts) exactly as they will
/// be committed; the driver's `set_watermark` validates and scales the
/// physical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Measurement mode / continuous rate.
    pub mode: MeasurementMode,
    /// Pressure averaging.
    pub average: AverageFilter,
    /// Average the temperature channel as well.
    pub temperature_average: bool,
    /// High watermark in raw counts (1/32 hPa).
    pub watermark_high: u16,
    /// Low watermark in raw counts (1/32 hPa).
    pub watermark_low: u16,
    /// High watermark interrupt enable.
    pub interrupt_high: bool,
    /// Low watermark interrupt enable.
    pub interrupt_low: bool,
    /// External pull-up present on the interrupt line; when `false` the
    /// internal pull-up is switched in at commit time.
    pub pull_up: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: MeasurementMode::Rate10Hz,
            average: AverageFilter::Off,
            temperature_average: false,
            watermark_high: 0,
            watermark_low: 0,
            interrupt_high: true,
            interrupt_low: false,
            pull_up: false,
        }
    }
}
