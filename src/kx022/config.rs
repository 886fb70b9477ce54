//! Configuration primitives for the KX022-1020 driver.

use super::fifo::WATERMARK_MAX_SAMPLES;
use super::params::{OutputDataRate, Range};

/// Pending configuration for the KX022-1020 accelerometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Acceleration range; also selects the decode scale.
    pub range: Range,
    /// Output data rate; also sets the power-transition settle time.
    pub rate: OutputDataRate,
    /// Sample buffer watermark in samples (at most
    /// [`WATERMARK_MAX_SAMPLES`]).
    pub buffer_watermark: u8,
    /// Route buffer-full to the interrupt pin.
    pub int_buffer_full: bool,
    /// Route the buffer watermark to the interrupt pin.
    pub int_watermark: bool,
    /// Route data-ready to the interrupt pin.
    pub int_data_ready: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks the numeric fields the type system cannot bound.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.buffer_watermark > WATERMARK_MAX_SAMPLES {
            return Err(ConfigError::WatermarkTooHigh);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the acceleration range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Overrides the output data rate.
    pub fn rate(mut self, rate: OutputDataRate) -> Self {
        self.config.rate = rate;
        self
    }

    /// Sets the sample buffer watermark in samples.
    pub fn buffer_watermark(mut self, samples: u8) -> Self {
        self.config.buffer_watermark = samples;
        self
    }

    /// Selects the events routed to the interrupt pin.
    pub fn interrupt_sources(
        mut self,
        buffer_full: bool,
        watermark: bool,
        data_ready: bool,
    ) -> Self {
        self.config.int_buffer_full = buffer_full;
        self.config.int_watermark = watermark;
        self.config.int_data_ready = data_ready;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: Range::G2,
            rate: OutputDataRate::Hz50,
            buffer_watermark: 32,
            int_buffer_full: true,
            int_watermark: true,
            int_data_ready: true,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The buffer watermark exceeds the 16-bit buffer capacity.
    WatermarkTooHigh,
}
