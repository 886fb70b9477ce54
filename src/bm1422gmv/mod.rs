//! Driver for the BM1422GMV 3-axis magnetometer.

pub mod config;
pub mod params;
pub mod registers;

use crate::bus::RegisterBus;
use crate::codec;
use crate::driver::{DeviceProfile, Sensor};
use crate::error::Result;
use crate::interface::SensorInterface;

use config::Config;
use params::{AverageFilter, MeasurementRate, OperatingMode, Precision};
use registers::{
    AverageControl, Cntl1, Cntl2, Sta1, CNTL3_FORCE, EXPECTED_WHO_AM_I, REG_CNTL3, REG_CNTL4,
    REG_DATAX_L, REG_OFFX_L, REG_OFFY_L, REG_OFFZ_L, REG_WHO_AM_I,
};

/// Default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x0E;

/// Register sequences and identity constants for the BM1422GMV.
pub struct Profile;

impl DeviceProfile for Profile {
    type Config = Config;

    const IDENTITY_REGISTER: u8 = REG_WHO_AM_I;
    const IDENTITY: u8 = EXPECTED_WHO_AM_I;

    fn commit<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Config,
    ) -> Result<(), I::Error> {
        bus.store(
            Cntl1::new()
                .with_power_on(true)
                .with_single_shot(matches!(config.mode, OperatingMode::SingleShot))
                .with_precision(config.precision)
                .with_rate(config.rate),
        )?;
        bus.write_word(REG_CNTL4, 0)?;
        bus.store(AverageControl::new().with_filter(config.average))?;
        // DRDY on the interrupt pin, active low.
        bus.store(Cntl2::new().with_drdy_enable(true))?;

        if let Some([x, y, z]) = config.offsets {
            bus.write_word(REG_OFFX_L, x as u16)?;
            bus.write_word(REG_OFFY_L, y as u16)?;
            bus.write_word(REG_OFFZ_L, z as u16)?;
        }

        bus.write(REG_CNTL3, CNTL3_FORCE)
    }

    fn park<I: SensorInterface>(bus: &mut RegisterBus<I>, _config: &Config) -> Result<(), I::Error> {
        // Power stays on; the logic block is held in reset instead.
        bus.store(Cntl1::new().with_power_on(true).with_rst_lv(true))
    }
}

/// High-level synchronous driver for the BM1422GMV.
pub type Bm1422gmv<IFACE> = Sensor<IFACE, Profile>;

impl<IFACE, CommE> Sensor<IFACE, Profile>
where
    IFACE: SensorInterface<Error = CommE>,
{
    /// Selects conversion scheduling, output precision, and data rate.
    pub fn set_mode(&mut self, mode: OperatingMode, precision: Precision, rate: MeasurementRate) {
        let config = self.config_mut();
        config.mode = mode;
        config.precision = precision;
        config.rate = rate;
    }

    /// Sets the sample averaging filter.
    pub fn set_average_filter(&mut self, average: AverageFilter) {
        self.config_mut().average = average;
    }

    /// Stages per-axis offset adjustments, or clears them with `None`.
    pub fn set_offset_adjust(&mut self, offsets: Option<[i16; 3]>) {
        self.config_mut().offsets = offsets;
    }

    /// Returns whether a fresh sample is waiting in the data registers.
    ///
    /// The flag also drives the DRDY interrupt pin; it clears when the
    /// data registers are read.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        let sta1: Sta1 = self.bus_mut().load()?;
        Ok(sta1.data_ready())
    }

    /// Reads the latest field sample in microtesla.
    pub fn magnetic_field(&mut self) -> Result<[f32; 3], CommE> {
        let mut raw = [0u8; 6];
        self.bus_mut().read_many(REG_DATAX_L, &mut raw)?;

        let scale = self.config().precision.lsb_per_microtesla();
        let [x, y, z] = codec::vector_from_le(&raw);
        Ok([x as f32 / scale, y as f32 / scale, z as f32 / scale])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testutil::{Expectation, MockInterface};
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn init_rejects_unexpected_identity() {
        let expectations = [Expectation::Read {
            register: 0x0F,
            response: 0x14,
        }];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(
            sensor.init(),
            Err(Error::IdentityMismatch {
                expected: 0x41,
                found: 0x14
            })
        );
    }

    #[test]
    fn default_wake_commits_continuous_14bit_10hz() {
        let expectations = [
            // PC1 | OUT_BIT
            Expectation::Write {
                register: 0x1B,
                value: 0xC0,
            },
            Expectation::WriteWord {
                register: 0x5C,
                value: 0,
            },
            Expectation::Write {
                register: 0x40,
                value: 0x00,
            },
            Expectation::Write {
                register: 0x1C,
                value: 0x08,
            },
            Expectation::Write {
                register: 0x1D,
                value: 0x40,
            },
        ];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());

        sensor.wake(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn wake_commits_offsets_and_single_shot_mode() {
        let expectations = [
            // PC1 | FS1 | ODR=11 (1 kHz), 12-bit output
            Expectation::Write {
                register: 0x1B,
                value: 0x9A,
            },
            Expectation::WriteWord {
                register: 0x5C,
                value: 0,
            },
            // X16 average
            Expectation::Write {
                register: 0x40,
                value: 0x10,
            },
            Expectation::Write {
                register: 0x1C,
                value: 0x08,
            },
            Expectation::WriteWord {
                register: 0x6C,
                value: 1,
            },
            Expectation::WriteWord {
                register: 0x72,
                value: 0xFFFE,
            },
            Expectation::WriteWord {
                register: 0x78,
                value: 3,
            },
            Expectation::Write {
                register: 0x1D,
                value: 0x40,
            },
        ];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());

        sensor.set_mode(
            OperatingMode::SingleShot,
            Precision::Bit12,
            MeasurementRate::Hz1000,
        );
        sensor.set_average_filter(AverageFilter::X16);
        sensor.set_offset_adjust(Some([1, -2, 3]));

        sensor.wake(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn sleep_holds_the_logic_block_in_reset() {
        let expectations = [Expectation::Write {
            register: 0x1B,
            value: 0xA0,
        }];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());

        sensor.sleep(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn data_ready_reads_sta1() {
        let expectations = [
            Expectation::Read {
                register: 0x18,
                response: 0x40,
            },
            Expectation::Read {
                register: 0x18,
                response: 0x00,
            },
        ];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());

        assert!(sensor.data_ready().unwrap());
        assert!(!sensor.data_ready().unwrap());
    }

    #[test]
    fn magnetic_field_scales_by_14bit_precision() {
        let expectations = [Expectation::ReadMany {
            register: 0x10,
            response: &[0x18, 0x00, 0xE8, 0xFF, 0x00, 0x00],
        }];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(sensor.magnetic_field().unwrap(), [1.0, -1.0, 0.0]);
    }

    #[test]
    fn magnetic_field_scales_by_12bit_precision() {
        let expectations = [Expectation::ReadMany {
            register: 0x10,
            response: &[0x06, 0x00, 0xFA, 0xFF, 0x0C, 0x00],
        }];
        let mut sensor = Bm1422gmv::new(MockInterface::new(&expectations), Config::default());
        sensor.set_mode(
            OperatingMode::Continuous,
            Precision::Bit12,
            MeasurementRate::Hz10,
        );

        assert_eq!(sensor.magnetic_field().unwrap(), [1.0, -1.0, 2.0]);
    }
}
