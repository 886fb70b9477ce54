//! Driver for the BM1383GLV barometric pressure sensor.

pub mod config;
pub mod params;
pub mod registers;

use crate::bus::RegisterBus;
use crate::codec;
use crate::driver::{DeviceProfile, Sensor};
use crate::error::{Error, Field, Result};
use crate::interface::SensorInterface;
use crate::watermark;

use config::Config;
use params::{AverageFilter, MeasurementMode};
use registers::{
    IntControl, ModeControl, EXPECTED_ID, INT_RESET_COMMAND, PWR_ON, REG_ID, REG_PDTH_H_H,
    REG_PDTH_H_L, REG_PDTH_L_H, REG_PDTH_L_L, REG_PRESS_H, REG_PWR, REG_RST, REG_SWRST,
    RST_HOLD, RST_RELEASE,
};

/// Default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x5D;

/// Watermark registers count in 1/32 hPa steps.
pub const WATERMARK_COUNTS_PER_HPA: f32 = 32.0;

/// Register sequences and identity constants for the BM1383GLV.
pub struct Profile;

impl DeviceProfile for Profile {
    type Config = Config;

    const IDENTITY_REGISTER: u8 = REG_ID;
    const IDENTITY: u8 = EXPECTED_ID;

    fn prepare<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        _config: &Config,
    ) -> Result<(), I::Error> {
        bus.write(REG_PWR, PWR_ON)
    }

    fn commit<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Config,
    ) -> Result<(), I::Error> {
        bus.write(REG_RST, RST_RELEASE)?;

        // Watermark registers take the high byte first.
        if config.interrupt_high {
            let (lo, hi) = watermark::split_word(config.watermark_high);
            bus.write(REG_PDTH_H_H, hi)?;
            bus.write(REG_PDTH_H_L, lo)?;
        }
        if config.interrupt_low {
            let (lo, hi) = watermark::split_word(config.watermark_low);
            bus.write(REG_PDTH_L_H, hi)?;
            bus.write(REG_PDTH_L_L, lo)?;
        }

        bus.store(
            IntControl::new()
                .with_enable(config.interrupt_high || config.interrupt_low)
                .with_pu_en(!config.pull_up)
                .with_low_enable(config.interrupt_low)
                .with_high_enable(config.interrupt_high),
        )?;

        bus.store(
            ModeControl::new()
                .with_mode(config.mode)
                .with_temperature_average(config.temperature_average)
                .with_average(config.average),
        )
    }

    fn park<I: SensorInterface>(bus: &mut RegisterBus<I>, _config: &Config) -> Result<(), I::Error> {
        bus.write(REG_SWRST, INT_RESET_COMMAND)?;
        bus.store(ModeControl::new())?;
        bus.write(REG_RST, RST_HOLD)
    }
}

/// High-level synchronous driver for the BM1383GLV.
pub type Bm1383glv<IFACE> = Sensor<IFACE, Profile>;

/// Decoded watermark trigger status of the `INTERRUPT` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// Pressure crossed the high watermark.
    pub high: bool,
    /// Pressure crossed the low watermark.
    pub low: bool,
}

impl<IFACE, CommE> Sensor<IFACE, Profile>
where
    IFACE: SensorInterface<Error = CommE>,
{
    /// Sets the measurement mode / continuous rate.
    pub fn set_mode(&mut self, mode: MeasurementMode) {
        self.config_mut().mode = mode;
    }

    /// Sets the pressure averaging filter.
    pub fn set_average_filter(&mut self, average: AverageFilter, temperature_average: bool) {
        let config = self.config_mut();
        config.average = average;
        config.temperature_average = temperature_average;
    }

    /// Sets the watermark pair in hectopascals.
    ///
    /// Values are scaled by 32 counts/hPa and rounded; both must fit the
    /// 16-bit threshold registers. Both are validated before either is
    /// staged.
    ///
    /// A high watermark of 0 makes the high interrupt report the end of
    /// each measurement.
    pub fn set_watermark(&mut self, high: f32, low: f32) -> Result<(), CommE> {
        let high = watermark::encode_scaled(high, WATERMARK_COUNTS_PER_HPA)
            .map_err(|_| Error::range(Field::PressureWatermarkHigh))?;
        let low = watermark::encode_scaled(low, WATERMARK_COUNTS_PER_HPA)
            .map_err(|_| Error::range(Field::PressureWatermarkLow))?;

        let config = self.config_mut();
        config.watermark_high = high;
        config.watermark_low = low;
        Ok(())
    }

    /// Returns the staged watermark pair decoded back to hectopascals.
    pub fn watermark_hpa(&self) -> (f32, f32) {
        let config = self.config();
        (
            watermark::decode_scaled(config.watermark_high, WATERMARK_COUNTS_PER_HPA),
            watermark::decode_scaled(config.watermark_low, WATERMARK_COUNTS_PER_HPA),
        )
    }

    /// Selects which watermark crossings assert the interrupt line and
    /// whether the internal pull-up is needed.
    pub fn set_interrupt_mode(&mut self, high: bool, low: bool, pull_up: bool) {
        let config = self.config_mut();
        config.interrupt_high = high;
        config.interrupt_low = low;
        config.pull_up = pull_up;
    }

    /// Reads the latched watermark trigger status.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, CommE> {
        let int: IntControl = self.bus_mut().load()?;
        Ok(InterruptStatus {
            high: int.high_status(),
            low: int.low_status(),
        })
    }

    /// Clears the latched interrupt so the line can trigger again.
    pub fn clear_interrupt(&mut self) -> Result<(), CommE> {
        self.bus_mut().write(REG_SWRST, INT_RESET_COMMAND)
    }

    /// Reads the latest pressure sample in hectopascals.
    pub fn pressure(&mut self) -> Result<f32, CommE> {
        let mut raw = [0u8; 3];
        self.bus_mut().read_many(REG_PRESS_H, &mut raw)?;
        Ok(codec::pressure_hpa(codec::pressure_raw(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Expectation, MockInterface};
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn init_checks_identity_then_powers_up() {
        let expectations = [
            Expectation::Read {
                register: 0x10,
                response: 0x31,
            },
            Expectation::Write {
                register: 0x12,
                value: 0x01,
            },
        ];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        sensor.init().unwrap();
    }

    #[test]
    fn init_rejects_unexpected_identity_without_power_up() {
        let expectations = [Expectation::Read {
            register: 0x10,
            response: 0x32,
        }];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(
            sensor.init(),
            Err(Error::IdentityMismatch {
                expected: 0x31,
                found: 0x32
            })
        );
    }

    #[test]
    fn default_wake_commits_high_watermark_only() {
        let expectations = [
            Expectation::Write {
                register: 0x13,
                value: 0x01,
            },
            // high watermark, high byte first
            Expectation::Write {
                register: 0x15,
                value: 0x00,
            },
            Expectation::Write {
                register: 0x16,
                value: 0x00,
            },
            // H_EN | PU_EN | EN
            Expectation::Write {
                register: 0x19,
                value: 0x29,
            },
            Expectation::Write {
                register: 0x14,
                value: 0x03,
            },
        ];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        sensor.wake(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn wake_commits_both_watermarks_when_enabled() {
        let expectations = [
            Expectation::Write {
                register: 0x13,
                value: 0x01,
            },
            // 1013.25 hPa * 32 = 32424 = 0x7EA8
            Expectation::Write {
                register: 0x15,
                value: 0x7E,
            },
            Expectation::Write {
                register: 0x16,
                value: 0xA8,
            },
            // 900 hPa * 32 = 28800 = 0x7080
            Expectation::Write {
                register: 0x17,
                value: 0x70,
            },
            Expectation::Write {
                register: 0x18,
                value: 0x80,
            },
            // H_EN | L_EN | EN, external pull-up present
            Expectation::Write {
                register: 0x19,
                value: 0x31,
            },
            // aver X16 << 5 | T_AVE | 20 Hz
            Expectation::Write {
                register: 0x14,
                value: 0x8A,
            },
        ];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        sensor.set_mode(MeasurementMode::Rate20Hz);
        sensor.set_average_filter(AverageFilter::X16, true);
        sensor.set_watermark(1013.25, 900.0).unwrap();
        sensor.set_interrupt_mode(true, true, true);

        sensor.wake(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn sleep_parks_measurement_and_holds_reset() {
        let expectations = [
            Expectation::Write {
                register: 0x11,
                value: 0x40,
            },
            Expectation::Write {
                register: 0x14,
                value: 0x00,
            },
            Expectation::Write {
                register: 0x13,
                value: 0x00,
            },
        ];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        sensor.sleep(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn watermark_round_trips_through_the_staged_encoding() {
        let mut sensor = Bm1383glv::new(MockInterface::new(&[]), Config::default());

        sensor.set_watermark(1013.25, 900.0).unwrap();
        let (high, low) = sensor.watermark_hpa();
        assert_eq!(high, 1013.25);
        assert_eq!(low, 900.0);
    }

    #[test]
    fn watermark_rejects_values_outside_the_register_range() {
        let mut sensor = Bm1383glv::new(MockInterface::new(&[]), Config::default());

        assert_eq!(
            sensor.set_watermark(2048.0, 0.0),
            Err(Error::Range {
                field: Field::PressureWatermarkHigh
            })
        );
        assert_eq!(
            sensor.set_watermark(1000.0, -1.0),
            Err(Error::Range {
                field: Field::PressureWatermarkLow
            })
        );
        assert_eq!(sensor.config().watermark_high, 0);
        assert_eq!(sensor.config().watermark_low, 0);
    }

    #[test]
    fn interrupt_status_decodes_both_watermark_bits() {
        let expectations = [Expectation::Read {
            register: 0x19,
            response: 0x80,
        }];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(
            sensor.interrupt_status().unwrap(),
            InterruptStatus {
                high: true,
                low: false,
            }
        );
    }

    #[test]
    fn pressure_decodes_the_22_bit_sample() {
        // raw = 1013 hPa * 2048 counts = 2074624 = 0b0111_1110_1010_0000_0000_0000
        let raw = 1013u32 * 2048;
        let bytes = [
            (raw >> 14) as u8,
            ((raw >> 6) & 0xFF) as u8,
            ((raw & 0x3F) << 2) as u8,
        ];
        let expectations = [Expectation::ReadMany {
            register: 0x1C,
            response: &bytes,
        }];
        let mut sensor = Bm1383glv::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(sensor.pressure().unwrap(), 1013.0);
    }
}
