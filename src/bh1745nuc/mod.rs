//! Driver for the BH1745NUC RGBC color sensor.

pub mod config;
pub mod params;
pub mod registers;

use crate::bus::RegisterBus;
use crate::codec;
use crate::driver::{DeviceProfile, Sensor};
use crate::error::Result;
use crate::interface::SensorInterface;
use crate::watermark;

use config::Config;
use params::{Gain, InterruptSource, MeasurementRate, Persistence};
use registers::{
    IntControl, Mode1, Mode2, PersistenceControl, EXPECTED_ID, INT_RESET_COMMAND, REG_ID,
    REG_RED_L, REG_SWRST, REG_TH_H, REG_TH_L, REG_TL_H, REG_TL_L,
};

/// Default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x39;

/// Register sequences and identity constants for the BH1745NUC.
pub struct Profile;

impl DeviceProfile for Profile {
    type Config = Config;

    const IDENTITY_REGISTER: u8 = REG_ID;
    const IDENTITY: u8 = EXPECTED_ID;

    fn commit<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Config,
    ) -> Result<(), I::Error> {
        bus.store(
            IntControl::new()
                .with_enable(config.interrupt_enable)
                .with_source(config.interrupt_source),
        )?;
        bus.store(PersistenceControl::new().with_persistence(config.persistence))?;

        let (lo, hi) = watermark::split_word(config.watermark_high);
        bus.write(REG_TH_L, lo)?;
        bus.write(REG_TH_H, hi)?;
        let (lo, hi) = watermark::split_word(config.watermark_low);
        bus.write(REG_TL_L, lo)?;
        bus.write(REG_TL_H, hi)?;

        bus.store(Mode1::new().with_rate(config.rate))?;
        bus.store(Mode2::new().with_rgbc_enable(true).with_gain(config.gain))
    }

    fn park<I: SensorInterface>(bus: &mut RegisterBus<I>, _config: &Config) -> Result<(), I::Error> {
        bus.write(REG_SWRST, INT_RESET_COMMAND)?;
        bus.store(Mode2::new())
    }
}

/// High-level synchronous driver for the BH1745NUC.
pub type Bh1745nuc<IFACE> = Sensor<IFACE, Profile>;

/// One RGBC measurement, one raw 16-bit count per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorData {
    /// Red channel counts.
    pub red: u16,
    /// Green channel counts.
    pub green: u16,
    /// Blue channel counts.
    pub blue: u16,
    /// Clear (unfiltered) channel counts.
    pub clear: u16,
}

impl<IFACE, CommE> Sensor<IFACE, Profile>
where
    IFACE: SensorInterface<Error = CommE>,
{
    /// Sets the measurement period.
    pub fn set_mode(&mut self, rate: MeasurementRate) {
        self.config_mut().rate = rate;
    }

    /// Sets the RGBC gain.
    pub fn set_gain(&mut self, gain: Gain) {
        self.config_mut().gain = gain;
    }

    /// Sets the watermark pair (raw counts, full 16 bits).
    pub fn set_watermark(&mut self, high: u16, low: u16) {
        let config = self.config_mut();
        config.watermark_high = high;
        config.watermark_low = low;
    }

    /// Selects the interrupt source channel and persistence.
    pub fn set_interrupt_mode(
        &mut self,
        enable: bool,
        source: InterruptSource,
        persistence: Persistence,
    ) {
        let config = self.config_mut();
        config.interrupt_enable = enable;
        config.interrupt_source = source;
        config.persistence = persistence;
    }

    /// Reads the latched trigger status from the `INTERRUPT` register.
    pub fn interrupt_status(&mut self) -> Result<bool, CommE> {
        let int: IntControl = self.bus_mut().load()?;
        Ok(int.status())
    }

    /// Clears the latched interrupt so the line can trigger again.
    pub fn clear_interrupt(&mut self) -> Result<(), CommE> {
        self.bus_mut().write(REG_SWRST, INT_RESET_COMMAND)
    }

    /// Reads the latest RGBC measurement in one 8-byte burst.
    pub fn color(&mut self) -> Result<ColorData, CommE> {
        let mut raw = [0u8; 8];
        self.bus_mut().read_many(REG_RED_L, &mut raw)?;

        Ok(ColorData {
            red: codec::u16_from_le(raw[0], raw[1]),
            green: codec::u16_from_le(raw[2], raw[3]),
            blue: codec::u16_from_le(raw[4], raw[5]),
            clear: codec::u16_from_le(raw[6], raw[7]),
        })
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
            register: 0x92,
            response: 0x00,
        }];
        let mut sensor = Bh1745nuc::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(
            sensor.init(),
            Err(Error::IdentityMismatch {
                expected: 0xE0,
                found: 0x00
            })
        );
    }

    #[test]
    fn wake_commits_configured_registers_in_order() {
        let expectations = [
            Expectation::Write {
                register: 0x60,
                value: 0x09,
            },
            Expectation::Write {
                register: 0x61,
                value: 0x03,
            },
            Expectation::Write {
                register: 0x62,
                value: 0xAD,
            },
            Expectation::Write {
                register: 0x63,
                value: 0xDE,
            },
            Expectation::Write {
                register: 0x64,
                value: 0xEF,
            },
            Expectation::Write {
                register: 0x65,
                value: 0xBE,
            },
            Expectation::Write {
                register: 0x41,
                value: 0x02,
            },
            Expectation::Write {
                register: 0x42,
                value: 0x12,
            },
        ];
        let mut sensor = Bh1745nuc::new(MockInterface::new(&expectations), Config::default());

        sensor.set_mode(MeasurementRate::Ms640);
        sensor.set_gain(Gain::X16);
        sensor.set_watermark(0xDEAD, 0xBEEF);
        sensor.set_interrupt_mode(true, InterruptSource::Blue, Persistence::UpdateEightTimes);

        sensor.wake(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn sleep_resets_interrupt_then_disables_measurement() {
        let expectations = [
            Expectation::Write {
                register: 0x40,
                value: 0x40,
            },
            Expectation::Write {
                register: 0x42,
                value: 0x00,
            },
        ];
        let mut sensor = Bh1745nuc::new(MockInterface::new(&expectations), Config::default());

        sensor.sleep(&mut NoopDelay::new()).unwrap();
    }

    #[test]
    fn interrupt_status_reads_bit_7() {
        let expectations = [
            Expectation::Read {
                register: 0x60,
                response: 0x80,
            },
            Expectation::Read {
                register: 0x60,
                response: 0x09,
            },
        ];
        let mut sensor = Bh1745nuc::new(MockInterface::new(&expectations), Config::default());

        assert!(sensor.interrupt_status().unwrap());
        assert!(!sensor.interrupt_status().unwrap());
    }

    #[test]
    fn color_decodes_all_four_channels() {
        let expectations = [Expectation::ReadMany {
            register: 0x50,
            response: &[0x11, 0x00, 0x22, 0x00, 0x33, 0x00, 0xFF, 0xFF],
        }];
        let mut sensor = Bh1745nuc::new(MockInterface::new(&expectations), Config::default());

        assert_eq!(
            sensor.color().unwrap(),
            ColorData {
                red: 0x0011,
                green: 0x0022,
                blue: 0x0033,
                clear: 0xFFFF,
            }
        );
    }
}
