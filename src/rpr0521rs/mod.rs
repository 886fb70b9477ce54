//! Driver for the RPR-0521RS proximity / ambient light sensor.

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
use params::{AlsGain, InterruptMode, LedCurrent, MeasurementRate, Persistence, PsGain, PsPulse};
use registers::{
    AlsControl, IntControl, ModeControl, PsControl, EXPECTED_ID, INT_RESET_COMMAND, REG_ALS_DATA0_L,
    REG_ALS_DATA1_L, REG_ALS_TH_H, REG_ALS_TH_L, REG_ALS_TL_H, REG_ALS_TL_L, REG_ID,
    REG_PS_DATA_L, REG_PS_OFFS_H, REG_PS_OFFS_L, REG_PS_TH_H, REG_PS_TH_L, REG_PS_TL_H,
    REG_PS_TL_L, REG_SWRST,
};

/// Default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Proximity watermarks are 12-bit values.
const PS_WATERMARK_MAX: u16 = 0x0FFF;
/// Proximity offset compensation is a 10-bit value.
const PS_OFFSET_MAX: u16 = 0x03FF;

/// Register sequences and identity constants for the RPR-0521RS.
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
                .with_ps_enable(config.interrupt_ps)
                .with_als_enable(config.interrupt_als)
                .with_mode(config.interrupt_mode),
        )?;

        bus.store(
            AlsControl::new()
                .with_led_current(config.led_current)
                .with_gain_ir(config.als_gain_ir)
                .with_gain_visible(config.als_gain_visible),
        )?;

        bus.store(
            PsControl::new()
                .with_persistence(config.persistence)
                .with_gain(config.ps_gain),
        )?;

        let (lo, hi) = watermark::split_word(config.als_watermark_high);
        bus.write(REG_ALS_TH_L, lo)?;
        bus.write(REG_ALS_TH_H, hi)?;
        let (lo, hi) = watermark::split_word(config.als_watermark_low);
        bus.write(REG_ALS_TL_L, lo)?;
        bus.write(REG_ALS_TL_H, hi)?;
        let (lo, hi) = watermark::split_word(config.ps_watermark_high);
        bus.write(REG_PS_TH_L, lo)?;
        bus.write(REG_PS_TH_H, hi)?;
        let (lo, hi) = watermark::split_word(config.ps_watermark_low);
        bus.write(REG_PS_TL_L, lo)?;
        bus.write(REG_PS_TL_H, hi)?;
        let (lo, hi) = watermark::split_word(config.ps_offset);
        bus.write(REG_PS_OFFS_L, lo)?;
        bus.write(REG_PS_OFFS_H, hi)?;

        bus.store(
            ModeControl::new()
                .with_rate(config.rate)
                .with_ps_double(config.ps_double)
                .with_ps_pulse(config.ps_pulse)
                .with_ps_enable(config.ps_enable)
                .with_als_enable(config.als_enable),
        )
    }

    fn park<I: SensorInterface>(bus: &mut RegisterBus<I>, _config: &Config) -> Result<(), I::Error> {
        bus.write(REG_SWRST, INT_RESET_COMMAND)?;
        bus.store(ModeControl::new())
    }
}

/// High-level synchronous driver for the RPR-0521RS.
pub type Rpr0521rs<IFACE> = Sensor<IFACE, Profile>;

/// Decoded trigger status of the `INTERRUPT` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// Proximity threshold crossed.
    pub proximity: bool,
    /// Ambient light threshold crossed.
    pub ambient_light: bool,
}

impl<IFACE, CommE> Sensor<IFACE, Profile>
where
    IFACE: SensorInterface<Error = CommE>,
{
    // ==================================================================
    // == Pending Configuration =========================================
    // ==================================================================
    /// Selects which measurement stages run and how they are timed.
    pub fn set_mode(
        &mut self,
        als: bool,
        ps: bool,
        pulse: PsPulse,
        double_measure: bool,
        led: LedCurrent,
        rate: MeasurementRate,
    ) {
        let config = self.config_mut();
        config.als_enable = als;
        config.ps_enable = ps;
        config.ps_pulse = pulse;
        config.ps_double = double_measure;
        config.led_current = led;
        config.rate = rate;
    }

    /// Sets the gain of both ambient light channels.
    pub fn set_ambient_light_gain(&mut self, visible: AlsGain, ir: AlsGain) {
        let config = self.config_mut();
        config.als_gain_visible = visible;
        config.als_gain_ir = ir;
    }

    /// Sets the proximity gain.
    pub fn set_proximity_gain(&mut self, gain: PsGain) {
        self.config_mut().ps_gain = gain;
    }

    /// Sets the ambient light watermark pair (raw counts, full 16 bits).
    pub fn set_ambient_light_watermark(&mut self, high: u16, low: u16) {
        let config = self.config_mut();
        config.als_watermark_high = high;
        config.als_watermark_low = low;
    }

    /// Sets the proximity watermark pair (raw counts, 12-bit).
    ///
    /// Both values are validated before either is staged.
    pub fn set_proximity_watermark(&mut self, high: u16, low: u16) -> Result<(), CommE> {
        let high = watermark::encode_counts(high, PS_WATERMARK_MAX)
            .map_err(|_| Error::range(Field::ProximityWatermarkHigh))?;
        let low = watermark::encode_counts(low, PS_WATERMARK_MAX)
            .map_err(|_| Error::range(Field::ProximityWatermarkLow))?;

        let config = self.config_mut();
        config.ps_watermark_high = high;
        config.ps_watermark_low = low;
        Ok(())
    }

    /// Sets the proximity offset compensation (10-bit).
    pub fn set_proximity_offset(&mut self, offset: u16) -> Result<(), CommE> {
        let offset = watermark::encode_counts(offset, PS_OFFSET_MAX)
            .map_err(|_| Error::range(Field::ProximityOffset))?;

        self.config_mut().ps_offset = offset;
        Ok(())
    }

    /// Selects the interrupt sources, trigger mode, and persistence.
    pub fn set_interrupt_mode(
        &mut self,
        ps: bool,
        als: bool,
        mode: InterruptMode,
        persistence: Persistence,
    ) {
        let config = self.config_mut();
        config.interrupt_ps = ps;
        config.interrupt_als = als;
        config.interrupt_mode = mode;
        config.persistence = persistence;
    }

    // ==================================================================
    // == Interrupt Servicing ===========================================
    // ==================================================================
    /// Reads the latched trigger status from the `INTERRUPT` register.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, CommE> {
        let int: IntControl = self.bus_mut().load()?;
        Ok(InterruptStatus {
            proximity: int.ps_status(),
            ambient_light: int.als_status(),
        })
    }

    /// Clears the latched interrupt so the line can trigger again.
    ///
    /// Uses the dedicated interrupt soft-reset; pending measurement data is
    /// untouched.
    pub fn clear_interrupt(&mut self) -> Result<(), CommE> {
        self.bus_mut().write(REG_SWRST, INT_RESET_COMMAND)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the latest proximity sample (raw counts).
    pub fn proximity(&mut self) -> Result<u16, CommE> {
        let mut raw = [0u8; 2];
        self.bus_mut().read_many(REG_PS_DATA_L, &mut raw)?;
        Ok(codec::u16_from_le(raw[0], raw[1]))
    }

    /// Reads the latest visible + infrared ambient light sample.
    ///
    /// In the 20 Hz/20 Hz rate mode a set bit 15 marks saturation and the
    /// sample is clamped to the maximum positive value.
    pub fn ambient_light(&mut self) -> Result<u16, CommE> {
        let mut raw = [0u8; 2];
        self.bus_mut().read_many(REG_ALS_DATA0_L, &mut raw)?;
        Ok(self.adjust_als(codec::u16_from_le(raw[0], raw[1])))
    }

    /// Reads the latest infrared-only ambient light sample.
    ///
    /// Saturation handling matches [`ambient_light`](Self::ambient_light).
    pub fn ambient_light_ir(&mut self) -> Result<u16, CommE> {
        let mut raw = [0u8; 2];
        self.bus_mut().read_many(REG_ALS_DATA1_L, &mut raw)?;
        Ok(self.adjust_als(codec::u16_from_le(raw[0], raw[1])))
    }

    fn adjust_als(&self, raw: u16) -> u16 {
        if self.config().rate == MeasurementRate::Als20HzPs20Hz {
            codec::clamp_saturated(raw)
        } else {
            raw
        }
    }
}
