//! Driver for the KX022-1020 3-axis accelerometer.
//!
//! The KX022 has wake-up, tap, and orientation engines beyond plain
//! acceleration sensing; this driver covers the basic accelerometer path
//! with the buffered (FIFO) read-out.

pub mod config;
pub mod fifo;
pub mod params;
pub mod registers;

use crate::bus::RegisterBus;
use crate::driver::{DeviceProfile, Sensor};
use crate::error::{Contract, Error, Field, Result};
use crate::interface::SensorInterface;

use config::Config;
use fifo::Sample;
use params::{BufferMode, OutputDataRate, Range};
use registers::{
    BufControl2, Cntl1, Inc1, Inc4, Ins2, OdControl, EXPECTED_WHO_AM_I, REG_BUF_CLEAR,
    REG_BUF_CNTL1, REG_INT_REL, REG_STATUS, REG_WHO_AM_I, REG_XOUT_L,
};

/// Default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x1E;

/// Register sequences and identity constants for the KX022-1020.
pub struct Profile;

impl DeviceProfile for Profile {
    type Config = Config;

    const IDENTITY_REGISTER: u8 = REG_WHO_AM_I;
    const IDENTITY: u8 = EXPECTED_WHO_AM_I;

    fn validate(config: &Config) -> core::result::Result<(), Field> {
        config.validate().map_err(|_| Field::BufferWatermark)
    }

    fn commit<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Config,
    ) -> Result<(), I::Error> {
        // Everything below requires stand-by; PC1 is raised only at the end.
        let cntl1 = Cntl1::new()
            .with_high_resolution(true)
            .with_drdy_enable(true)
            .with_range(config.range);
        bus.store(cntl1)?;

        bus.store(OdControl::new().with_rate(config.rate))?;
        // Physical pin enabled, active low, latched until INT_REL is read.
        bus.store(Inc1::new().with_enable(true))?;
        bus.store(
            Inc4::new()
                .with_buffer_full(config.int_buffer_full)
                .with_watermark(config.int_watermark)
                .with_data_ready(config.int_data_ready),
        )?;

        bus.write(REG_BUF_CNTL1, config.buffer_watermark)?;
        bus.store(
            BufControl2::new()
                .with_enable(true)
                .with_resolution_16bit(true)
                .with_full_interrupt(true)
                .with_mode(BufferMode::Fifo),
        )?;
        bus.write(REG_BUF_CLEAR, 0)?;

        // Drop any latch left over from a previous run.
        bus.read(REG_INT_REL)?;

        bus.store(cntl1.with_operating(true))
    }

    fn park<I: SensorInterface>(bus: &mut RegisterBus<I>, _config: &Config) -> Result<(), I::Error> {
        let current: Cntl1 = bus.load()?;
        bus.store(current.with_operating(false))
    }

    fn settle_us(config: &Config) -> u32 {
        // Hardware settling contract: 1.2/ODR after every PC1 toggle.
        let us = 1_200_000.0 / config.rate.hz();
        let floor = us as u32;
        if (floor as f32) < us { floor + 1 } else { floor }
    }
}

/// High-level synchronous driver for the KX022-1020.
pub type Kx022<IFACE> = Sensor<IFACE, Profile>;

/// Decoded interrupt state from `STATUS_REG` and `INS2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// The interrupt line is asserted.
    pub asserted: bool,
    /// The sample buffer is full.
    pub buffer_full: bool,
    /// The buffer crossed its watermark.
    pub watermark: bool,
    /// A new sample is ready.
    pub data_ready: bool,
}

impl<IFACE, CommE> Sensor<IFACE, Profile>
where
    IFACE: SensorInterface<Error = CommE>,
{
    // ==================================================================
    // == Pending Configuration =========================================
    // ==================================================================
    /// Sets the acceleration range.
    ///
    /// Range changes are only legal while the device sleeps; the scale of
    /// samples still queued in the buffer would otherwise be ambiguous.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        self.require_sleeping()?;
        self.config_mut().range = range;
        Ok(())
    }

    /// Sets the output data rate.
    ///
    /// Only legal while the device sleeps.
    pub fn set_rate(&mut self, rate: OutputDataRate) -> Result<(), CommE> {
        self.require_sleeping()?;
        self.config_mut().rate = rate;
        Ok(())
    }

    /// Sets the sample buffer watermark in samples.
    pub fn set_buffer_watermark(&mut self, samples: u8) -> Result<(), CommE> {
        if samples > fifo::WATERMARK_MAX_SAMPLES {
            return Err(Error::range(Field::BufferWatermark));
        }

        self.config_mut().buffer_watermark = samples;
        Ok(())
    }

    /// Selects which events are routed to the interrupt pin.
    pub fn set_interrupt_sources(&mut self, buffer_full: bool, watermark: bool, data_ready: bool) {
        let config = self.config_mut();
        config.int_buffer_full = buffer_full;
        config.int_watermark = watermark;
        config.int_data_ready = data_ready;
    }

    fn require_sleeping(&self) -> Result<(), CommE> {
        match self.power_state() {
            crate::driver::PowerState::Sleeping => Ok(()),
            crate::driver::PowerState::Active => {
                Err(Error::Contract(Contract::ConfigureWhileActive))
            }
        }
    }

    // ==================================================================
    // == Interrupt Servicing ===========================================
    // ==================================================================
    /// Reads the interrupt pin state and the decoded source flags.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, CommE> {
        let status = self.bus_mut().read(REG_STATUS)?;
        let ins2: Ins2 = self.bus_mut().load()?;

        Ok(InterruptStatus {
            asserted: status != 0,
            buffer_full: ins2.buffer_full(),
            watermark: ins2.watermark(),
            data_ready: ins2.data_ready(),
        })
    }

    /// Releases the latched interrupt by reading `INT_REL`.
    pub fn clear_interrupt(&mut self) -> Result<(), CommE> {
        self.bus_mut().read(REG_INT_REL)?;
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition & FIFO =======================================
    // ==================================================================
    /// Reads the current output registers as one decoded sample in g.
    pub fn acceleration(&mut self) -> Result<Sample, CommE> {
        let mut raw = [0u8; fifo::SAMPLE_BYTES];
        self.bus_mut().read_many(REG_XOUT_L, &mut raw)?;
        Ok(fifo::decode_sample(&raw, self.config().range.lsb_per_g()))
    }

    /// Returns the number of complete samples currently buffered.
    pub fn fifo_count(&mut self) -> Result<usize, CommE> {
        fifo::count(self.bus_mut())
    }

    /// Drains `out.len()` samples from the buffer, oldest first.
    ///
    /// See [`fifo::drain`] for the over-drain contract.
    pub fn read_fifo(&mut self, out: &mut [Sample]) -> Result<(), CommE> {
        let scale = self.config().range.lsb_per_g();
        fifo::drain(self.bus_mut(), scale, out)
    }
}
