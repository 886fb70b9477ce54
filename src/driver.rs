//! Generic sleep/active driver core shared by the configurable devices.
//!
//! Every sensor in the family follows the same lifecycle: check the
//! identity register, stage configuration in memory, then commit the full
//! register set in one documented order on each Sleeping→Active transition.
//! [`Sensor`] owns that state machine; the per-device register sequences
//! live behind [`DeviceProfile`] so device modules express them as data
//! over the shared bus wrapper.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::bus::RegisterBus;
use crate::error::{Error, Field, Result};
use crate::interface::SensorInterface;

/// Power state of a configurable device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Measurement disabled; configuration registers may be programmed.
    Sleeping,
    /// Measurement running with the configuration committed at wake time.
    Active,
}

/// Per-device identity constants and register sequences.
///
/// `commit` and `park` must write their registers in the exact order the
/// datasheet requires; the core never reorders or diffs them.
pub trait DeviceProfile {
    /// Pending configuration committed on each wake.
    type Config: Clone;

    /// Address of the fixed identity register.
    const IDENTITY_REGISTER: u8;
    /// Expected identity value.
    const IDENTITY: u8;

    /// Validates the numeric configuration fields the type system cannot
    /// bound. Runs before any commit write; a failure leaves the device
    /// untouched.
    fn validate(config: &Self::Config) -> core::result::Result<(), Field> {
        let _ = config;
        Ok(())
    }

    /// One-time setup performed by [`Sensor::init`] after the identity
    /// check succeeds. Most devices need none.
    fn prepare<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Self::Config,
    ) -> Result<(), I::Error> {
        let _ = (bus, config);
        Ok(())
    }

    /// Ordered register sequence committing `config` and starting
    /// measurement.
    fn commit<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Self::Config,
    ) -> Result<(), I::Error>;

    /// Ordered register sequence parking the device in its sleep state.
    fn park<I: SensorInterface>(
        bus: &mut RegisterBus<I>,
        config: &Self::Config,
    ) -> Result<(), I::Error>;

    /// Settle time in microseconds required after a power transition
    /// before register access is valid again.
    fn settle_us(config: &Self::Config) -> u32 {
        let _ = config;
        0
    }
}

/// Driver core for one physical device: bus access, pending configuration,
/// and the sleep/active state machine.
///
/// Exactly one `Sensor` exists per physical device. Configuration setters
/// on the concrete device types mutate the pending configuration only;
/// hardware follows on the next [`wake`](Self::wake).
pub struct Sensor<IFACE, P: DeviceProfile> {
    bus: RegisterBus<IFACE>,
    config: P::Config,
    state: PowerState,
    _profile: PhantomData<P>,
}

impl<IFACE, P: DeviceProfile> Sensor<IFACE, P> {
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// The device is assumed to be in its reset (sleeping) state.
    pub fn new(interface: IFACE, config: P::Config) -> Self {
        Self {
            bus: RegisterBus::new(interface),
            config,
            state: PowerState::Sleeping,
            _profile: PhantomData,
        }
    }

    /// Consumes the driver and returns the owned interface and
    /// configuration.
    pub fn release(self) -> (IFACE, P::Config) {
        (self.bus.release(), self.config)
    }

    /// Returns the current power state as tracked by the driver.
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    /// Returns a shared reference to the pending configuration.
    pub fn config(&self) -> &P::Config {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut P::Config {
        &mut self.config
    }

    pub(crate) fn bus_mut(&mut self) -> &mut RegisterBus<IFACE> {
        &mut self.bus
    }
}

impl<IFACE, P> Sensor<IFACE, P>
where
    IFACE: SensorInterface,
    P: DeviceProfile,
{
    /// Verifies the identity register and performs one-time device setup.
    ///
    /// On a mismatch the driver fails with [`Error::IdentityMismatch`] and
    /// writes nothing; whatever answered on the bus is not the expected
    /// part and must not be configured.
    pub fn init(&mut self) -> Result<(), IFACE::Error> {
        let found = self.bus.read(P::IDENTITY_REGISTER)?;
        if found != P::IDENTITY {
            return Err(Error::IdentityMismatch {
                expected: P::IDENTITY,
                found,
            });
        }

        P::prepare(&mut self.bus, &self.config)
    }

    /// Commits the pending configuration and starts measurement.
    ///
    /// Always writes the full register sequence; calling `wake` again
    /// after configuration changes re-commits everything. Blocks for the
    /// device's settle time before returning.
    pub fn wake(&mut self, delay: &mut impl DelayNs) -> Result<(), IFACE::Error> {
        if let Err(field) = P::validate(&self.config) {
            return Err(Error::Range { field });
        }

        P::commit(&mut self.bus, &self.config)?;
        self.state = PowerState::Active;
        settle(delay, P::settle_us(&self.config));
        Ok(())
    }

    /// Stops measurement and parks the device in its sleep state.
    ///
    /// Blocks for the device's settle time before returning.
    pub fn sleep(&mut self, delay: &mut impl DelayNs) -> Result<(), IFACE::Error> {
        P::park(&mut self.bus, &self.config)?;
        self.state = PowerState::Sleeping;
        settle(delay, P::settle_us(&self.config));
        Ok(())
    }
}

fn settle(delay: &mut impl DelayNs, us: u32) {
    if us > 0 {
        delay.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Expectation, MockInterface};
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[derive(Clone)]
    struct TestConfig {
        level: u8,
    }

    struct TestProfile;

    impl DeviceProfile for TestProfile {
        type Config = TestConfig;

        const IDENTITY_REGISTER: u8 = 0x0F;
        const IDENTITY: u8 = 0x42;

        fn commit<I: SensorInterface>(
            bus: &mut RegisterBus<I>,
            config: &Self::Config,
        ) -> Result<(), I::Error> {
            bus.write(0x20, config.level)?;
            bus.write(0x21, 0x01)
        }

        fn park<I: SensorInterface>(
            bus: &mut RegisterBus<I>,
            _config: &Self::Config,
        ) -> Result<(), I::Error> {
            bus.write(0x21, 0x00)
        }
    }

    #[test]
    fn init_checks_identity() {
        let expectations = [Expectation::Read {
            register: 0x0F,
            response: 0x42,
        }];
        let mut sensor: Sensor<_, TestProfile> =
            Sensor::new(MockInterface::new(&expectations), TestConfig { level: 7 });

        sensor.init().unwrap();
    }

    #[test]
    fn init_rejects_wrong_identity_without_further_writes() {
        let expectations = [Expectation::Read {
            register: 0x0F,
            response: 0x99,
        }];
        let mut sensor: Sensor<_, TestProfile> =
            Sensor::new(MockInterface::new(&expectations), TestConfig { level: 7 });

        assert_eq!(
            sensor.init(),
            Err(Error::IdentityMismatch {
                expected: 0x42,
                found: 0x99
            })
        );
    }

    #[test]
    fn wake_commits_and_tracks_state() {
        let expectations = [
            Expectation::Write {
                register: 0x20,
                value: 7,
            },
            Expectation::Write {
                register: 0x21,
                value: 0x01,
            },
        ];
        let mut sensor: Sensor<_, TestProfile> =
            Sensor::new(MockInterface::new(&expectations), TestConfig { level: 7 });

        assert_eq!(sensor.power_state(), PowerState::Sleeping);
        sensor.wake(&mut NoopDelay::new()).unwrap();
        assert_eq!(sensor.power_state(), PowerState::Active);
    }

    #[test]
    fn sleep_parks_and_tracks_state() {
        let expectations = [
            Expectation::Write {
                register: 0x20,
                value: 7,
            },
            Expectation::Write {
                register: 0x21,
                value: 0x01,
            },
            Expectation::Write {
                register: 0x21,
                value: 0x00,
            },
        ];
        let mut sensor: Sensor<_, TestProfile> =
            Sensor::new(MockInterface::new(&expectations), TestConfig { level: 7 });

        sensor.wake(&mut NoopDelay::new()).unwrap();
        sensor.sleep(&mut NoopDelay::new()).unwrap();
        assert_eq!(sensor.power_state(), PowerState::Sleeping);
    }
}
