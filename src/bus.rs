//! Register access layer tagging every bus failure with the register it hit.

use crate::error::{Error, Result};
use crate::interface::SensorInterface;
use crate::registers::Register;

/// Wraps a [`SensorInterface`] and converts raw bus errors into
/// [`Error::Io`] values carrying the failing register address.
///
/// All driver code goes through this wrapper; nothing below it retries.
pub struct RegisterBus<IFACE> {
    iface: IFACE,
}

impl<IFACE> RegisterBus<IFACE> {
    /// Wraps the provided interface.
    pub const fn new(iface: IFACE) -> Self {
        Self { iface }
    }

    /// Consumes the wrapper and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.iface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.iface
    }
}

impl<IFACE> RegisterBus<IFACE>
where
    IFACE: SensorInterface,
{
    /// Reads a single register.
    pub fn read(&mut self, register: u8) -> Result<u8, IFACE::Error> {
        self.iface
            .read_register(register)
            .map_err(|source| Error::Io { register, source })
    }

    /// Reads consecutive registers starting at `register`, ascending.
    pub fn read_many(&mut self, register: u8, buf: &mut [u8]) -> Result<(), IFACE::Error> {
        self.iface
            .read_many(register, buf)
            .map_err(|source| Error::Io { register, source })
    }

    /// Writes a single register.
    pub fn write(&mut self, register: u8, value: u8) -> Result<(), IFACE::Error> {
        self.iface
            .write_register(register, value)
            .map_err(|source| Error::Io { register, source })
    }

    /// Writes consecutive registers starting at `register`, ascending.
    pub fn write_many(&mut self, register: u8, data: &[u8]) -> Result<(), IFACE::Error> {
        self.iface
            .write_many(register, data)
            .map_err(|source| Error::Io { register, source })
    }

    /// Writes a 16-bit value to a register pair, low byte first.
    pub fn write_word(&mut self, register: u8, value: u16) -> Result<(), IFACE::Error> {
        self.iface
            .write_word(register, value)
            .map_err(|source| Error::Io { register, source })
    }

    /// Reads a typed register value.
    pub fn load<R>(&mut self) -> Result<R, IFACE::Error>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        Ok(R::from(self.read(R::ADDRESS)?))
    }

    /// Writes a typed register value to its documented address.
    pub fn store<R>(&mut self, value: R) -> Result<(), IFACE::Error>
    where
        R: Register<Raw = u8> + Into<u8>,
    {
        self.write(R::ADDRESS, value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testutil::{BrokenInterface, BusFault};

    #[test]
    fn failures_carry_the_register_address() {
        let mut bus = RegisterBus::new(BrokenInterface);

        assert_eq!(
            bus.read(0x92),
            Err(Error::Io {
                register: 0x92,
                source: BusFault
            })
        );
        assert_eq!(
            bus.write(0x41, 0x00),
            Err(Error::Io {
                register: 0x41,
                source: BusFault
            })
        );
        assert_eq!(
            bus.write_word(0x5C, 0),
            Err(Error::Io {
                register: 0x5C,
                source: BusFault
            })
        );
        let mut buf = [0u8; 2];
        assert_eq!(
            bus.read_many(0x44, &mut buf),
            Err(Error::Io {
                register: 0x44,
                source: BusFault
            })
        );
    }
}
