//! I2C interface implementation built on top of `embedded-hal` [`I2c`].

use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};

use super::SensorInterface;

/// I2C-based interface implementation shared by all drivers in the crate.
///
/// Wraps an `embedded-hal` bus handle together with the 7-bit device
/// address. Multi-byte writes are issued as a single bus transaction so the
/// register address and payload stay within one start/stop pair.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided bus handle and address.
    pub const fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address this interface talks to.
    pub const fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Provides mutable access to the wrapped bus handle.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> SensorInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(self.address, &[register], buf)
    }

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let mut operations = [Operation::Write(&[register]), Operation::Write(data)];
        self.i2c.transaction(self.address, &mut operations)
    }
}
