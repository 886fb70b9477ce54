//! Driver for the BU9873 real-time clock.
//!
//! The clock keeps seven BCD calendar fields plus a 12/24-hour mode flag.
//! Unlike the measurement devices in this family it has no identity
//! register, no power state machine, and no interrupt line; the whole time
//! record moves in a single 8-byte burst in either direction.

pub mod registers;

use crate::bus::RegisterBus;
use crate::codec;
use crate::error::{Error, Field, Result};
use crate::interface::SensorInterface;

use registers::{Ctrl2, HOURS_PM_BIT, HOURS_VALUE_MASK, REG_CTRL2};

/// Default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x32;

/// Hour counting mode, with the meridiem flag in 12-hour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourMode {
    /// Hours count 0–23.
    TwentyFourHour,
    /// Hours count 1–12 with a PM flag.
    TwelveHour {
        /// Set for PM.
        pm: bool,
    },
}

/// One complete clock record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    /// Seconds, 0–59.
    pub seconds: u8,
    /// Minutes, 0–59.
    pub minutes: u8,
    /// Hours; 1–12 in 12-hour mode, 0–23 otherwise.
    pub hours: u8,
    /// Day of the week, 1–7 where 1 is Sunday.
    pub day_of_week: u8,
    /// Day of the month, 1–31.
    pub day_of_month: u8,
    /// Month, 1–12.
    pub month: u8,
    /// Year, 0–99.
    pub year: u8,
    /// Hour counting mode.
    pub hour_mode: HourMode,
}

impl Time {
    /// Checks every field against its calendar domain.
    pub fn validate(&self) -> core::result::Result<(), Field> {
        if self.seconds > 59 {
            return Err(Field::Seconds);
        }
        if self.minutes > 59 {
            return Err(Field::Minutes);
        }
        match self.hour_mode {
            HourMode::TwentyFourHour if self.hours > 23 => return Err(Field::Hours),
            HourMode::TwelveHour { .. } if self.hours < 1 || self.hours > 12 => {
                return Err(Field::Hours);
            }
            _ => {}
        }
        if self.day_of_week < 1 || self.day_of_week > 7 {
            return Err(Field::DayOfWeek);
        }
        if self.day_of_month < 1 || self.day_of_month > 31 {
            return Err(Field::DayOfMonth);
        }
        if self.month < 1 || self.month > 12 {
            return Err(Field::Month);
        }
        if self.year > 99 {
            return Err(Field::Year);
        }

        Ok(())
    }
}

/// High-level synchronous driver for the BU9873.
pub struct Bu9873<IFACE> {
    bus: RegisterBus<IFACE>,
}

impl<IFACE> Bu9873<IFACE> {
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self {
            bus: RegisterBus::new(interface),
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.bus.release()
    }
}

impl<IFACE, CommE> Bu9873<IFACE>
where
    IFACE: SensorInterface<Error = CommE>,
{
    /// Reads the complete clock record.
    ///
    /// A single burst starting at `CONTROL2` wraps through the internal
    /// address space to cover seconds through year. A field that does not
    /// decode as BCD (possible after first power-up or an oscillator stop)
    /// is reported as a range error naming that field.
    pub fn read_time(&mut self) -> Result<Time, CommE> {
        let mut buf = [0u8; 8];
        self.bus.read_many(REG_CTRL2, &mut buf)?;

        let ctrl2 = Ctrl2::from(buf[0]);
        let hour_mode;
        let hours;
        if ctrl2.twelve_hour() {
            hour_mode = HourMode::TwelveHour {
                pm: buf[3] & HOURS_PM_BIT != 0,
            };
            hours = decode_field(buf[3] & HOURS_VALUE_MASK, Field::Hours)?;
        } else {
            hour_mode = HourMode::TwentyFourHour;
            hours = decode_field(buf[3] & 0x3F, Field::Hours)?;
        }

        Ok(Time {
            seconds: decode_field(buf[1] & 0x7F, Field::Seconds)?,
            minutes: decode_field(buf[2] & 0x7F, Field::Minutes)?,
            hours,
            day_of_week: decode_field(buf[4] & 0x07, Field::DayOfWeek)?,
            day_of_month: decode_field(buf[5] & 0x3F, Field::DayOfMonth)?,
            month: decode_field(buf[6] & 0x1F, Field::Month)?,
            year: decode_field(buf[7], Field::Year)?,
            hour_mode,
        })
    }

    /// Writes a complete clock record.
    ///
    /// Every field is validated before any byte moves; the record is then
    /// written in one burst mirroring [`read_time`](Self::read_time).
    pub fn write_time(&mut self, time: &Time) -> Result<(), CommE> {
        if let Err(field) = time.validate() {
            return Err(Error::Range { field });
        }

        let twelve_hour = matches!(time.hour_mode, HourMode::TwelveHour { .. });
        let mut hours = encode_field(time.hours, Field::Hours)?;
        if let HourMode::TwelveHour { pm: true } = time.hour_mode {
            hours |= HOURS_PM_BIT;
        }

        let buf = [
            u8::from(Ctrl2::new().with_twelve_hour(twelve_hour)),
            encode_field(time.seconds, Field::Seconds)?,
            encode_field(time.minutes, Field::Minutes)?,
            hours,
            encode_field(time.day_of_week, Field::DayOfWeek)?,
            encode_field(time.day_of_month, Field::DayOfMonth)?,
            encode_field(time.month, Field::Month)?,
            encode_field(time.year, Field::Year)?,
        ];

        self.bus.write_many(REG_CTRL2, &buf)
    }
}

fn decode_field<E>(raw: u8, field: Field) -> Result<u8, E> {
    codec::bcd_to_dec(raw).map_err(|_| Error::Range { field })
}

fn encode_field<E>(value: u8, field: Field) -> Result<u8, E> {
    codec::dec_to_bcd(value).map_err(|_| Error::Range { field })
}
