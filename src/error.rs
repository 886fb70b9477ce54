//! Error handling primitives shared by every driver in the crate.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the drivers.
///
/// The generic parameter is the error type of the underlying bus
/// implementation. Bus failures are fatal for the current operation and are
/// never retried; validation errors are reported before any register is
/// touched, leaving driver and device state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A bus transaction failed at the given register address.
    Io {
        /// Register address the failing transaction targeted.
        register: u8,
        /// Error reported by the underlying bus implementation.
        source: E,
    },
    /// The identity register returned an unexpected value; the driver will
    /// not configure whatever is on the bus.
    IdentityMismatch {
        /// Identity value documented in the datasheet.
        expected: u8,
        /// Value actually read back.
        found: u8,
    },
    /// A caller-supplied value lies outside its documented domain.
    Range {
        /// The offending configuration field.
        field: Field,
    },
    /// The caller violated an operational precondition.
    Contract(Contract),
}

/// Range-checked configuration fields across the device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// RPR-0521RS proximity high watermark (12-bit).
    ProximityWatermarkHigh,
    /// RPR-0521RS proximity low watermark (12-bit).
    ProximityWatermarkLow,
    /// RPR-0521RS proximity offset (10-bit).
    ProximityOffset,
    /// BM1383GLV high watermark in hPa.
    PressureWatermarkHigh,
    /// BM1383GLV low watermark in hPa.
    PressureWatermarkLow,
    /// KX022 sample buffer watermark.
    BufferWatermark,
    /// BU9873 seconds field.
    Seconds,
    /// BU9873 minutes field.
    Minutes,
    /// BU9873 hours field.
    Hours,
    /// BU9873 day-of-week field.
    DayOfWeek,
    /// BU9873 day-of-month field.
    DayOfMonth,
    /// BU9873 month field.
    Month,
    /// BU9873 year field.
    Year,
}

/// Operational preconditions a caller can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Contract {
    /// The requested reconfiguration is only legal while the device sleeps.
    ConfigureWhileActive,
    /// More samples were requested than the buffer currently holds.
    FifoOverdrain,
}

/// Error returned by the pure codec and watermark helpers when a value does
/// not fit its encoding. Device-level callers map it onto
/// [`Error::Range`] with the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

impl<E> Error<E> {
    pub(crate) fn range(field: Field) -> Self {
        Self::Range { field }
    }
}
