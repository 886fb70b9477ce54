//! Sample buffer (FIFO) management for the KX022-1020.
//!
//! The device exposes its buffer through a single auto-incrementing read
//! register; each 3-axis 16-bit sample occupies six bytes. Draining more
//! samples than [`count`] reports is device-undefined and rejected as a
//! caller error before any buffer read is issued.

use crate::bus::RegisterBus;
use crate::codec;
use crate::error::{Contract, Error, Result};
use crate::interface::SensorInterface;

use super::registers::{REG_BUF_READ, REG_BUF_STATUS_1};

/// Bytes per buffered 3-axis 16-bit sample.
pub const SAMPLE_BYTES: usize = 6;

/// Highest usable watermark: the 256-byte buffer holds 41 full samples in
/// 16-bit mode.
pub const WATERMARK_MAX_SAMPLES: u8 = 41;

/// One decoded acceleration sample in g.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// X-axis acceleration.
    pub x: f32,
    /// Y-axis acceleration.
    pub y: f32,
    /// Z-axis acceleration.
    pub z: f32,
}

/// Decodes one raw 6-byte buffer entry at the given scale.
pub fn decode_sample(raw: &[u8; SAMPLE_BYTES], lsb_per_g: f32) -> Sample {
    let [x, y, z] = codec::vector_from_le(raw);
    Sample {
        x: x as f32 / lsb_per_g,
        y: y as f32 / lsb_per_g,
        z: z as f32 / lsb_per_g,
    }
}

/// Returns the number of complete samples currently buffered.
pub fn count<I>(bus: &mut RegisterBus<I>) -> Result<usize, I::Error>
where
    I: SensorInterface,
{
    let bytes = bus.read(REG_BUF_STATUS_1)?;
    Ok(bytes as usize / SAMPLE_BYTES)
}

/// Drains `out.len()` samples from the buffer.
///
/// Issues one six-byte burst from `BUF_READ` per sample; the device
/// advances its internal read pointer on each access. Requests larger than
/// the currently buffered count fail with
/// [`Contract::FifoOverdrain`] before any buffer read.
pub fn drain<I>(bus: &mut RegisterBus<I>, lsb_per_g: f32, out: &mut [Sample]) -> Result<(), I::Error>
where
    I: SensorInterface,
{
    if out.len() > count(bus)? {
        return Err(Error::Contract(Contract::FifoOverdrain));
    }

    let mut raw = [0u8; SAMPLE_BYTES];
    for sample in out.iter_mut() {
        bus.read_many(REG_BUF_READ, &mut raw)?;
        *sample = decode_sample(&raw, lsb_per_g);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_scales_each_axis() {
        let raw = [0x00, 0x40, 0x00, 0xC0, 0x00, 0x00];
        let sample = decode_sample(&raw, 16384.0);
        assert_eq!(sample, Sample {
            x: 1.0,
            y: -1.0,
            z: 0.0
        });
    }
}
