#![no_std]

mod bus;
mod error;

pub mod bh1745nuc;
pub mod bm1383glv;
pub mod bm1422gmv;
pub mod bu9873;
pub mod codec;
pub mod driver;
pub mod interface;
pub mod interrupt;
pub mod kx022;
pub mod registers;
pub mod rpr0521rs;
pub mod watermark;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::bh1745nuc::Bh1745nuc;
pub use crate::bm1383glv::Bm1383glv;
pub use crate::bm1422gmv::Bm1422gmv;
pub use crate::bu9873::Bu9873;
pub use crate::bus::RegisterBus;
pub use crate::driver::{PowerState, Sensor};
pub use crate::error::{Contract, Error, Field, OutOfRange, Result};
pub use crate::interrupt::{Edge, EdgeInterruptPin, InterruptLine};
pub use crate::kx022::Kx022;
pub use crate::rpr0521rs::Rpr0521rs;
