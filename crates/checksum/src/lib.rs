//! Parameter-driven CRC checksums, plus Adler-32 and Fletcher-32.
//!
//! This crate computes CRCs for any register width from 8 to 64 bits from a
//! single table-driven engine. A CRC variant is a [`CrcParams`] bundle
//! (width, polynomial, initial value, reflection flags, final XOR); hand any
//! bundle to [`Crc`] or pick one of the named preset types, which carry
//! their lookup tables embedded at compile time.
//!
//! # Presets
//!
//! | Type | Width | Polynomial | Check (`"123456789"`) |
//! |------|-------|------------|------------------------|
//! | [`Crc32`] | 32 | 0x04C11DB7 | 0xCBF43926 |
//! | [`Crc32Mpeg2`] | 32 | 0x04C11DB7 | 0x0376E6E7 |
//! | [`Crc32Posix`] | 32 | 0x04C11DB7 | 0x765E7680 |
//! | [`Crc32Bzip2`] | 32 | 0x04C11DB7 | 0xFC891918 |
//! | [`Crc32Jamcrc`] | 32 | 0x04C11DB7 | 0x340BC6D9 |
//! | [`Crc32Autosar`] | 32 | 0xF4ACFB13 | 0x1697D06A |
//! | [`Crc32c`] | 32 | 0x1EDC6F41 | 0xE3069283 |
//! | [`Crc32d`] | 32 | 0xA833982B | 0x87315576 |
//! | [`Crc32q`] | 32 | 0x814141AB | 0x3010BF7F |
//! | [`Crc32Xfer`] | 32 | 0x000000AF | 0xBD0BE338 |
//! | [`Crc30Cdma`] | 30 | 0x2030B9C7 | 0x04C34ABF |
//! | [`Crc31Philips`] | 31 | 0x04C11DB7 | 0x0CE9E46C |
//! | [`Crc24OpenPgp`] | 24 | 0x864CFB | 0x21CF02 |
//! | [`Crc24Ble`] | 24 | 0x00065B | 0xC25A56 |
//! | [`Crc64Iso`] | 64 | 0x1B | 0x46A5A9388A5BEFFE |
//! | [`Crc64Ecma182`] | 64 | 0x42F0E1EBA9EA3693 | 0x995DC9BBDF1939FA |
//!
//! [`Adler32`] and [`Fletcher32`] round out the non-CRC checksums.
//!
//! # Example
//!
//! ```rust
//! use crckit::{Checksum, Crc, CrcParams, Crc32};
//!
//! // One-shot computation through a preset type
//! let data = b"123456789";
//! assert_eq!(Crc32::checksum(data), 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//!
//! // The same variant through the generic engine
//! let crc = Crc::checksum(CrcParams::CRC32, data)?;
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Or a fully ad-hoc variant
//! let crc16_arc = CrcParams {
//!   width: 16,
//!   polynomial: 0x8005,
//!   initial: 0,
//!   reflect_in: true,
//!   reflect_out: true,
//!   xor_out: 0,
//! };
//! assert_eq!(Crc::checksum(crc16_arc, data)?, 0xBB3D);
//! # Ok::<(), crckit::CrcError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! crckit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;
#[macro_use]
mod macros;

mod adler32;
mod crc24;
mod crc32;
mod crc64;
mod engine;
mod error;
mod fletcher32;
mod params;

pub use adler32::Adler32;
pub use common::tables::{Convention, CrcTable};
pub use crc24::{Crc24Ble, Crc24OpenPgp};
pub use crc32::{
  Crc30Cdma, Crc31Philips, Crc32, Crc32Autosar, Crc32Bzip2, Crc32Jamcrc, Crc32Mpeg2, Crc32Posix,
  Crc32Xfer, Crc32c, Crc32d, Crc32q,
};
pub use crc64::{crc64_direct, Crc64Ecma182, Crc64Iso};
pub use engine::Crc;
pub use error::CrcError;
pub use fletcher32::Fletcher32;
pub use params::CrcParams;

// Re-export the trait so `use crckit::Checksum` works without naming the
// traits crate.
pub use crckit_traits::Checksum;
