//! Error types for checksum configuration.
//!
//! The engine itself is pure computation with no I/O and no transient
//! failures; the only error is a configuration rejected at construction.

use core::fmt;

/// A checksum configuration was rejected.
///
/// Returned by [`CrcParams::validate`](crate::CrcParams::validate),
/// [`Crc::new`](crate::Crc::new) and [`CrcTable::new`](crate::CrcTable::new).
/// Construction errors never produce a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// Register width outside the supported `8..=64` range.
  ///
  /// The byte-at-a-time kernels fold one whole byte per step, so widths
  /// below 8 bits are rejected rather than silently coerced.
  UnsupportedWidth(u8),
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth(width) => {
        write!(f, "unsupported CRC width {width} (supported: 8..=64)")
      }
    }
  }
}

impl core::error::Error for CrcError {}
