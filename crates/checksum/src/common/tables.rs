//! Const-fn CRC lookup table generation for arbitrary widths.
//!
//! A [`CrcTable`] maps each byte value to the `width`-bit partial remainder
//! it contributes to the running register. One table is fully determined by
//! `(width, polynomial, convention)`; it contains no mutable state and may be
//! shared freely across threads.
//!
//! Tables for the named presets are generated at compile time and embedded
//! directly in the binary; ad-hoc parameters build a table at construction.

// SAFETY: All array indexing in this module uses bounded loop indices
// (0..256) or indices masked with `& 0xFF`. Clippy cannot prove this in
// const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reflect::{reflect_bits, width_mask};
use crate::{error::CrcError, params::CrcParams};

/// Narrowest register width the byte-at-a-time kernels support.
pub(crate) const MIN_WIDTH: u8 = 8;
/// Widest register width representable in the `u64` working register.
pub(crate) const MAX_WIDTH: u8 = 64;

/// Reject widths the update kernels cannot process.
#[inline]
pub(crate) const fn validate_width(width: u8) -> Result<(), CrcError> {
  if width < MIN_WIDTH || width > MAX_WIDTH {
    Err(CrcError::UnsupportedWidth(width))
  } else {
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bit-Order Convention
// ─────────────────────────────────────────────────────────────────────────────

/// Bit-order convention of a CRC table and its update loop.
///
/// The tag is fixed when a table (or preset) is defined; it is never
/// re-derived from the polynomial during computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Convention {
  /// MSB-first processing: polynomial in normal form, register shifts left.
  ///
  /// Used by the non-reflected presets (MPEG-2, POSIX, BZIP2, CRC-30/CDMA,
  /// CRC-31/PHILIPS, CRC-24/OPENPGP, ...).
  Normal,
  /// LSB-first processing: polynomial in bit-reflected form, register
  /// shifts right.
  ///
  /// Used by the reflected presets (CRC-32/ISO-HDLC, CRC-32C, JAMCRC,
  /// CRC-64 variants, ...).
  Reflected,
}

// ─────────────────────────────────────────────────────────────────────────────
// Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single lookup table entry.
///
/// Bit-by-bit computation of the partial remainder for `index`. Every
/// intermediate value is masked to `width` bits on the Normal path; widths
/// that are not byte-aligned (24, 30, 31) silently corrupt without this.
const fn table_entry(width: u8, polynomial: u64, convention: Convention, index: u8) -> u64 {
  let mask = width_mask(width);
  match convention {
    Convention::Normal => {
      let top = 1u64 << (width - 1);
      let mut crc = ((index as u64) << (width - 8)) & mask;
      let mut bit = 0;
      while bit < 8 {
        crc = if crc & top != 0 {
          ((crc << 1) ^ polynomial) & mask
        } else {
          (crc << 1) & mask
        };
        bit += 1;
      }
      crc
    }
    Convention::Reflected => {
      let poly = polynomial & mask;
      let mut crc = index as u64;
      let mut bit = 0;
      while bit < 8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
        bit += 1;
      }
      crc
    }
  }
}

/// A 256-entry CRC lookup table plus the metadata needed to drive it.
///
/// Construction is a pure function of `(width, polynomial, convention)`:
/// identical inputs always yield a bit-identical table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrcTable {
  width: u8,
  convention: Convention,
  entries: [u64; 256],
}

impl CrcTable {
  /// Build a table without width validation.
  ///
  /// `const`-evaluable; used to embed preset tables in the binary. Callers
  /// must guarantee `8 <= width <= 64` (all preset widths qualify). For the
  /// Reflected convention, `polynomial` is the bit-reflected form.
  #[must_use]
  pub const fn build(width: u8, polynomial: u64, convention: Convention) -> Self {
    let mut entries = [0u64; 256];
    let mut i = 0usize;
    while i < 256 {
      entries[i] = table_entry(width, polynomial, convention, i as u8);
      i += 1;
    }
    Self {
      width,
      convention,
      entries,
    }
  }

  /// Build a table, rejecting unsupported widths.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] if `width` is outside `8..=64`.
  pub fn new(width: u8, polynomial: u64, convention: Convention) -> Result<Self, CrcError> {
    validate_width(width)?;
    Ok(Self::build(width, polynomial, convention))
  }

  /// Build the table a parameter bundle resolves to.
  ///
  /// Reflected parameters get a table over the bit-reflected polynomial;
  /// the reflection happens here, once, not per computation.
  #[must_use]
  pub const fn for_params(params: &CrcParams) -> Self {
    if params.reflect_in {
      Self::build(
        params.width,
        reflect_bits(params.polynomial, params.width),
        Convention::Reflected,
      )
    } else {
      Self::build(
        params.width,
        params.polynomial & width_mask(params.width),
        Convention::Normal,
      )
    }
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Bit-order convention this table was built for.
  #[inline]
  #[must_use]
  pub const fn convention(&self) -> Convention {
    self.convention
  }

  /// The ordered 256-entry table, for inspection or external reuse.
  ///
  /// Each entry's valid bits are the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u64; 256] {
    &self.entries
  }

  /// Fold `data` into `state`, one byte per table lookup.
  ///
  /// `state` and the returned register are already masked to `width` bits.
  #[inline]
  #[must_use]
  pub fn update(&self, mut state: u64, data: &[u8]) -> u64 {
    match self.convention {
      Convention::Normal => {
        let mask = width_mask(self.width);
        let shift = self.width as u32 - 8;
        for &byte in data {
          let index = (((state >> shift) ^ byte as u64) & 0xFF) as usize;
          state = ((state << 8) ^ self.entries[index]) & mask;
        }
        state
      }
      Convention::Reflected => {
        for &byte in data {
          let index = ((state ^ byte as u64) & 0xFF) as usize;
          state = (state >> 8) ^ self.entries[index];
        }
        state
      }
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn construction_is_deterministic() {
    let a = CrcTable::build(32, 0x04C1_1DB7, Convention::Normal);
    let b = CrcTable::build(32, 0x04C1_1DB7, Convention::Normal);
    assert_eq!(a, b);

    let a = CrcTable::build(64, 0xC96C_5795_D787_0F42, Convention::Reflected);
    let b = CrcTable::build(64, 0xC96C_5795_D787_0F42, Convention::Reflected);
    assert_eq!(a, b);
  }

  #[test]
  fn normal_entries_spot_check() {
    // entry[1] of a Normal table is always the polynomial itself
    let t = CrcTable::build(32, 0x04C1_1DB7, Convention::Normal);
    assert_eq!(t.entries()[0], 0);
    assert_eq!(t.entries()[1], 0x04C1_1DB7);
    assert_eq!(t.entries()[255], 0xB1F7_40B4);

    let t = CrcTable::build(24, 0x0086_4CFB, Convention::Normal);
    assert_eq!(t.entries()[1], 0x0086_4CFB);
    assert_eq!(t.entries()[128], 0x0033_47A4);
  }

  #[test]
  fn reflected_entries_spot_check() {
    let t = CrcTable::build(32, 0xEDB8_8320, Convention::Reflected);
    assert_eq!(t.entries()[0], 0);
    assert_eq!(t.entries()[1], 0x7707_3096);
    assert_eq!(t.entries()[255], 0x2D02_EF8D);

    let t = CrcTable::build(64, 0xC96C_5795_D787_0F42, Convention::Reflected);
    assert_eq!(t.entries()[1], 0xB32E_4CBE_03A7_5F6F);
  }

  #[test]
  fn sub_byte_widths_stay_masked() {
    for &(width, poly) in &[(24u8, 0x0086_4CFBu64), (30, 0x2030_B9C7), (31, 0x04C1_1DB7)] {
      let t = CrcTable::build(width, poly, Convention::Normal);
      let mask = width_mask(width);
      for (i, &entry) in t.entries().iter().enumerate() {
        assert_eq!(entry & !mask, 0, "width={width} entry {i} exceeds mask");
      }
    }
  }

  #[test]
  fn conventions_differ() {
    let normal = CrcTable::build(32, 0x04C1_1DB7, Convention::Normal);
    let reflected = CrcTable::build(32, 0xEDB8_8320, Convention::Reflected);
    assert_ne!(normal.entries(), reflected.entries());
  }

  #[test]
  fn new_rejects_unsupported_widths() {
    assert_eq!(
      CrcTable::new(7, 0x07, Convention::Normal).unwrap_err(),
      CrcError::UnsupportedWidth(7)
    );
    assert_eq!(
      CrcTable::new(65, 0x07, Convention::Normal).unwrap_err(),
      CrcError::UnsupportedWidth(65)
    );
    assert!(CrcTable::new(8, 0x07, Convention::Normal).is_ok());
    assert!(CrcTable::new(64, 0x1B, Convention::Reflected).is_ok());
  }

  #[test]
  fn update_empty_is_identity() {
    let t = CrcTable::build(32, 0xEDB8_8320, Convention::Reflected);
    assert_eq!(t.update(0xDEAD_BEEF, &[]), 0xDEAD_BEEF);
  }
}
