//! CRC algorithm parameters.
//!
//! This module defines the parameter bundles for the supported CRC variants
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/): width,
//! polynomial, initial value, input/output reflection, and final XOR. Every
//! named preset is one constant here; the engine consumes any bundle, preset
//! or caller-built, through the same pipeline.

use crate::{
  common::{
    reflect::{reflect_bits, width_mask},
    tables,
  },
  error::CrcError,
};

/// CRC algorithm parameters.
///
/// Captures everything needed to define a CRC variant. An instance is
/// immutable configuration: build one (or pick a preset), hand it to
/// [`Crc::new`](crate::Crc::new), and the engine does the rest.
///
/// # Parameters
///
/// - `width`: number of bits in the register (8 to 64)
/// - `polynomial`: the generator polynomial in normal (MSB-first) form,
///   without the implicit top bit
/// - `initial`: initial value for the CRC register
/// - `reflect_in`: if true, input is processed LSB-first
/// - `reflect_out`: if true, reflect the final register before the XOR
/// - `xor_out`: value XORed with the final register
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) use
/// reflected input and output, which maps to LSB-first processing over the
/// bit-reversed polynomial. Every preset in this catalog sets `reflect_in`
/// and `reflect_out` identically; the engine nevertheless honors them
/// independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Width in bits (8 to 64).
  pub width: u8,
  /// Generator polynomial in normal form (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Process input LSB-first.
  pub reflect_in: bool,
  /// Reflect final register before XOR.
  pub reflect_out: bool,
  /// XOR value applied to the final register.
  pub xor_out: u64,
}

impl CrcParams {
  /// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG, XZ.
  ///
  /// The most widely used CRC-32 variant. Also known as PKZIP, ADCCP and
  /// V-42.
  pub const CRC32: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/MPEG-2 - MPEG-2 transport streams, Ethernet FCS ordering.
  pub const MPEG2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-32/CKSUM - POSIX `cksum` utility.
  pub const POSIX: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/BZIP2 - bzip2, ATM AAL5, DECT-B.
  pub const BZIP2: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/JAMCRC - like CRC-32/ISO-HDLC but without the final XOR.
  pub const JAMCRC: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000_0000,
  };

  /// CRC-32/AUTOSAR - AUTOSAR automotive standard.
  pub const AUTOSAR: Self = Self {
    width: 32,
    polynomial: 0xF4AC_FB13,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32C (Castagnoli) - iSCSI, SCTP, ext4, Btrfs, BASE91-C.
  ///
  /// Designed for good error detection in storage and networking.
  pub const CRC32_C: Self = Self {
    width: 32,
    polynomial: 0x1EDC_6F41,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32D - BASE91-D.
  pub const CRC32_D: Self = Self {
    width: 32,
    polynomial: 0xA833_982B,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32Q - AIXM aeronautical information exchange.
  pub const CRC32_Q: Self = Self {
    width: 32,
    polynomial: 0x8141_41AB,
    initial: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-32/XFER.
  pub const XFER: Self = Self {
    width: 32,
    polynomial: 0x0000_00AF,
    initial: 0x0000_0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-30/CDMA - CDMA2000 physical layer.
  pub const CDMA: Self = Self {
    width: 30,
    polynomial: 0x2030_B9C7,
    initial: 0x3FFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x3FFF_FFFF,
  };

  /// CRC-31/PHILIPS.
  pub const PHILIPS: Self = Self {
    width: 31,
    polynomial: 0x04C1_1DB7,
    initial: 0x7FFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x7FFF_FFFF,
  };

  /// CRC-24/OPENPGP - OpenPGP ASCII armor (RFC 4880).
  pub const CRC24_OPENPGP: Self = Self {
    width: 24,
    polynomial: 0x0086_4CFB,
    initial: 0x00B7_04CE,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };

  /// CRC-24/BLE - Bluetooth Low Energy link layer.
  pub const CRC24_BLE: Self = Self {
    width: 24,
    polynomial: 0x0000_065B,
    initial: 0x0055_5555,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000_0000,
  };

  /// CRC-64/ISO - ISO 3309 polynomial, zero initial value.
  ///
  /// The polynomial is stored in normal form (`x^64 + x^4 + x^3 + x + 1`);
  /// the original formulation carries the pre-reflected literal
  /// `0xD800000000000000` with its reflection baked into the table
  /// convention, which is the same computation.
  pub const CRC64_ISO: Self = Self {
    width: 64,
    polynomial: 0x0000_0000_0000_001B,
    initial: 0x0000_0000_0000_0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000_0000_0000_0000,
  };

  /// CRC-64/ECMA-182 - XZ Utils, 7-Zip.
  pub const CRC64_ECMA182: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0xFFFF_FFFF_FFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF_FFFF_FFFF,
  };

  /// Check the bundle against the engine's contract.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] if `width` is outside `8..=64`.
  /// Widths are rejected, never silently clamped.
  #[inline]
  pub const fn validate(&self) -> Result<(), CrcError> {
    tables::validate_width(self.width)
  }

  /// Mask covering the register's valid bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width)
  }

  /// Returns the polynomial in bit-reflected form.
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.polynomial, self.width)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_crc32_polynomial_reflected() {
    // CRC-32 polynomial 0x04C11DB7 reflected is 0xEDB88320
    assert_eq!(CrcParams::CRC32.polynomial_reflected(), 0xEDB8_8320);
  }

  #[test]
  fn test_crc32c_polynomial_reflected() {
    // CRC-32C polynomial 0x1EDC6F41 reflected is 0x82F63B78
    assert_eq!(CrcParams::CRC32_C.polynomial_reflected(), 0x82F6_3B78);
  }

  #[test]
  fn test_crc64_iso_polynomial_reflected() {
    // The pre-reflected literal the original formulation uses
    assert_eq!(
      CrcParams::CRC64_ISO.polynomial_reflected(),
      0xD800_0000_0000_0000
    );
  }

  #[test]
  fn all_presets_validate() {
    for preset in ALL_PRESETS {
      assert!(preset.validate().is_ok());
    }
  }

  #[test]
  fn presets_never_mix_reflection() {
    // No shipped preset sets reflect_in and reflect_out differently.
    for preset in ALL_PRESETS {
      assert_eq!(preset.reflect_in, preset.reflect_out);
    }
  }

  #[test]
  fn preset_fields_fit_width() {
    for preset in ALL_PRESETS {
      let mask = preset.mask();
      assert_eq!(preset.polynomial & !mask, 0);
      assert_eq!(preset.initial & !mask, 0);
      assert_eq!(preset.xor_out & !mask, 0);
    }
  }

  #[test]
  fn validate_rejects_out_of_range_widths() {
    let mut params = CrcParams::CRC32;
    params.width = 0;
    assert_eq!(params.validate(), Err(CrcError::UnsupportedWidth(0)));
    params.width = 7;
    assert_eq!(params.validate(), Err(CrcError::UnsupportedWidth(7)));
    params.width = 65;
    assert_eq!(params.validate(), Err(CrcError::UnsupportedWidth(65)));
  }

  const ALL_PRESETS: &[CrcParams] = &[
    CrcParams::CRC32,
    CrcParams::MPEG2,
    CrcParams::POSIX,
    CrcParams::BZIP2,
    CrcParams::JAMCRC,
    CrcParams::AUTOSAR,
    CrcParams::CRC32_C,
    CrcParams::CRC32_D,
    CrcParams::CRC32_Q,
    CrcParams::XFER,
    CrcParams::CDMA,
    CrcParams::PHILIPS,
    CrcParams::CRC24_OPENPGP,
    CrcParams::CRC24_BLE,
    CrcParams::CRC64_ISO,
    CrcParams::CRC64_ECMA182,
  ];
}
