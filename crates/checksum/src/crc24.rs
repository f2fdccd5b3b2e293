//! CRC-24 presets.
//!
//! 24-bit registers ride in the low bits of a `u32`; the top byte of a
//! finalized value is always zero.

use crate::params::CrcParams;

define_crc! {
  /// CRC-24/OPENPGP - OpenPGP ASCII armor checksum (RFC 4880).
  ///
  /// ```
  /// use crckit::{Checksum, Crc24OpenPgp};
  ///
  /// assert_eq!(Crc24OpenPgp::checksum(b"123456789"), 0x0021_CF02);
  /// ```
  pub struct Crc24OpenPgp {
    output: u32,
    output_size: 3,
    params: CrcParams::CRC24_OPENPGP,
  }
}

define_crc! {
  /// CRC-24/BLE - Bluetooth Low Energy link layer.
  pub struct Crc24Ble {
    output: u32,
    output_size: 3,
    params: CrcParams::CRC24_BLE,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
