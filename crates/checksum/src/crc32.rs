//! CRC-32 family presets, plus the 30- and 31-bit variants that share the
//! same register plumbing.
//!
//! Each type is a fixed-parameter wrapper over the table-driven kernel with
//! its lookup table embedded at compile time. All of them implement
//! [`Checksum`](crate::Checksum); sub-32-bit variants (CRC-30, CRC-31) still
//! finalize into a `u32`, with the unused high bits always zero.

use crate::params::CrcParams;

define_crc! {
  /// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG, XZ.
  ///
  /// ```
  /// use crckit::{Checksum, Crc32};
  ///
  /// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
  /// ```
  pub struct Crc32 {
    output: u32,
    output_size: 4,
    params: CrcParams::CRC32,
  }
}

define_crc! {
  /// CRC-32/MPEG-2 - MPEG-2 transport streams.
  pub struct Crc32Mpeg2 {
    output: u32,
    output_size: 4,
    params: CrcParams::MPEG2,
  }
}

define_crc! {
  /// CRC-32/CKSUM - POSIX `cksum` utility.
  pub struct Crc32Posix {
    output: u32,
    output_size: 4,
    params: CrcParams::POSIX,
  }
}

define_crc! {
  /// CRC-32/BZIP2 - bzip2, ATM AAL5.
  pub struct Crc32Bzip2 {
    output: u32,
    output_size: 4,
    params: CrcParams::BZIP2,
  }
}

define_crc! {
  /// CRC-32/JAMCRC - CRC-32/ISO-HDLC without the final XOR.
  pub struct Crc32Jamcrc {
    output: u32,
    output_size: 4,
    params: CrcParams::JAMCRC,
  }
}

define_crc! {
  /// CRC-32/AUTOSAR - AUTOSAR automotive standard.
  pub struct Crc32Autosar {
    output: u32,
    output_size: 4,
    params: CrcParams::AUTOSAR,
  }
}

define_crc! {
  /// CRC-32C (Castagnoli) - iSCSI, SCTP, ext4, Btrfs.
  ///
  /// ```
  /// use crckit::{Checksum, Crc32c};
  ///
  /// assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);
  /// ```
  pub struct Crc32c {
    output: u32,
    output_size: 4,
    params: CrcParams::CRC32_C,
  }
}

define_crc! {
  /// CRC-32D - BASE91-D.
  pub struct Crc32d {
    output: u32,
    output_size: 4,
    params: CrcParams::CRC32_D,
  }
}

define_crc! {
  /// CRC-32Q - AIXM aeronautical information exchange.
  pub struct Crc32q {
    output: u32,
    output_size: 4,
    params: CrcParams::CRC32_Q,
  }
}

define_crc! {
  /// CRC-32/XFER.
  pub struct Crc32Xfer {
    output: u32,
    output_size: 4,
    params: CrcParams::XFER,
  }
}

define_crc! {
  /// CRC-30/CDMA - CDMA2000 physical layer.
  ///
  /// The register is 30 bits wide; finalized values always have the top two
  /// bits of the `u32` clear.
  pub struct Crc30Cdma {
    output: u32,
    output_size: 4,
    params: CrcParams::CDMA,
  }
}

define_crc! {
  /// CRC-31/PHILIPS.
  ///
  /// The register is 31 bits wide; finalized values always have the top bit
  /// of the `u32` clear.
  pub struct Crc31Philips {
    output: u32,
    output_size: 4,
    params: CrcParams::PHILIPS,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
