//! Bitwise reference implementations.
//!
//! The canonical "source of truth" for CRC computation: one bit at a time,
//! no lookup tables, directly mirroring the polynomial-division definition.
//! The table-driven kernels must produce identical results.
//!
//! These are intentionally slow (~8 operations per bit). They serve as:
//!
//! - test oracles for the table-driven engine
//! - compile-time verification of the preset check values
//! - the non-tabular 64-bit path ([`crate::crc64::crc64_direct`]), where a
//!   table would be built and discarded for a single one-off call

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reflect::width_mask;

/// Bitwise CRC computation, LSB-first (reflected form).
///
/// `polynomial` is the bit-reflected polynomial; the register shifts right.
/// Works for any width up to 64: high bits above the polynomial's width are
/// never set.
///
/// Returns the raw register state (caller applies final XOR if needed).
#[must_use]
pub(crate) const fn crc_bitwise_reflected(polynomial: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 {
        (crc >> 1) ^ polynomial
      } else {
        crc >> 1
      };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC computation, MSB-first (normal form), masked to `width` bits.
///
/// `polynomial` is the normal-form polynomial. Every intermediate value is
/// masked to exactly `width` bits, which is what keeps the 24/30/31-bit
/// variants honest.
///
/// Returns the raw register state (caller applies final XOR if needed).
#[must_use]
pub(crate) const fn crc_bitwise_normal(width: u8, polynomial: u64, init: u64, data: &[u8]) -> u64 {
  let mask = width_mask(width);
  let top = 1u64 << (width - 1);
  let mut crc = init & mask;
  let mut i = 0usize;
  while i < data.len() {
    crc ^= (data[i] as u64) << (width - 8);
    crc &= mask;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & top != 0 {
        ((crc << 1) ^ polynomial) & mask
      } else {
        (crc << 1) & mask
      };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementations against known
// check values at compile time. If these fail, the build fails.

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/ISO-HDLC: reflected 0x04C11DB7, init=0xFFFFFFFF, xorout=0xFFFFFFFF
// Check value: 0xCBF43926
const _: () = {
  let raw = crc_bitwise_reflected(0xEDB8_8320, 0xFFFF_FFFF, CHECK_INPUT);
  assert!(raw ^ 0xFFFF_FFFF == 0xCBF4_3926);
};

// CRC-32/BZIP2: normal 0x04C11DB7, init=0xFFFFFFFF, xorout=0xFFFFFFFF
// Check value: 0xFC891918
const _: () = {
  let raw = crc_bitwise_normal(32, 0x04C1_1DB7, 0xFFFF_FFFF, CHECK_INPUT);
  assert!(raw ^ 0xFFFF_FFFF == 0xFC89_1918);
};

// CRC-24/OPENPGP: normal 0x864CFB, init=0xB704CE, no xorout
// Check value: 0x21CF02
const _: () = {
  let check = crc_bitwise_normal(24, 0x0086_4CFB, 0x00B7_04CE, CHECK_INPUT);
  assert!(check == 0x0021_CF02);
};

// CRC-30/CDMA: normal 0x2030B9C7, init=0x3FFFFFFF, xorout=0x3FFFFFFF
// Check value: 0x04C34ABF
const _: () = {
  let raw = crc_bitwise_normal(30, 0x2030_B9C7, 0x3FFF_FFFF, CHECK_INPUT);
  assert!(raw ^ 0x3FFF_FFFF == 0x04C3_4ABF);
};

// CRC-64/ECMA-182 (reflected form): init/xorout all-ones
// Check value: 0x995DC9BBDF1939FA
const _: () = {
  let raw = crc_bitwise_reflected(0xC96C_5795_D787_0F42, u64::MAX, CHECK_INPUT);
  assert!(raw ^ u64::MAX == 0x995D_C9BB_DF19_39FA);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
