//! CRC-64 presets and the direct bitwise 64-bit entry point.

use crate::{common::reference::crc_bitwise_reflected, params::CrcParams};

define_crc! {
  /// CRC-64/ISO - ISO 3309, zero initial value and no final XOR.
  pub struct Crc64Iso {
    output: u64,
    output_size: 8,
    params: CrcParams::CRC64_ISO,
  }
}

define_crc! {
  /// CRC-64/ECMA-182 (reflected form) - XZ Utils, 7-Zip.
  ///
  /// ```
  /// use crckit::{Checksum, Crc64Ecma182};
  ///
  /// assert_eq!(Crc64Ecma182::checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
  /// ```
  pub struct Crc64Ecma182 {
    output: u64,
    output_size: 8,
    params: CrcParams::CRC64_ECMA182,
  }
}

/// One-shot bitwise CRC-64 over fully caller-controlled knobs.
///
/// Unlike the preset types, nothing here is fixed: the caller supplies the
/// polynomial, initial register, final XOR, and whether the polynomial
/// should be bit-reflected before use. `reflect_poly` affects the polynomial
/// only; processing is always LSB-first and the result is never reflected.
///
/// No lookup table is built, so this stays cheap for one-off calls with
/// novel polynomials. With `polynomial = 0x42F0_E1EB_A9EA_3693`,
/// `initial = !0`, `xor_out = !0` and `reflect_poly = true` it agrees with
/// [`Crc64Ecma182`].
///
/// ```
/// use crckit::crc64_direct;
///
/// let crc = crc64_direct(0x42F0_E1EB_A9EA_3693, !0, !0, true, b"123456789");
/// assert_eq!(crc, 0x995D_C9BB_DF19_39FA);
/// ```
#[must_use]
pub fn crc64_direct(
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_poly: bool,
  data: &[u8],
) -> u64 {
  let poly = if reflect_poly {
    polynomial.reverse_bits()
  } else {
    polynomial
  };
  crc_bitwise_reflected(poly, initial, data) ^ xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
