//! Adler-32 checksum (RFC 1950).
//!
//! Not a CRC: two running sums modulo the prime 65521, concatenated as
//! `(b << 16) | a`. Weaker error detection than CRC-32 but cheaper per byte,
//! which is why zlib uses it.

use crckit_traits::Checksum;

/// Largest prime smaller than 2^16.
const MOD_ADLER: u32 = 65_521;

/// Largest n such that `255 * n * (n + 1) / 2 + (n + 1) * (MOD_ADLER - 1)`
/// fits in a `u32`. Both sums can defer their modulo for this many bytes.
const NMAX: usize = 5552;

/// Adler-32 rolling checksum.
///
/// ```
/// use crckit::{Adler32, Checksum};
///
/// assert_eq!(Adler32::checksum(b"Wikipedia"), 0x11E6_0398);
/// ```
#[derive(Clone, Debug)]
pub struct Adler32 {
  a: u32,
  b: u32,
}

impl Checksum for Adler32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { a: 1, b: 0 }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self {
      a: initial & 0xFFFF,
      b: initial >> 16,
    }
  }

  fn update(&mut self, data: &[u8]) {
    // Deferring the modulo across NMAX-byte blocks keeps both sums inside
    // u32 range (zlib's bound).
    for block in data.chunks(NMAX) {
      for &byte in block {
        self.a += u32::from(byte);
        self.b += self.a;
      }
      self.a %= MOD_ADLER;
      self.b %= MOD_ADLER;
    }
  }

  #[inline]
  fn finalize(&self) -> u32 {
    (self.b << 16) | self.a
  }

  #[inline]
  fn reset(&mut self) {
    self.a = 1;
    self.b = 0;
  }
}

impl Default for Adler32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_vectors() {
    assert_eq!(Adler32::checksum(&[]), 1);
    assert_eq!(Adler32::checksum(b"123456789"), 0x091E_01DE);
    assert_eq!(Adler32::checksum(b"Wikipedia"), 0x11E6_0398);
  }

  #[test]
  fn incremental_matches_oneshot() {
    let data = b"the adler sums carry across update boundaries";
    let expected = Adler32::checksum(data);

    for split in 0..=data.len() {
      let mut hasher = Adler32::new();
      hasher.update(&data[..split]);
      hasher.update(&data[split..]);
      assert_eq!(hasher.finalize(), expected, "split {split}");
    }
  }

  #[test]
  fn with_initial_resumes_a_finalized_value() {
    let data = b"resume from the packed (b, a) pair";
    let (head, tail) = data.split_at(12);

    let mut first = Adler32::new();
    first.update(head);
    let mut second = Adler32::with_initial(first.finalize());
    second.update(tail);

    assert_eq!(second.finalize(), Adler32::checksum(data));
  }

  #[test]
  fn deferred_modulo_handles_long_all_0xff_runs() {
    // Worst case for the sums: maximal byte values across several NMAX
    // blocks plus a partial tail.
    let data = [0xFFu8; NMAX * 3 + 17];
    let mut expected_a: u64 = 1;
    let mut expected_b: u64 = 0;
    for _ in &data {
      expected_a = (expected_a + 0xFF) % u64::from(MOD_ADLER);
      expected_b = (expected_b + expected_a) % u64::from(MOD_ADLER);
    }

    let got = Adler32::checksum(&data);
    assert_eq!(u64::from(got & 0xFFFF), expected_a);
    assert_eq!(u64::from(got >> 16), expected_b);
  }

  #[test]
  fn reset_matches_fresh() {
    let mut hasher = Adler32::new();
    hasher.update(b"stale");
    hasher.reset();
    hasher.update(b"Wikipedia");
    assert_eq!(hasher.finalize(), 0x11E6_0398);
  }
}
