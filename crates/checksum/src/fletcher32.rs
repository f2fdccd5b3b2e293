//! Fletcher-32 checksum.
//!
//! Two running sums over 16-bit little-endian words, each modulo 0xFFFF,
//! concatenated as `(sum2 << 16) | sum1`. Input of odd length is padded with
//! a zero byte at finalization.

use crckit_traits::Checksum;

/// Fletcher sums are one's-complement style: modulo 2^16 - 1.
const MOD_FLETCHER: u32 = 0xFFFF;

/// Fletcher-32 rolling checksum.
///
/// Bytes are paired into little-endian 16-bit words. A trailing unpaired
/// byte is held across [`update`](Checksum::update) calls and only padded
/// with zero at [`finalize`](Checksum::finalize), so chunking never changes
/// the result.
///
/// ```
/// use crckit::{Checksum, Fletcher32};
///
/// assert_eq!(Fletcher32::checksum(b"abcde"), 0xF04F_C729);
/// ```
#[derive(Clone, Debug)]
pub struct Fletcher32 {
  sum1: u32,
  sum2: u32,
  pending: Option<u8>,
}

impl Fletcher32 {
  #[inline]
  fn fold_word(sum1: &mut u32, sum2: &mut u32, word: u16) {
    *sum1 = (*sum1 + u32::from(word)) % MOD_FLETCHER;
    *sum2 = (*sum2 + *sum1) % MOD_FLETCHER;
  }
}

impl Checksum for Fletcher32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self {
      sum1: 0,
      sum2: 0,
      pending: None,
    }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self {
      sum1: initial & 0xFFFF,
      sum2: initial >> 16,
      pending: None,
    }
  }

  fn update(&mut self, data: &[u8]) {
    for &byte in data {
      match self.pending.take() {
        Some(low) => {
          Self::fold_word(&mut self.sum1, &mut self.sum2, u16::from_le_bytes([low, byte]));
        }
        None => self.pending = Some(byte),
      }
    }
  }

  fn finalize(&self) -> u32 {
    let mut sum1 = self.sum1;
    let mut sum2 = self.sum2;
    if let Some(low) = self.pending {
      // Pad the unpaired byte with zero without consuming it; more data
      // may still arrive.
      Self::fold_word(&mut sum1, &mut sum2, u16::from(low));
    }
    (sum2 << 16) | sum1
  }

  #[inline]
  fn reset(&mut self) {
    self.sum1 = 0;
    self.sum2 = 0;
    self.pending = None;
  }
}

impl Default for Fletcher32 {
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
    assert_eq!(Fletcher32::checksum(&[]), 0);
    assert_eq!(Fletcher32::checksum(b"abcde"), 0xF04F_C729);
    assert_eq!(Fletcher32::checksum(b"abcdef"), 0x5650_2D2A);
    assert_eq!(Fletcher32::checksum(b"123456789"), 0xDF09_D509);
  }

  #[test]
  fn odd_byte_carries_across_updates() {
    let data = b"abcde";
    let expected = Fletcher32::checksum(data);

    for split in 0..=data.len() {
      let mut hasher = Fletcher32::new();
      hasher.update(&data[..split]);
      hasher.update(&data[split..]);
      assert_eq!(hasher.finalize(), expected, "split {split}");
    }

    // Byte-at-a-time feeding, every word straddles a call boundary.
    let mut hasher = Fletcher32::new();
    for &byte in data {
      hasher.update(&[byte]);
    }
    assert_eq!(hasher.finalize(), expected);
  }

  #[test]
  fn finalize_does_not_consume_the_pending_byte() {
    let mut hasher = Fletcher32::new();
    hasher.update(b"abc");
    let padded = hasher.finalize();
    assert_eq!(padded, Fletcher32::checksum(b"abc"));

    // The held byte still pairs with the next one.
    hasher.update(b"de");
    assert_eq!(hasher.finalize(), Fletcher32::checksum(b"abcde"));
  }

  #[test]
  fn words_are_little_endian() {
    // One word: "ab" is 0x6261 little-endian, so sum1 == sum2 == 0x6261.
    assert_eq!(Fletcher32::checksum(b"ab"), 0x6261_6261);
  }

  #[test]
  fn with_initial_resumes_at_a_word_boundary() {
    let data = b"an even-length prefix pair";
    let (head, tail) = data.split_at(8);

    let mut first = Fletcher32::new();
    first.update(head);
    let mut second = Fletcher32::with_initial(first.finalize());
    second.update(tail);

    assert_eq!(second.finalize(), Fletcher32::checksum(data));
  }

  #[test]
  fn sums_stay_below_modulus() {
    let data = [0xFFu8; 4096];
    let crc = Fletcher32::checksum(&data);
    assert!(crc & 0xFFFF < MOD_FLETCHER);
    assert!(crc >> 16 < MOD_FLETCHER);
  }
}
