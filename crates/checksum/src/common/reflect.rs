//! Bit-reflection and width-masking helpers.
//!
//! "Reflected" means bit-reversed over a given width: bit 0 swaps with bit
//! `width-1`, bit 1 with bit `width-2`, and so on. Reflection converts a
//! polynomial (or register) between its MSB-first and LSB-first forms.

/// Mask covering the low `width` bits.
#[inline]
#[must_use]
pub(crate) const fn width_mask(width: u8) -> u64 {
  if width >= 64 {
    u64::MAX
  } else {
    (1u64 << width) - 1
  }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// Bits at or above `width` are discarded before reversing.
#[inline]
#[must_use]
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  (value & width_mask(width)).reverse_bits() >> (64 - width as u32)
}
