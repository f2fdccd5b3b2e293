//! Non-cryptographic checksum trait.
//!
//! The calling convention shared by every checksum variant: construct,
//! feed bytes, finalize. The one-shot [`checksum`](Checksum::checksum)
//! helper covers the common case of data already in memory.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crckit::{Checksum, Crc32};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32::checksum(b"hello world");
///
/// // Incremental
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-32: 4
  /// - CRC-24: 3
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u32` for register widths up to 32 bits, `u64` for 64 bits.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that resumes from a previously finalized checksum.
  ///
  /// Feeding the remainder of a message to the returned hasher yields the
  /// same value as a single computation over the whole message.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}
