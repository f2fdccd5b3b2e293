//! Internal macros for CRC variant generation.
//!
//! The named preset types (e.g., `Crc32`, `Crc24OpenPgp`, `Crc64Ecma182`)
//! share identical structure and differ only in their parameter bundles and
//! output integer type. This macro eliminates that boilerplate.

/// Generate a CRC preset type with its trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: u64`
/// - A `PARAMS` constant exposing the parameter bundle
/// - A compile-time embedded lookup table
/// - `resume()` for continuing from a previously finalized CRC
/// - `Checksum` and `Default` trait implementations
///
/// # Arguments
///
/// - `$name`: the type name (e.g., `Crc32c`)
/// - `$output`: the finalized integer type (`u32` or `u64`)
/// - `$output_size`: the checksum size in bytes
/// - `$params`: the `CrcParams` bundle constant
macro_rules! define_crc {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      output: $output:ty,
      output_size: $output_size:expr,
      params: $params:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      state: u64,
    }

    impl $name {
      /// The parameter bundle this type is fixed to.
      pub const PARAMS: $crate::CrcParams = $params;

      const INIT: u64 = $crate::engine::initial_state(&Self::PARAMS);

      /// Lookup table, generated at compile time and embedded in the binary.
      fn table_ref() -> &'static $crate::CrcTable {
        static TABLE: $crate::CrcTable = $crate::CrcTable::for_params(&$name::PARAMS);
        &TABLE
      }

      /// Create a hasher to resume from a previously finalized CRC value.
      ///
      /// Undoes the final XOR, which recovers the raw register because this
      /// preset's input and output bit orders agree.
      #[inline]
      #[must_use]
      #[allow(clippy::unnecessary_cast)]
      pub const fn resume(crc: $output) -> Self {
        Self {
          state: (crc as u64 ^ Self::PARAMS.xor_out) & Self::PARAMS.mask(),
        }
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = $output_size;
      type Output = $output;

      #[inline]
      fn new() -> Self {
        Self { state: Self::INIT }
      }

      #[inline]
      fn with_initial(initial: $output) -> Self {
        Self::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = Self::table_ref().update(self.state, data);
      }

      #[inline]
      #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
      fn finalize(&self) -> $output {
        $crate::engine::finalize_state(self.state, &Self::PARAMS) as $output
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::INIT;
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }
  };
}
