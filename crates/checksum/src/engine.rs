//! Parameter-driven CRC engine.
//!
//! [`Crc`] runs any [`CrcParams`] bundle through one table-driven pipeline:
//! resolve the table once at construction, stream bytes through
//! [`CrcTable::update`], and fold reflection and the final XOR in at
//! finalization. The named preset types are thin wrappers over the same
//! pipeline with their tables embedded at compile time.

use crate::{
  common::{
    reflect::{reflect_bits, width_mask},
    tables::CrcTable,
  },
  error::CrcError,
  params::CrcParams,
};

/// Starting register state for a parameter bundle.
///
/// Reflected parameters keep the register in bit-reversed form, so the
/// initial value is reflected on the way in. Normal parameters mask it.
pub(crate) const fn initial_state(params: &CrcParams) -> u64 {
  if params.reflect_in {
    reflect_bits(params.initial, params.width)
  } else {
    params.initial & width_mask(params.width)
  }
}

/// Fold a raw register state into the final CRC value.
///
/// The register is already in input bit order; a reflection is only needed
/// when the output order differs from it. The final XOR and mask always
/// apply.
pub(crate) const fn finalize_state(state: u64, params: &CrcParams) -> u64 {
  let reg = if params.reflect_out != params.reflect_in {
    reflect_bits(state, params.width)
  } else {
    state
  };
  (reg ^ params.xor_out) & width_mask(params.width)
}

/// A streaming CRC computation over arbitrary parameters.
///
/// Construction validates the parameters and builds the lookup table; after
/// that, [`update`](Self::update) is the only per-byte cost. The same
/// instance can be [`reset`](Self::reset) and reused; finalization is
/// non-destructive, so interleaving [`finalize`](Self::finalize) and
/// [`update`](Self::update) calls observes a running checksum.
///
/// ```
/// use crckit::{Crc, CrcParams};
///
/// let mut crc = Crc::new(CrcParams::CRC32)?;
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// # Ok::<(), crckit::CrcError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Crc {
  params: CrcParams,
  table: CrcTable,
  state: u64,
}

impl Crc {
  /// Create an engine for `params`.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] if `params.width` is outside
  /// `8..=64`.
  pub fn new(params: CrcParams) -> Result<Self, CrcError> {
    params.validate()?;
    Ok(Self {
      state: initial_state(&params),
      table: CrcTable::for_params(&params),
      params,
    })
  }

  /// Create an engine whose register starts from `initial` instead of
  /// `params.initial`.
  ///
  /// `initial` is interpreted exactly like `params.initial` would be
  /// (reflected for reflected parameters, masked otherwise). Combined with
  /// [`state`](Self::state) this resumes an interrupted computation.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] if `params.width` is outside
  /// `8..=64`.
  pub fn with_initial(params: CrcParams, initial: u64) -> Result<Self, CrcError> {
    let params = CrcParams { initial, ..params };
    Self::new(params)
  }

  /// Fold `data` into the running computation.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = self.table.update(self.state, data);
  }

  /// The CRC of everything fed so far.
  ///
  /// Non-destructive: the internal register is untouched and more data may
  /// follow.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    finalize_state(self.state, &self.params)
  }

  /// Restart the computation from the configured initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.state = initial_state(&self.params);
  }

  /// The raw internal register, before output reflection and final XOR.
  ///
  /// Reflected parameters hold the register in bit-reversed form. Feed this
  /// back through [`with_initial`](Self::with_initial) only for parameters
  /// where `reflect_in == reflect_out` holds or after undoing the output
  /// transform yourself.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u64 {
    self.state
  }

  /// The parameters this engine was built with.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The resolved lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }

  /// One-shot CRC of `data` under `params`.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] if `params.width` is outside
  /// `8..=64`.
  pub fn checksum(params: CrcParams, data: &[u8]) -> Result<u64, CrcError> {
    let mut crc = Self::new(params)?;
    crc.update(data);
    Ok(crc.finalize())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
