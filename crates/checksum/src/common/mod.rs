//! Shared building blocks: bit reflection, table generation, and the
//! bitwise reference implementations.

pub(crate) mod reference;
pub(crate) mod reflect;
pub(crate) mod tables;
