//! Core checksum traits for crckit.
//!
//! This crate provides the foundational trait that all crckit checksum
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Non-cryptographic checksums | CRC-32 presets, Adler-32, Fletcher-32 |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;

pub use checksum::Checksum;
