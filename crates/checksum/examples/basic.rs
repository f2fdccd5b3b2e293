//! Basic checksum usage: presets, streaming, and the generic engine.
//!
//! Run with: `cargo run --example basic -p crckit`

use crckit::{
  crc64_direct, Adler32, Checksum, Crc, Crc24OpenPgp, Crc30Cdma, Crc32, Crc32c, Crc64Ecma182,
  CrcParams, Fletcher32,
};

fn main() -> Result<(), crckit::CrcError> {
  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  generic_engine_examples()?;
  direct_crc64_example();

  Ok(())
}

/// One-shot computation through the named preset types.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG
  let crc32 = Crc32::checksum(data);
  println!("CRC-32:           0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-32C (Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  let crc32c = Crc32c::checksum(data);
  println!("CRC-32C:          0x{crc32c:08X}");
  assert_eq!(crc32c, 0xE306_9283);

  // CRC-30 (CDMA) - a register that is not byte-aligned
  let crc30 = Crc30Cdma::checksum(data);
  println!("CRC-30 (CDMA):    0x{crc30:08X}");
  assert_eq!(crc30, 0x04C3_4ABF);

  // CRC-24 (OpenPGP) - RFC 4880
  let crc24 = Crc24OpenPgp::checksum(data);
  println!("CRC-24 (OpenPGP): 0x{crc24:06X}");
  assert_eq!(crc24, 0x21_CF02);

  // CRC-64 (ECMA-182) - XZ Utils, 7-Zip
  let crc64 = Crc64Ecma182::checksum(data);
  println!("CRC-64 (ECMA):    0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  // Adler-32 and Fletcher-32
  println!("Adler-32:         0x{:08X}", Adler32::checksum(data));
  println!("Fletcher-32:      0x{:08X}", Fletcher32::checksum(data));

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let data = b"123456789";
  let mut hasher = Crc32::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let streamed = hasher.finalize();
  println!("streamed CRC-32:  0x{streamed:08X}");
  assert_eq!(streamed, Crc32::checksum(data));

  // Resume from a finalized value
  let partial = Crc32::checksum(b"1234");
  let mut resumed = Crc32::resume(partial);
  resumed.update(b"56789");
  assert_eq!(resumed.finalize(), streamed);

  println!();
}

/// Any width from 8 to 64 bits through the parameter-driven engine.
fn generic_engine_examples() -> Result<(), crckit::CrcError> {
  println!("--- Generic Engine ---\n");

  let data = b"123456789";

  // A preset bundle through the generic path
  let crc = Crc::checksum(CrcParams::CRC32, data)?;
  println!("generic CRC-32:   0x{crc:08X}");

  // An ad-hoc variant: CRC-16/ARC
  let arc = CrcParams {
    width: 16,
    polynomial: 0x8005,
    initial: 0,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0,
  };
  let crc16 = Crc::checksum(arc, data)?;
  println!("CRC-16/ARC:       0x{crc16:04X}");
  assert_eq!(crc16, 0xBB3D);

  println!();
  Ok(())
}

/// Table-less CRC-64 with every knob caller-controlled.
fn direct_crc64_example() {
  println!("--- Direct CRC-64 ---\n");

  let data = b"123456789";
  let crc = crc64_direct(0x42F0_E1EB_A9EA_3693, !0, !0, true, data);
  println!("direct CRC-64:    0x{crc:016X}");
  assert_eq!(crc, Crc64Ecma182::checksum(data));
}
