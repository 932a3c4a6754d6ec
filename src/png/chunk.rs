use core::fmt::{Debug, Write};

use alloc::vec::Vec;

use super::{crc32, PNG_SIGNATURE};

/// A four byte chunk type tag.
///
/// The PNG spec assigns meaning to the case bit of each tag byte
/// (ancillary/private/reserved/safe-to-copy), but an encoder that only ever
/// writes the three critical chunks has no reason to interpret any of that,
/// so this type doesn't.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
impl ChunkTy {
  /// Image header.
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image data.
  pub const IDAT: Self = Self(*b"IDAT");
  /// End of the datastream.
  pub const IEND: Self = Self(*b"IEND");
}
impl Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}

/// Frames a payload as a PNG chunk.
///
/// The output is the 4-byte big-endian payload length, the type tag, the
/// payload, and the big-endian CRC-32 computed over the tag and payload
/// together (the length field is *not* covered, per the format).
#[must_use]
pub fn encode_chunk(ty: ChunkTy, payload: &[u8]) -> Vec<u8> {
  debug_assert!(payload.len() <= u32::MAX as usize);
  let mut out = Vec::with_capacity(12 + payload.len());
  out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
  out.extend_from_slice(&ty.0);
  out.extend_from_slice(payload);
  let crc = crc32(ty.0.iter().copied().chain(payload.iter().copied()));
  out.extend_from_slice(&crc.to_be_bytes());
  out
}

/// Builds a complete PNG datastream from the two variable chunk payloads.
///
/// The output is the PNG signature followed by the `IHDR`, `IDAT`, and
/// (empty) `IEND` chunks. That chunk order is mandated by the format and
/// must not be rearranged.
#[must_use]
pub fn assemble_png(ihdr_payload: &[u8], idat_payload: &[u8]) -> Vec<u8> {
  let capacity = PNG_SIGNATURE.len() + (12 + ihdr_payload.len()) + (12 + idat_payload.len()) + 12;
  let mut out = Vec::with_capacity(capacity);
  out.extend_from_slice(&PNG_SIGNATURE);
  out.extend_from_slice(&encode_chunk(ChunkTy::IHDR, ihdr_payload));
  out.extend_from_slice(&encode_chunk(ChunkTy::IDAT, idat_payload));
  out.extend_from_slice(&encode_chunk(ChunkTy::IEND, &[]));
  out
}
