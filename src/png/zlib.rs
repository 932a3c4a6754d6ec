//! A minimal zlib container built from stored DEFLATE blocks only.
//!
//! "Stored" blocks carry their bytes literally, so nothing here compresses
//! anything. The output is still a fully valid zlib datastream that any
//! standard inflater reads back to the exact input. That's the whole point:
//! the encoder stays a page of code and the decode side needs nothing
//! special.

use alloc::vec::Vec;

use bitfrob::u8_with_bit;

use super::adler32;

/// The most literal bytes one stored DEFLATE block can carry.
///
/// The block header's `LEN` field is 16 bits, so longer input has to split
/// across blocks.
pub const MAX_STORED_BLOCK_LEN: usize = 65_535;

/// zlib CMF/FLG pair: deflate with a 32k window, no preset dictionary.
///
/// The compression level bits in FLG are advisory and meaningless for stored
/// blocks.
const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

/// Wraps `raw` in a zlib stream of stored (non-compressed) DEFLATE blocks.
///
/// The stream is the 2-byte zlib header, then one stored block per 65,535
/// bytes of input (in input order, final bit set on the last block only),
/// then the big-endian Adler-32 of the whole uncompressed input.
///
/// Empty input still produces a valid stream: one zero-length final block
/// between header and trailer, which inflaters treat as an empty payload.
#[must_use]
pub fn zlib_pack_stored(raw: &[u8]) -> Vec<u8> {
  let block_count = (raw.len() / MAX_STORED_BLOCK_LEN) + 1;
  let mut out = Vec::with_capacity(2 + raw.len() + (5 * block_count) + 4);
  out.extend_from_slice(&ZLIB_HEADER);
  let mut start = 0;
  loop {
    let end = raw.len().min(start + MAX_STORED_BLOCK_LEN);
    let block = &raw[start..end];
    let is_final_block = end == raw.len();
    debug_assert!(block.len() <= MAX_STORED_BLOCK_LEN);
    // Stored block header: bit 0 is BFINAL, bits 1 and 2 are BTYPE (0b00 for
    // stored), the rest of the byte is unused. Then LEN and its one's
    // complement NLEN, both little-endian.
    let len = block.len() as u16;
    out.push(u8_with_bit(0, 0, is_final_block));
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(block);
    if is_final_block {
      break;
    }
    start = end;
  }
  out.extend_from_slice(&adler32(raw).to_be_bytes());
  out
}
