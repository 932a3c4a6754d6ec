//! From the PNG spec:
//!
//! > Filters are applied to **bytes**, not to pixels, regardless of the bit
//! > depth or color type of the image.
//!
//! This crate only ever applies filter type 0 ("None"), so the filtering
//! stage is purely structural: it turns a flat pixel buffer into the
//! line-oriented layout the Zlib layer expects.

use alloc::vec::Vec;

/// Reshapes raw RGBA8 pixel bytes into unfiltered PNG lines.
///
/// Each of the `height` lines (top line first, matching both the input's row
/// order and PNG's storage order) is prefixed with the filter type byte `0`
/// and then copied unmodified.
///
/// The caller must uphold `pixels.len() == width * height * 4` with both
/// dimensions non-zero; [`png_encode_rgba8`](super::png_encode_rgba8) checks
/// this before calling in here.
#[must_use]
pub fn filter_none(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
  let bytes_per_line = (width as usize) * 4;
  debug_assert!(bytes_per_line > 0);
  debug_assert_eq!(pixels.len(), bytes_per_line * (height as usize));
  let mut out = Vec::with_capacity((height as usize) * (1 + bytes_per_line));
  for line in pixels.chunks_exact(bytes_per_line) {
    out.push(0); // filter type: None
    out.extend_from_slice(line);
  }
  out
}
