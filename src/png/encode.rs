use alloc::vec::Vec;

use bytemuck::cast_slice;

use crate::{pixel_formats::RGBA8888, BadgePngError};

use super::{assemble_png, filter_none, zlib_pack_stored, IHDR};

/// Encodes a raw RGBA8 pixel buffer as a complete PNG datastream.
///
/// `pixels` is row-major, top line first, four bytes per pixel in RGBA
/// order, and its length must be exactly `width * height * 4` with both
/// dimensions non-zero. The bytes returned are a full PNG file: signature,
/// `IHDR`, `IDAT`, `IEND`.
///
/// This is a pure computation with no shared state, so calling it from many
/// threads at once is fine.
///
/// ## Failure
/// * `WidthOrHeightZero` if either dimension is 0.
/// * `CheckedMath` if `width * height * 4` overflows `usize`.
/// * `BufferWrongSize` if the buffer's length isn't `width * height * 4`.
pub fn png_encode_rgba8(
  pixels: &[u8], width: u32, height: u32,
) -> Result<Vec<u8>, BadgePngError> {
  if width == 0 || height == 0 {
    return Err(BadgePngError::WidthOrHeightZero);
  }
  let expected_len = (width as usize)
    .checked_mul(height as usize)
    .and_then(|px| px.checked_mul(4))
    .ok_or(BadgePngError::CheckedMath)?;
  if pixels.len() != expected_len {
    return Err(BadgePngError::BufferWrongSize);
  }
  let filtered_lines = filter_none(pixels, width, height);
  let idat_payload = zlib_pack_stored(&filtered_lines);
  let ihdr_payload = IHDR { width, height }.to_payload();
  Ok(assemble_png(&ihdr_payload, &idat_payload))
}

/// Encodes a slice of typed pixels as a complete PNG datastream.
///
/// Same contract as [`png_encode_rgba8`], just with the buffer length
/// requirement phrased in pixels (`width * height`) instead of bytes.
pub fn png_encode_pixels(
  pixels: &[RGBA8888], width: u32, height: u32,
) -> Result<Vec<u8>, BadgePngError> {
  png_encode_rgba8(cast_slice(pixels), width, height)
}
