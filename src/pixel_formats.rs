//! Module for the one pixel format this crate encodes.
//!
//! PNG color type 6 at bit depth 8 stores each pixel as four bytes in the
//! order red, green, blue, alpha. That matches how the badge raster code
//! already lays out its pixels, so "conversion" is just viewing the pixel
//! slice as bytes, which [`cast_slice`](bytemuck::cast_slice) does for free.

use bytemuck::{Pod, Zeroable};

/// An RGBA pixel, 8 bits per channel.
///
/// The field order matches the byte order PNG stores, so a row-major slice of
/// these is exactly the wire layout of an unfiltered image row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct RGBA8888 {
  /// Red
  pub r: u8,
  /// Green
  pub g: u8,
  /// Blue
  pub b: u8,
  /// Alpha
  pub a: u8,
}
