/// The image header data for the one format this crate writes.
///
/// Everything except the dimensions is fixed: bit depth 8, color type 6
/// (truecolor with alpha), compression method 0, filter method 0, no
/// interlacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IHDR {
  /// Width in pixels. Must be non-zero.
  pub width: u32,
  /// Height in pixels. Must be non-zero.
  pub height: u32,
}
impl IHDR {
  /// Serializes this header as the 13-byte `IHDR` chunk payload.
  #[inline]
  #[must_use]
  pub const fn to_payload(self) -> [u8; 13] {
    let w = self.width.to_be_bytes();
    let h = self.height.to_be_bytes();
    [
      w[0], w[1], w[2], w[3], // width
      h[0], h[1], h[2], h[3], // height
      8,    // bit depth
      6,    // color type: RGBA
      0,    // compression method
      0,    // filter method
      0,    // interlace method
    ]
  }

  /// How many bytes one filtered line of this image takes.
  ///
  /// That's the filter type byte plus four bytes per pixel.
  #[inline]
  #[must_use]
  pub const fn bytes_per_filterline(self) -> usize {
    1 + (self.width as usize) * 4
  }
}
