use core::num::TryFromIntError;

/// An error from the `badgepng` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePngError {
  /// The declared width and/or height of this image is 0.
  ///
  /// PNG can't represent an image with no pixels, so encoding refuses before
  /// touching the buffer.
  WidthOrHeightZero,

  /// The pixel buffer's length doesn't equal `width * height * 4`.
  ///
  /// This is a contract violation by the caller rather than a runtime
  /// condition, but it's reported as an error instead of a panic so the
  /// HTTP-facing layer above can turn it into a response.
  BufferWrongSize,

  /// A checked math operation failed.
  CheckedMath,
}
impl From<TryFromIntError> for BadgePngError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}
