//! Holds all the tools for encoding PNG data.
//!
//! ## Automated PNG Encoding
//! If you just want bytes, call [`png_encode_rgba8`] with your pixel buffer
//! and dimensions. It allocates the output for you, and so it requires that
//! the `alloc` feature be enabled.
//!
//! ## Encoding a PNG Yourself
//! The pipeline stages are public, so you can also run them one at a time.
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! This crate emits the three chunk types a PNG must have, in the order the
//! format mandates:
//! * **Header** (`IHDR`) - The image's dimensions and pixel format. This
//!   crate always declares bit depth 8 and color type 6 (truecolor with
//!   alpha), with no interlacing.
//! * **Image Data** (`IDAT`) - The pixel data as a single Zlib datastream.
//! * **End** (`IEND`) - The last chunk, which lets a reader know the data
//!   wasn't truncated accidentally.
//!
//! Before compression, PNG image data isn't raw pixels: each line of pixels
//! gets a leading byte that says which filter was applied to that line. This
//! crate always uses filter type 0 ("None"), so [`filter_none`] only reshapes
//! the buffer, it never changes a pixel byte.
//!
//! The Zlib layer here is equally minimal: [`zlib_pack_stored`] wraps the
//! filtered lines in "stored" (non-compressed) DEFLATE blocks. A stored block
//! carries at most 65,535 literal bytes, so long inputs get split, and only
//! the last block marks itself final. Any zlib-compatible inflater reads the
//! stream back to the exact input bytes.
//!
//! Every stage is a pure function returning a fresh buffer, composed by plain
//! concatenation in [`png_encode_rgba8`]. Nothing is retained between calls,
//! so concurrent encodes don't interact at all.

mod adler32;
pub use adler32::*;

mod crc32;
pub use crc32::*;

#[cfg(feature = "alloc")]
mod chunk;
#[cfg(feature = "alloc")]
pub use chunk::*;

#[cfg(feature = "alloc")]
mod filter;
#[cfg(feature = "alloc")]
pub use filter::*;

#[cfg(feature = "alloc")]
mod zlib;
#[cfg(feature = "alloc")]
pub use zlib::*;

#[cfg(feature = "alloc")]
mod encode;
#[cfg(feature = "alloc")]
pub use encode::*;

mod ihdr;
pub use ihdr::*;


/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
