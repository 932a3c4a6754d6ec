#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for encoding image data as PNG.
//!
//! Specifically, this encodes 8-bit RGBA pixel data (the only pixel format a
//! QR/badge raster ever produces) into a complete PNG datastream. The output
//! trades file size for simplicity: pixel lines are stored with filtering
//! disabled and the Zlib layer uses only "stored" (non-compressed) blocks, so
//! the bytes that come out are bigger than what a general-purpose encoder
//! would produce, but every conformant PNG reader accepts them and gets the
//! exact input pixels back.
//!
//! The usual entry point is [`png_encode_rgba8`](png::png_encode_rgba8) (or
//! [`png_encode_pixels`](png::png_encode_pixels) if you're holding typed
//! pixels). The individual pipeline stages are public too, see the [`png`]
//! module docs.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod png;
