use badgepng::{
  pixel_formats::RGBA8888,
  png::{png_encode_pixels, png_encode_rgba8, PNG_SIGNATURE},
};
use miniz_oxide::inflate::decompress_to_vec_zlib;

struct Chunk {
  ty: [u8; 4],
  data: Vec<u8>,
}

/// Walks the chunks of an encoded PNG, checking every CRC against an
/// independent bit-at-a-time CRC-32 along the way.
fn walk_chunks(png: &[u8]) -> Vec<Chunk> {
  assert_eq!(&png[..8], &PNG_SIGNATURE, "PNG signature");
  let mut rest = &png[8..];
  let mut chunks = Vec::new();
  while !rest.is_empty() {
    let len = u32::from_be_bytes(rest[0..4].try_into().unwrap()) as usize;
    let ty: [u8; 4] = rest[4..8].try_into().unwrap();
    let data = rest[8..(8 + len)].to_vec();
    let declared_crc = u32::from_be_bytes(rest[(8 + len)..(12 + len)].try_into().unwrap());
    let mut c = u32::MAX;
    for byte in rest[4..(8 + len)].iter().copied() {
      c ^= u32::from(byte);
      for _ in 0..8 {
        c = if (c & 1) != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
      }
    }
    assert_eq!(declared_crc, c ^ u32::MAX, "CRC of the {:?} chunk", std::str::from_utf8(&ty));
    chunks.push(Chunk { ty, data });
    rest = &rest[(12 + len)..];
  }
  chunks
}

/// Decodes an encoded PNG back to raw RGBA8 bytes using `miniz_oxide` as the
/// reference inflater, asserting all the structural invariants on the way.
fn decode_pixels(png: &[u8], width: usize, height: usize) -> Vec<u8> {
  let chunks = walk_chunks(png);
  assert!(chunks.len() >= 3);
  //
  let ihdr = &chunks[0];
  assert_eq!(&ihdr.ty, b"IHDR", "first chunk");
  assert_eq!(ihdr.data.len(), 13);
  assert_eq!(u32::from_be_bytes(ihdr.data[0..4].try_into().unwrap()), width as u32);
  assert_eq!(u32::from_be_bytes(ihdr.data[4..8].try_into().unwrap()), height as u32);
  assert_eq!(ihdr.data[8], 8, "bit depth");
  assert_eq!(ihdr.data[9], 6, "color type");
  assert_eq!(&ihdr.data[10..13], &[0, 0, 0]);
  //
  let iend = chunks.last().unwrap();
  assert_eq!(&iend.ty, b"IEND", "last chunk");
  assert!(iend.data.is_empty());
  //
  let idat: Vec<u8> =
    chunks.iter().filter(|c| &c.ty == b"IDAT").flat_map(|c| c.data.iter().copied()).collect();
  assert!(!idat.is_empty());
  let lines = decompress_to_vec_zlib(&idat).unwrap();
  assert_eq!(lines.len(), height * (1 + width * 4));
  let mut pixels = Vec::with_capacity(width * height * 4);
  for line in lines.chunks_exact(1 + width * 4) {
    assert_eq!(line[0], 0, "filter type None on every line");
    pixels.extend_from_slice(&line[1..]);
  }
  pixels
}

#[test]
fn test_2x2_round_trip() {
  // red, green / blue, transparent white
  let pixels = [
    255, 0, 0, 255, //
    0, 255, 0, 255, //
    0, 0, 255, 255, //
    255, 255, 255, 0, //
  ];
  let png = png_encode_rgba8(&pixels, 2, 2).unwrap();
  assert_eq!(decode_pixels(&png, 2, 2), pixels);
}

#[test]
fn test_1x1_transparent_black_round_trip() {
  let pixels = [0, 0, 0, 0];
  let png = png_encode_rgba8(&pixels, 1, 1).unwrap();
  assert_eq!(decode_pixels(&png, 1, 1), pixels);
}

#[test]
fn test_typed_pixel_round_trip() {
  let pixels = vec![RGBA8888 { r: 7, g: 77, b: 177, a: 200 }; 9];
  let png = png_encode_pixels(&pixels, 3, 3).unwrap();
  let raw: Vec<u8> = pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();
  assert_eq!(decode_pixels(&png, 3, 3), raw);
}

#[test]
fn test_random_round_trip_crossing_stored_block_boundary() {
  // 200x100 RGBA is 80,000 pixel bytes, so the filtered lines exceed one
  // stored block's 65,535-byte limit and the zlib layer has to split.
  let (width, height) = (200_usize, 100_usize);
  let pixels = super::rand_bytes(width * height * 4);
  let png = png_encode_rgba8(&pixels, width as u32, height as u32).unwrap();
  assert_eq!(decode_pixels(&png, width, height), pixels);
}

#[test]
fn test_random_round_trip_many_blocks() {
  let (width, height) = (300_usize, 200_usize);
  let pixels = super::rand_bytes(width * height * 4);
  let png = png_encode_rgba8(&pixels, width as u32, height as u32).unwrap();
  assert_eq!(decode_pixels(&png, width, height), pixels);
}
