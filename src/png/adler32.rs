//! Adler-32, the checksum a zlib stream carries in its trailer.

/// Largest prime less than 2^16, per RFC 1950.
const ADLER_MODULUS: u32 = 65_521;

/// The Adler-32 of a byte sequence.
///
/// Two running sums: `a` starts at 1 and accumulates bytes, `b` starts at 0
/// and accumulates `a`, both modulo [`ADLER_MODULUS`]. The result packs `b`
/// in the high half and `a` in the low half.
#[inline]
#[must_use]
pub fn adler32(bytes: &[u8]) -> u32 {
  let mut a: u32 = 1;
  let mut b: u32 = 0;
  for byte in bytes.iter().copied() {
    a = (a + u32::from(byte)) % ADLER_MODULUS;
    b = (b + a) % ADLER_MODULUS;
  }
  (b << 16) | a
}
