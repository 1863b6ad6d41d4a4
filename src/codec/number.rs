//! Integer and float codecs
//!
//! Fixed-width values are 8 bytes big-endian. Signed values have their sign
//! bit flipped so negative numbers sort before positive ones under unsigned
//! byte comparison. Varints are LEB128, signed ones zigzag-mapped first.

use bytes::Buf;

use crate::error::{DecoderError, Result};

/// Bit flipped on signed integers and non-negative floats
pub const SIGN_MASK: u64 = 1 << 63;

/// Width of every fixed-width numeric field
pub const FIXED_WIDTH: usize = 8;

/// Longest LEB128 encoding of a 64-bit value
pub const MAX_VARINT_LEN: usize = 10;

/// Decode an 8-byte big-endian unsigned integer
pub fn decode_uint(buf: &[u8]) -> Result<(u64, &[u8])> {
    let mut cursor = buf;
    if cursor.remaining() < FIXED_WIDTH {
        return Err(DecoderError::insufficient(
            "fixed-width integer",
            FIXED_WIDTH,
            cursor.remaining(),
        ));
    }
    let value = cursor.get_u64();
    Ok((value, cursor))
}

/// Decode an 8-byte sign-flipped integer
pub fn decode_int(buf: &[u8]) -> Result<(i64, &[u8])> {
    let (raw, rest) = decode_uint(buf)?;
    Ok(((raw ^ SIGN_MASK) as i64, rest))
}

/// Decode an 8-byte order-preserving float
///
/// Non-negative floats were stored with the sign bit set; negative floats
/// were stored with every bit inverted.
pub fn decode_float(buf: &[u8]) -> Result<(f64, &[u8])> {
    let (raw, rest) = decode_uint(buf)?;
    let bits = if raw & SIGN_MASK != 0 {
        raw & !SIGN_MASK
    } else {
        !raw
    };
    Ok((f64::from_bits(bits), rest))
}

/// Decode an unsigned LEB128 varint
pub fn decode_uvarint(buf: &[u8]) -> Result<(u64, &[u8])> {
    let mut value: u64 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_VARINT_LEN {
            return Err(DecoderError::MalformedVarint("longer than 10 bytes"));
        }
        // The tenth byte may only carry the single remaining bit.
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(DecoderError::MalformedVarint("overflows 64 bits"));
        }

        value |= u64::from(byte & 0x7f) << (7 * i);

        if byte & 0x80 == 0 {
            return Ok((value, &buf[i + 1..]));
        }
    }

    Err(DecoderError::insufficient("varint", buf.len() + 1, buf.len()))
}

/// Decode a zigzag-mapped signed LEB128 varint
pub fn decode_varint(buf: &[u8]) -> Result<(i64, &[u8])> {
    let (raw, rest) = decode_uvarint(buf)?;
    Ok((zigzag_decode(raw), rest))
}

#[inline]
fn zigzag_decode(raw: u64) -> i64 {
    let value = (raw >> 1) as i64;
    if raw & 1 != 0 {
        !value
    } else {
        value
    }
}
