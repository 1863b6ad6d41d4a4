//! Value Codec Module
//!
//! Decodes the order-preserving, self-describing value format used for
//! index columns and key suffixes.
//!
//! ## Value Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Tag (1)  │  Payload (length per tag)   │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! ### Tags
//! - 0x00: NIL       - Payload: empty
//! - 0x01: BYTES     - Payload: memcomparable 8+1 byte groups
//! - 0x02: COMPACT   - Payload: zigzag varint length + raw bytes
//! - 0x03: INT       - Payload: 8 bytes, sign bit flipped
//! - 0x04: UINT      - Payload: 8 bytes
//! - 0x05: FLOAT     - Payload: 8 bytes, order-preserving bit transform
//! - 0x06: DECIMAL   - Payload: precision (1) + fraction (1) + packed digits
//! - 0x07: DURATION  - Payload: 8 bytes, sign-flipped nanoseconds
//! - 0x08: VARINT    - Payload: zigzag LEB128
//! - 0x09: UVARINT   - Payload: LEB128
//!
//! Values carry their own length, so any number of them can be
//! concatenated and decoded back with [`decode_sequence`].

mod binary;
mod datum;
mod decimal;
mod duration;
mod number;
mod sequence;

pub use binary::{decode_bytes, decode_compact_bytes};
pub use datum::{Datum, Kind, Tag};
pub use decimal::{decode_decimal, Decimal};
pub use duration::{decode_duration, Duration};
pub use number::{
    decode_float, decode_int, decode_uint, decode_uvarint, decode_varint, FIXED_WIDTH, SIGN_MASK,
};
pub use sequence::{decode_sequence, ValueSequence};

use crate::error::{DecoderError, Result};

/// Decode one tagged value from the head of `buf`
///
/// Returns the value and the bytes after it.
pub fn decode_one(buf: &[u8]) -> Result<(Datum, &[u8])> {
    let (&tag, payload) = buf
        .split_first()
        .ok_or_else(|| DecoderError::insufficient("value tag", 1, 0))?;

    match Tag::try_from(tag)? {
        Tag::Nil => Ok((Datum::Null, payload)),
        Tag::Bytes => decode_bytes(payload).map(|(v, rest)| (Datum::Bytes(v), rest)),
        Tag::CompactBytes => {
            decode_compact_bytes(payload).map(|(v, rest)| (Datum::Bytes(v), rest))
        }
        Tag::Int => decode_int(payload).map(|(v, rest)| (Datum::Int(v), rest)),
        Tag::Uint => decode_uint(payload).map(|(v, rest)| (Datum::Uint(v), rest)),
        Tag::Float => decode_float(payload).map(|(v, rest)| (Datum::Float(v), rest)),
        Tag::Decimal => decode_decimal(payload).map(|(v, rest)| (Datum::Decimal(v), rest)),
        Tag::Duration => decode_duration(payload).map(|(v, rest)| (Datum::Duration(v), rest)),
        Tag::Varint => decode_varint(payload).map(|(v, rest)| (Datum::Int(v), rest)),
        Tag::Uvarint => decode_uvarint(payload).map(|(v, rest)| (Datum::Uint(v), rest)),
    }
}
