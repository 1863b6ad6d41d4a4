//! Byte-string codecs
//!
//! ## Memcomparable Groups
//! ```text
//! ┌──────────────────────────────┬──────────┐
//! │        Data (8 bytes)        │Marker (1)│  repeated
//! └──────────────────────────────┴──────────┘
//! ```
//! A marker of `0xFF` means all 8 bytes are data and another group follows.
//! Any other marker is `0xFF - pad` and ends the string: the group holds
//! `8 - pad` data bytes followed by `pad` zero bytes.
//!
//! ## Compact
//! A zigzag varint length followed by that many raw bytes. Not
//! order-preserving, only used in values.

use crate::error::{DecoderError, Result};

use super::number::decode_varint;

/// Data bytes per group
pub const ENC_GROUP_SIZE: usize = 8;

/// Marker of a full, non-final group
pub const ENC_MARKER: u8 = 0xff;

/// Padding byte in a final group
pub const ENC_PAD: u8 = 0x00;

/// Decode a memcomparable byte string
pub fn decode_bytes(buf: &[u8]) -> Result<(Vec<u8>, &[u8])> {
    let mut data = Vec::with_capacity(buf.len());
    let mut rest = buf;

    loop {
        if rest.len() < ENC_GROUP_SIZE + 1 {
            return Err(DecoderError::MalformedBytesEncoding(format!(
                "group needs {} bytes, {} left",
                ENC_GROUP_SIZE + 1,
                rest.len()
            )));
        }

        let (group, tail) = rest.split_at(ENC_GROUP_SIZE + 1);
        rest = tail;

        let marker = group[ENC_GROUP_SIZE];
        let pad_count = usize::from(ENC_MARKER - marker);
        if pad_count > ENC_GROUP_SIZE {
            return Err(DecoderError::MalformedBytesEncoding(format!(
                "invalid marker byte 0x{:02x}",
                marker
            )));
        }

        let real_size = ENC_GROUP_SIZE - pad_count;
        data.extend_from_slice(&group[..real_size]);

        if pad_count == 0 {
            continue;
        }

        if group[real_size..ENC_GROUP_SIZE].iter().any(|&b| b != ENC_PAD) {
            return Err(DecoderError::MalformedBytesEncoding(format!(
                "non-zero padding in final group {:02x?}",
                &group[..ENC_GROUP_SIZE]
            )));
        }

        return Ok((data, rest));
    }
}

/// Decode a length-prefixed byte string
pub fn decode_compact_bytes(buf: &[u8]) -> Result<(Vec<u8>, &[u8])> {
    let (len, rest) = decode_varint(buf)?;
    let len = usize::try_from(len).map_err(|_| {
        DecoderError::MalformedBytesEncoding(format!("negative compact length {}", len))
    })?;

    if rest.len() < len {
        return Err(DecoderError::insufficient("compact bytes", len, rest.len()));
    }

    let (data, rest) = rest.split_at(len);
    Ok((data.to_vec(), rest))
}
