//! Escape decoding for textual keys
//!
//! Raw keys are full of unprintable bytes, so they are usually typed as text
//! with C-style escapes:
//!
//! ```text
//! \a \b \f \n \r \t \v \\ \' \"   named control bytes
//! \xNN                           one byte, two hex digits
//! \NNN                           one byte, three octal digits
//! ```
//!
//! Every other byte is copied through verbatim, so a raw key decodes to
//! itself only when it holds no backslash. A raw `0x5c` byte still starts an
//! escape and has to be written as `\x5c`.

use crate::error::{DecoderError, Result};

/// Escape letters, position-matched with [`NAMED_BYTES`]
const NAMED_ESCAPES: &[u8] = b"abfnrtv\\'\"";

/// Control bytes produced by the named escapes
const NAMED_BYTES: &[u8] = b"\x07\x08\x0c\n\r\t\x0b\\'\"";

/// Decode escape sequences in `text` into the raw bytes they represent
pub fn unescape(text: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let c = text[pos];
        if c != b'\\' {
            out.push(c);
            pos += 1;
            continue;
        }

        let offset = pos;
        let next = *text
            .get(pos + 1)
            .ok_or(DecoderError::TruncatedEscape { offset })?;

        if let Some(idx) = NAMED_ESCAPES.iter().position(|&b| b == next) {
            out.push(NAMED_BYTES[idx]);
            pos += 2;
            continue;
        }

        if next == b'x' {
            let digits = text
                .get(pos + 2..pos + 4)
                .ok_or(DecoderError::TruncatedEscape { offset })?;
            let byte = parse_digits(digits, 16).ok_or_else(|| DecoderError::MalformedHex {
                offset,
                text: String::from_utf8_lossy(digits).into_owned(),
            })?;
            out.push(byte);
        } else {
            // The letter after the backslash is the first octal digit.
            let digits = text
                .get(pos + 1..pos + 4)
                .ok_or(DecoderError::TruncatedEscape { offset })?;
            let byte = parse_digits(digits, 8).ok_or_else(|| DecoderError::MalformedOctal {
                offset,
                text: String::from_utf8_lossy(digits).into_owned(),
            })?;
            out.push(byte);
        }
        pos += 4;
    }

    Ok(out)
}

/// Render raw bytes as escaped text that [`unescape`] maps back to `raw`
///
/// Printable ASCII is kept as-is (backslash doubled), everything else
/// becomes `\xNN`.
pub fn escape(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw {
        match b {
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out
}

/// Parse a run of digits in `radix` into a single byte
///
/// Every input byte must be a digit; values above 0xff are rejected.
fn parse_digits(digits: &[u8], radix: u32) -> Option<u8> {
    digits.iter().try_fold(0u8, |acc, &d| {
        let digit = (d as char).to_digit(radix)?;
        acc.checked_mul(radix as u8)?.checked_add(digit as u8)
    })
}
