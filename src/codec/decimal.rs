//! Fixed-point decimal codec
//!
//! ## Layout
//! ```text
//! ┌───────────┬──────────┬──────────────────────────────────────┐
//! │ Prec (1)  │ Frac (1) │ Binary digits (size from prec/frac)  │
//! └───────────┴──────────┴──────────────────────────────────────┘
//! ```
//!
//! Digits are packed nine per 4-byte big-endian word on both sides of the
//! decimal point. Leftover digits (fewer than nine) take 1-4 bytes, placed
//! before the integer words and after the fraction words. The top bit of
//! the first byte is flipped so positive values sort above negative ones,
//! and negative values are stored with every byte inverted.

use std::fmt;

use bytes::Buf;

use crate::error::{DecoderError, Result};

const DIGITS_PER_WORD: usize = 9;
const WORD_SIZE: usize = 4;

/// Bytes needed to hold a partial word of `n` digits
const DIG2BYTES: [usize; DIGITS_PER_WORD + 1] = [0, 1, 1, 2, 2, 3, 3, 4, 4, 4];

const POW10: [u64; DIGITS_PER_WORD + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Largest precision accepted in the header
pub const MAX_PRECISION: usize = 65;

/// Largest fraction length accepted in the header
pub const MAX_FRACTION: usize = 30;

/// A decoded decimal, kept as digit strings so no precision is lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Decimal {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits with leading zeros removed ("0" when there are none)
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fraction digits, exactly as many as the encoded scale
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.bytes().all(|d| d == b'0')
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

/// Number of binary digit bytes for the given precision and fraction
pub fn bin_size(precision: usize, frac: usize) -> usize {
    let digits_int = precision - frac;
    let words_int = digits_int / DIGITS_PER_WORD;
    let words_frac = frac / DIGITS_PER_WORD;
    let leading = digits_int % DIGITS_PER_WORD;
    let trailing = frac % DIGITS_PER_WORD;
    words_int * WORD_SIZE + DIG2BYTES[leading] + words_frac * WORD_SIZE + DIG2BYTES[trailing]
}

/// Decode a decimal including its precision/fraction header
pub fn decode_decimal(buf: &[u8]) -> Result<(Decimal, &[u8])> {
    if buf.len() < 2 {
        return Err(DecoderError::insufficient("decimal header", 2, buf.len()));
    }

    let precision = usize::from(buf[0]);
    let frac = usize::from(buf[1]);
    if precision == 0 || precision > MAX_PRECISION || frac > MAX_FRACTION || frac > precision {
        return Err(DecoderError::MalformedDecimal(format!(
            "invalid precision {} / fraction {}",
            precision, frac
        )));
    }

    let size = bin_size(precision, frac);
    let body = &buf[2..];
    if body.len() < size {
        return Err(DecoderError::insufficient("decimal", size, body.len()));
    }
    let (bin, rest) = body.split_at(size);

    // Positive values carry the flipped sign bit.
    let negative = bin[0] & 0x80 == 0;
    let mask = if negative { 0xff } else { 0x00 };
    let mut digits: Vec<u8> = bin.iter().map(|b| b ^ mask).collect();
    digits[0] ^= 0x80;

    let digits_int = precision - frac;
    let leading = digits_int % DIGITS_PER_WORD;
    let trailing = frac % DIGITS_PER_WORD;

    let mut cursor = &digits[..];
    let mut integer = String::with_capacity(digits_int);
    if leading > 0 {
        let word = read_word(&mut cursor, DIG2BYTES[leading], leading)?;
        integer.push_str(&word.to_string());
    }
    for _ in 0..digits_int / DIGITS_PER_WORD {
        let word = read_word(&mut cursor, WORD_SIZE, DIGITS_PER_WORD)?;
        integer.push_str(&format!("{:09}", word));
    }

    let mut fraction = String::with_capacity(frac);
    for _ in 0..frac / DIGITS_PER_WORD {
        let word = read_word(&mut cursor, WORD_SIZE, DIGITS_PER_WORD)?;
        fraction.push_str(&format!("{:09}", word));
    }
    if trailing > 0 {
        let word = read_word(&mut cursor, DIG2BYTES[trailing], trailing)?;
        fraction.push_str(&format!("{:0width$}", word, width = trailing));
    }

    let trimmed = integer.trim_start_matches('0');
    let integer = if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    };

    Ok((
        Decimal {
            negative,
            integer,
            fraction,
        },
        rest,
    ))
}

/// Read one big-endian digit word of `size` bytes holding at most `digits` digits
fn read_word(cursor: &mut &[u8], size: usize, digits: usize) -> Result<u64> {
    if cursor.remaining() < size {
        return Err(DecoderError::insufficient("decimal word", size, cursor.remaining()));
    }
    let word = cursor.get_uint(size);
    if word >= POW10[digits] {
        return Err(DecoderError::MalformedDecimal(format!(
            "word {} does not fit in {} digits",
            word, digits
        )));
    }
    Ok(word)
}
