//! Key layout descriptors
//!
//! A layout is data: the length rule, the literal marker bytes and the
//! offsets of the 8-byte id fields. Adding a key shape means adding a
//! constant here.

use crate::codec::{decode_int, FIXED_WIDTH};
use crate::error::{DecoderError, Result};

/// How the total key length is constrained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// The key is exactly this long
    Exact(usize),

    /// The key is at least this long; extra bytes form the suffix
    AtLeast(usize),
}

impl LengthRule {
    /// Length of the fixed part of the key
    pub fn header_len(&self) -> usize {
        match *self {
            LengthRule::Exact(n) | LengthRule::AtLeast(n) => n,
        }
    }

    fn accepts(&self, len: usize) -> bool {
        match *self {
            LengthRule::Exact(n) => len == n,
            LengthRule::AtLeast(n) => len >= n,
        }
    }
}

/// A literal byte expected at a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub offset: usize,
    pub byte: u8,
}

/// A sign-flipped 8-byte integer field at a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
}

/// Structural description of one key shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayout {
    pub name: &'static str,
    pub length: LengthRule,
    pub markers: &'static [Marker],
    pub fields: &'static [Field],
}

/// Result of matching a buffer against a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey<'a> {
    pub layout: &'static str,
    /// Field values in layout order
    pub fields: Vec<(&'static str, i64)>,
    /// Bytes past the fixed header (always empty for exact layouts)
    pub suffix: &'a [u8],
}

impl<'a> DecodedKey<'a> {
    /// Look up a decoded field by name
    pub fn field(&self, name: &str) -> Option<i64> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|&(_, value)| value)
    }
}

impl KeyLayout {
    /// Check length and markers without decoding any field
    pub fn matches(&self, buf: &[u8]) -> bool {
        self.check(buf).is_ok()
    }

    /// Validate `buf` against the layout and decode its id fields
    pub fn decode<'a>(&self, buf: &'a [u8]) -> Result<DecodedKey<'a>> {
        self.check(buf)?;

        let mut fields = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            let raw = buf
                .get(field.offset..field.offset + FIXED_WIDTH)
                .ok_or_else(|| self.malformed(format!("field {} out of range", field.name)))?;
            let (value, _) = decode_int(raw)?;
            fields.push((field.name, value));
        }

        Ok(DecodedKey {
            layout: self.name,
            fields,
            suffix: &buf[self.length.header_len()..],
        })
    }

    fn check(&self, buf: &[u8]) -> Result<()> {
        if !self.length.accepts(buf.len()) {
            let expected = match self.length {
                LengthRule::Exact(n) => format!("exactly {}", n),
                LengthRule::AtLeast(n) => format!("at least {}", n),
            };
            return Err(self.malformed(format!(
                "length {} (expected {} bytes)",
                buf.len(),
                expected
            )));
        }

        for marker in self.markers {
            let found = buf
                .get(marker.offset)
                .copied()
                .ok_or_else(|| self.malformed(format!("marker offset {} out of range", marker.offset)))?;
            if found != marker.byte {
                return Err(self.malformed(format!(
                    "expected {:?} at offset {}, found 0x{:02x}",
                    marker.byte as char, marker.offset, found
                )));
            }
        }

        Ok(())
    }

    fn malformed(&self, reason: String) -> DecoderError {
        DecoderError::MalformedKey {
            layout: self.name,
            reason,
        }
    }
}
