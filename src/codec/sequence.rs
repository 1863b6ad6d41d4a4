//! Value sequences
//!
//! Values are self-delimiting, so a buffer of concatenated values is
//! decoded one at a time until it is empty. A value that fails to decode
//! ends the sequence; everything before it is kept.

use crate::error::{DecoderError, Result};

use super::datum::Datum;
use super::decode_one;

/// Values decoded from one buffer, plus why decoding stopped early (if it did)
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSequence {
    values: Vec<Datum>,
    error: Option<DecoderError>,
    unconsumed: usize,
}

impl ValueSequence {
    pub fn values(&self) -> &[Datum] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Datum> {
        self.values.iter()
    }

    /// The failure that ended decoding, if the buffer was not fully consumed
    pub fn error(&self) -> Option<&DecoderError> {
        self.error.as_ref()
    }

    /// Bytes left undecoded when the sequence stopped
    pub fn unconsumed(&self) -> usize {
        self.unconsumed
    }

    /// True when every byte of the buffer was decoded
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Surface the stopping failure as an error instead of a short sequence
    pub fn into_strict(self) -> Result<Vec<Datum>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.values),
        }
    }

    pub fn into_values(self) -> Vec<Datum> {
        self.values
    }
}

impl<'a> IntoIterator for &'a ValueSequence {
    type Item = &'a Datum;
    type IntoIter = std::slice::Iter<'a, Datum>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Decode values from `buf` until it is exhausted or a value fails to decode
pub fn decode_sequence(buf: &[u8]) -> ValueSequence {
    let mut values = Vec::new();
    let mut rest = buf;

    while !rest.is_empty() {
        match decode_one(rest) {
            Ok((datum, remain)) => {
                tracing::trace!("Decoded {} value: {}", datum.kind(), datum);
                values.push(datum);
                rest = remain;
            }
            Err(e) => {
                tracing::warn!(
                    "Value sequence stopped after {} values with {} bytes left: {}",
                    values.len(),
                    rest.len(),
                    e
                );
                return ValueSequence {
                    values,
                    error: Some(e),
                    unconsumed: rest.len(),
                };
            }
        }
    }

    ValueSequence {
        values,
        error: None,
        unconsumed: 0,
    }
}
