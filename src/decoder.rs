//! Decoder Module
//!
//! Ties the layers together for one invocation.
//!
//! ## Flow
//! ```text
//! table_row / table_index:  key text ─▶ unescape ─▶ key layout ─▶ value sequence
//! value:                    key text ─▶ base64   ─────────────────▶ value sequence
//! ```
//!
//! Escape, layout and base64 failures abort with no report. Value sequence
//! failures only shorten the report unless the config is strict.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::codec::{decode_sequence, ValueSequence};
use crate::config::{DecodeConfig, Format};
use crate::error::{DecoderError, Result};
use crate::escape::{escape, unescape};
use crate::key::{decode_table_index, decode_table_row, TABLE_INDEX, TABLE_ROW};

/// Everything decoded from one key
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Format that was decoded; never [`Format::Auto`]
    pub format: Format,

    /// Id fields in key order
    pub fields: Vec<(&'static str, i64)>,

    /// Index values, absent for row keys
    pub values: Option<ValueSequence>,
}

impl Report {
    pub fn field(&self, name: &str) -> Option<i64> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|&(_, value)| value)
    }

    pub fn values(&self) -> Option<&ValueSequence> {
        self.values.as_ref()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "format: {}", self.format)?;
        for (name, value) in &self.fields {
            writeln!(f, "{}: {}", name, value)?;
        }
        if let Some(values) = &self.values {
            for (i, datum) in values.iter().enumerate() {
                writeln!(
                    f,
                    "index_value[{}]: {{type: {}, value: {}}}",
                    i,
                    datum.kind(),
                    datum
                )?;
            }
        }
        Ok(())
    }
}

/// Decode the key described by `config`
pub fn decode(config: &DecodeConfig) -> Result<Report> {
    tracing::debug!(
        "Decoding {} key ({} bytes): {}",
        config.format,
        config.key.len(),
        escape(&config.key)
    );

    let format = match config.format {
        Format::Auto => {
            let detected = detect_format(&config.key)?;
            tracing::debug!("Detected key format: {}", detected);
            detected
        }
        declared => declared,
    };

    let report = match format {
        Format::TableRow => {
            let raw = unescape(&config.key)?;
            let key = decode_table_row(&raw)?;
            Report {
                format,
                fields: vec![("table_id", key.table_id), ("row_id", key.row_id)],
                values: None,
            }
        }
        Format::TableIndex => {
            let raw = unescape(&config.key)?;
            let key = decode_table_index(&raw)?;
            Report {
                format,
                fields: vec![("table_id", key.table_id), ("index_id", key.index_id)],
                values: Some(key.values),
            }
        }
        Format::Value => {
            let raw = STANDARD.decode(&config.key)?;
            Report {
                format,
                fields: Vec::new(),
                values: Some(decode_sequence(&raw)),
            }
        }
        Format::Auto => {
            return Err(DecoderError::UnknownFormat(
                "auto detection did not resolve a format".to_string(),
            ))
        }
    };

    if config.strict {
        if let Some(e) = report.values.as_ref().and_then(ValueSequence::error) {
            return Err(e.clone());
        }
    }

    Ok(report)
}

/// Guess the format of `key`: row key, then index key, then base64 value
pub fn detect_format(key: &[u8]) -> Result<Format> {
    if let Ok(raw) = unescape(key) {
        if TABLE_ROW.matches(&raw) {
            return Ok(Format::TableRow);
        }
        if TABLE_INDEX.matches(&raw) {
            return Ok(Format::TableIndex);
        }
    }

    if STANDARD.decode(key).is_ok() {
        return Ok(Format::Value);
    }

    Err(DecoderError::UnknownFormat(format!(
        "could not detect the format of {}",
        escape(key)
    )))
}
