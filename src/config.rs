//! Configuration for a decode invocation
//!
//! Everything a decode needs travels in one immutable [`DecodeConfig`].

use std::fmt;
use std::str::FromStr;

use crate::error::{DecoderError, Result};

/// How the key argument should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Escape-encoded `t{table_id}_r{row_id}` key
    TableRow,

    /// Escape-encoded `t{table_id}_i{index_id}{values}` key
    TableIndex,

    /// Base64-encoded value buffer
    Value,

    /// Pick one of the above by inspecting the key
    Auto,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::TableRow => "table_row",
            Format::TableIndex => "table_index",
            Format::Value => "value",
            Format::Auto => "auto",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DecoderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table_row" => Ok(Format::TableRow),
            "table_index" => Ok(Format::TableIndex),
            "value" | "index_value" => Ok(Format::Value),
            "auto" => Ok(Format::Auto),
            other => Err(DecoderError::UnknownFormat(format!(
                "{:?} (expected table_row, table_index, value or auto)",
                other
            ))),
        }
    }
}

/// Input of a single decode call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------
    /// Declared format of `key`
    pub format: Format,

    /// Key text as given: escape-encoded for key formats, base64 for values
    pub key: Vec<u8>,

    // -------------------------------------------------------------------------
    // Behaviour
    // -------------------------------------------------------------------------
    /// Fail when a value sequence stops early instead of reporting the prefix
    pub strict: bool,
}

impl DecodeConfig {
    /// Create a new config builder
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for DecodeConfig
#[derive(Debug, Default)]
pub struct DecodeConfigBuilder {
    format: Option<Format>,
    key: Option<Vec<u8>>,
    strict: bool,
}

impl DecodeConfigBuilder {
    /// Set the key format
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the key text
    pub fn key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Surface value sequence failures as errors
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the config; format and a non-empty key are mandatory
    pub fn build(self) -> Result<DecodeConfig> {
        let format = self
            .format
            .ok_or_else(|| DecoderError::Usage("format argument can not be empty".to_string()))?;
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(DecoderError::Usage("no key to decode".to_string())),
        };

        Ok(DecodeConfig {
            format,
            key,
            strict: self.strict,
        })
    }
}
