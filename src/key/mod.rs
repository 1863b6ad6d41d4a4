//! Key Layout Module
//!
//! Recognizes the two structural key shapes and extracts their ids.
//!
//! ## Table Row Key (exactly 19 bytes)
//! ```text
//! ┌───────┬───────────────┬────────┬───────────────┐
//! │ 't'   │ table_id (8)  │ '_r'   │  row_id (8)   │
//! └───────┴───────────────┴────────┴───────────────┘
//! ```
//!
//! ## Table Index Key (19 bytes or more)
//! ```text
//! ┌───────┬───────────────┬────────┬───────────────┬──────────────────┐
//! │ 't'   │ table_id (8)  │ '_i'   │ index_id (8)  │  index values... │
//! └───────┴───────────────┴────────┴───────────────┴──────────────────┘
//! ```
//!
//! Ids are sign-flipped big-endian integers; index values use the value
//! codec in [`crate::codec`].

mod layout;

pub use layout::{DecodedKey, Field, KeyLayout, LengthRule, Marker};

use crate::codec::{decode_sequence, ValueSequence};
use crate::error::{DecoderError, Result};

/// `'t'` prefix
pub const TABLE_PREFIX: u8 = b't';

/// Separator before the record/index marker
pub const SEP: u8 = b'_';

/// Record marker
pub const RECORD_MARKER: u8 = b'r';

/// Index marker
pub const INDEX_MARKER: u8 = b'i';

/// Length of an id field
pub const ID_LEN: usize = 8;

/// Length of `'t'` + table id + separator + marker + id
pub const KEY_HEADER_LEN: usize = 1 + ID_LEN + 2 + ID_LEN;

const TABLE_ID: Field = Field {
    name: "table_id",
    offset: 1,
};

const SECOND_ID_OFFSET: usize = 1 + ID_LEN + 2;

pub const TABLE_ROW: KeyLayout = KeyLayout {
    name: "table_row",
    length: LengthRule::Exact(KEY_HEADER_LEN),
    markers: &[
        Marker {
            offset: 0,
            byte: TABLE_PREFIX,
        },
        Marker {
            offset: 1 + ID_LEN,
            byte: SEP,
        },
        Marker {
            offset: 2 + ID_LEN,
            byte: RECORD_MARKER,
        },
    ],
    fields: &[
        TABLE_ID,
        Field {
            name: "row_id",
            offset: SECOND_ID_OFFSET,
        },
    ],
};

pub const TABLE_INDEX: KeyLayout = KeyLayout {
    name: "table_index",
    length: LengthRule::AtLeast(KEY_HEADER_LEN),
    markers: &[
        Marker {
            offset: 0,
            byte: TABLE_PREFIX,
        },
        Marker {
            offset: 1 + ID_LEN,
            byte: SEP,
        },
        Marker {
            offset: 2 + ID_LEN,
            byte: INDEX_MARKER,
        },
    ],
    fields: &[
        TABLE_ID,
        Field {
            name: "index_id",
            offset: SECOND_ID_OFFSET,
        },
    ],
};

/// A decoded table row key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowKey {
    pub table_id: i64,
    pub row_id: i64,
}

/// A decoded table index key
#[derive(Debug, Clone, PartialEq)]
pub struct IndexKey {
    pub table_id: i64,
    pub index_id: i64,
    pub values: ValueSequence,
}

/// Decode a `t{table_id}_r{row_id}` key
pub fn decode_table_row(buf: &[u8]) -> Result<RowKey> {
    let key = TABLE_ROW.decode(buf)?;
    Ok(RowKey {
        table_id: required(&key, "table_id")?,
        row_id: required(&key, "row_id")?,
    })
}

/// Decode a `t{table_id}_i{index_id}{values}` key
pub fn decode_table_index(buf: &[u8]) -> Result<IndexKey> {
    let key = TABLE_INDEX.decode(buf)?;
    Ok(IndexKey {
        table_id: required(&key, "table_id")?,
        index_id: required(&key, "index_id")?,
        values: decode_sequence(key.suffix),
    })
}

fn required(key: &DecodedKey<'_>, name: &'static str) -> Result<i64> {
    key.field(name).ok_or_else(|| DecoderError::MalformedKey {
        layout: key.layout,
        reason: format!("missing field {}", name),
    })
}
