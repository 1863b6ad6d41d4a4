//! Value tags and decoded values

use std::fmt;

use crate::error::DecoderError;

use super::decimal::Decimal;
use super::duration::Duration;

/// Leading byte of every encoded value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    Nil = 0x00,
    Bytes = 0x01,
    CompactBytes = 0x02,
    Int = 0x03,
    Uint = 0x04,
    Float = 0x05,
    Decimal = 0x06,
    Duration = 0x07,
    Varint = 0x08,
    Uvarint = 0x09,
}

impl TryFrom<u8> for Tag {
    type Error = DecoderError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0x00 => Ok(Tag::Nil),
            0x01 => Ok(Tag::Bytes),
            0x02 => Ok(Tag::CompactBytes),
            0x03 => Ok(Tag::Int),
            0x04 => Ok(Tag::Uint),
            0x05 => Ok(Tag::Float),
            0x06 => Ok(Tag::Decimal),
            0x07 => Ok(Tag::Duration),
            0x08 => Ok(Tag::Varint),
            0x09 => Ok(Tag::Uvarint),
            _ => Err(DecoderError::UnknownTag { tag }),
        }
    }
}

/// Kind of a decoded value, independent of which tag carried it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Int64,
    Uint64,
    Float64,
    Bytes,
    Decimal,
    Duration,
}

impl Kind {
    /// SQL-facing type name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Int64 => "bigint",
            Kind::Uint64 => "unsigned bigint",
            Kind::Float64 => "double",
            Kind::Bytes => "bytes",
            Kind::Decimal => "decimal",
            Kind::Duration => "time",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decoded value
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Int(i64),
    Uint(u64),
    Float(f64),
    Bytes(Vec<u8>),
    Decimal(Decimal),
    Duration(Duration),
}

impl Datum {
    pub fn kind(&self) -> Kind {
        match self {
            Datum::Null => Kind::Null,
            Datum::Int(_) => Kind::Int64,
            Datum::Uint(_) => Kind::Uint64,
            Datum::Float(_) => Kind::Float64,
            Datum::Bytes(_) => Kind::Bytes,
            Datum::Decimal(_) => Kind::Decimal,
            Datum::Duration(_) => Kind::Duration,
        }
    }
}

/// Display text of the value; null renders as the empty string
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Null => Ok(()),
            Datum::Int(v) => write!(f, "{}", v),
            Datum::Uint(v) => write!(f, "{}", v),
            Datum::Float(v) if v.is_nan() => f.write_str("NaN"),
            Datum::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "+Inf" } else { "-Inf" })
            }
            Datum::Float(v) => write!(f, "{}", v),
            Datum::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Datum::Decimal(v) => write!(f, "{}", v),
            Datum::Duration(v) => write!(f, "{}", v),
        }
    }
}
