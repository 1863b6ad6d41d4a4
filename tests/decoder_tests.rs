//! Tests for the decode entry point
//!
//! These tests verify:
//! - The three formats end to end, from key text to report text
//! - Format auto-detection
//! - Hard failures abort while value truncation does not
//! - Strict mode and config validation

mod common;

use common::*;
use keydecoder::codec::Datum;
use keydecoder::{decode, detect_format, DecodeConfig, DecoderError, Format};

fn config(format: Format, key: &[u8]) -> DecodeConfig {
    DecodeConfig::builder().format(format).key(key).build().unwrap()
}

// =============================================================================
// Table Row
// =============================================================================

#[test]
fn test_table_row_hex_escaped() {
    let key = br"t\x80\x00\x00\x00\x00\x00\x07\x8f_r\x80\x00\x00\x00\x00\x08\x3b\xba";
    let report = decode(&config(Format::TableRow, key)).unwrap();
    assert_eq!(report.field("table_id"), Some(1935));
    assert_eq!(report.field("row_id"), Some(539578));
    assert!(report.values().is_none());
    assert_eq!(
        report.to_string(),
        "format: table_row\ntable_id: 1935\nrow_id: 539578\n"
    );
}

#[test]
fn test_table_row_octal_escaped() {
    let key = br"t\200\000\000\000\000\000\007\217_r\200\000\000\000\000\010;\272";
    let report = decode(&config(Format::TableRow, key)).unwrap();
    assert_eq!(
        report.to_string(),
        "format: table_row\ntable_id: 1935\nrow_id: 539578\n"
    );
}

#[test]
fn test_table_row_raw_bytes() {
    let key = b"t\x80\x00\x00\x00\x00\x00\x07\x8f_r\x80\x00\x00\x00\x00\x08\x3b\xba";
    let report = decode(&config(Format::TableRow, key)).unwrap();
    assert_eq!(report.field("row_id"), Some(539578));
}

#[test]
fn test_table_row_malformed_key() {
    let key = br"t\x80\x00\x00\x00\x00\x00\x07\x8f_r\x80\x00\x00";
    assert!(matches!(
        decode(&config(Format::TableRow, key)),
        Err(DecoderError::MalformedKey { .. })
    ));
}

#[test]
fn test_table_row_bad_escape_aborts() {
    let key = br"t\x80\x00\x00\x00\x00\x00\x07\x8f_r\x80\x00\x00\x00\x00\x08\x3b\xb";
    assert!(matches!(
        decode(&config(Format::TableRow, key)),
        Err(DecoderError::TruncatedEscape { .. })
    ));
}

/// Write each backslash byte of a raw key as `\x5c`
fn escape_backslashes(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &b in raw {
        if b == b'\\' {
            out.extend_from_slice(br"\x5c");
        } else {
            out.push(b);
        }
    }
    out
}

#[test]
fn test_table_row_raw_backslash_starts_escape() {
    // row_id 92 ends the raw key with a bare 0x5c
    let raw = row_key(1, 92);
    assert_eq!(raw[18], 0x5c);
    assert_eq!(
        decode(&config(Format::TableRow, &raw)),
        Err(DecoderError::TruncatedEscape { offset: 18 })
    );

    // 0x5c 0x6e is read as "\n" and shortens the key
    let raw = row_key(1, 0x5c6e);
    assert!(matches!(
        decode(&config(Format::TableRow, &raw)),
        Err(DecoderError::MalformedKey { layout: "table_row", .. })
    ));
}

#[test]
fn test_table_row_raw_backslash_written_as_hex() {
    let key = escape_backslashes(&row_key(1, 92));
    let report = decode(&config(Format::TableRow, &key)).unwrap();
    assert_eq!(report.field("table_id"), Some(1));
    assert_eq!(report.field("row_id"), Some(92));

    let key = escape_backslashes(&row_key(0x5c, 0x5c6e));
    let report = decode(&config(Format::TableRow, &key)).unwrap();
    assert_eq!(report.field("table_id"), Some(0x5c));
    assert_eq!(report.field("row_id"), Some(0x5c6e));
}

// =============================================================================
// Table Index
// =============================================================================

#[test]
fn test_table_index() {
    let key = br"t\x80\x00\x00\x00\x00\x00\x00\x5f_i\x80\x00\x00\x00\x00\x00\x00\x01\x03\x80\x00\x00\x00\x00\x00\x00\x02\x03\x80\x00\x00\x00\x00\x00\x00\x02";
    let report = decode(&config(Format::TableIndex, key)).unwrap();
    assert_eq!(
        report.to_string(),
        "format: table_index\n\
         table_id: 95\n\
         index_id: 1\n\
         index_value[0]: {type: bigint, value: 2}\n\
         index_value[1]: {type: bigint, value: 2}\n"
    );
}

#[test]
fn test_table_index_truncated_values_still_reported() {
    let mut values = encode_int(2);
    values.extend_from_slice(&[0x03, 0x80, 0x00]);
    let key = hex_escape(&index_key(95, 1, &values));

    let report = decode(&config(Format::TableIndex, key.as_bytes())).unwrap();
    assert_eq!(
        report.to_string(),
        "format: table_index\n\
         table_id: 95\n\
         index_id: 1\n\
         index_value[0]: {type: bigint, value: 2}\n"
    );
}

#[test]
fn test_table_index_strict_fails_on_truncation() {
    let mut values = encode_int(2);
    values.extend_from_slice(&[0x03, 0x80, 0x00]);
    let key = hex_escape(&index_key(95, 1, &values));

    let config = DecodeConfig::builder()
        .format(Format::TableIndex)
        .key(key)
        .strict(true)
        .build()
        .unwrap();
    assert!(matches!(
        decode(&config),
        Err(DecoderError::InsufficientBytes { .. })
    ));
}

#[test]
fn test_table_index_strict_passes_complete_values() {
    let key = hex_escape(&index_key(3, 4, &encode_compact_bytes(b"k")));
    let config = DecodeConfig::builder()
        .format(Format::TableIndex)
        .key(key)
        .strict(true)
        .build()
        .unwrap();
    let report = decode(&config).unwrap();
    assert_eq!(
        report.values().unwrap().values(),
        &[Datum::Bytes(b"k".to_vec())]
    );
}

// =============================================================================
// Value
// =============================================================================

#[test]
fn test_value_base64() {
    let report = decode(&config(Format::Value, b"CAQCBmFiYw==")).unwrap();
    assert_eq!(
        report.to_string(),
        "format: value\n\
         index_value[0]: {type: bigint, value: 2}\n\
         index_value[1]: {type: bytes, value: abc}\n"
    );
}

#[test]
fn test_value_invalid_base64() {
    assert!(matches!(
        decode(&config(Format::Value, b"not base64!")),
        Err(DecoderError::Base64(_))
    ));
}

#[test]
fn test_value_is_not_escape_decoded() {
    // "XA==" is a single backslash byte; it must reach the codec untouched.
    let report = decode(&config(Format::Value, b"XA==")).unwrap();
    let values = report.values().unwrap();
    assert!(values.is_empty());
    assert!(matches!(
        values.error(),
        Some(DecoderError::UnknownTag { tag: 0x5c })
    ));
}

// =============================================================================
// Auto-Detection
// =============================================================================

#[test]
fn test_detect_format() {
    let row = br"t\x80\x00\x00\x00\x00\x00\x07\x8f_r\x80\x00\x00\x00\x00\x08\x3b\xba";
    assert_eq!(detect_format(row), Ok(Format::TableRow));

    let index = hex_escape(&index_key(1, 2, &encode_int(3)));
    assert_eq!(detect_format(index.as_bytes()), Ok(Format::TableIndex));

    assert_eq!(detect_format(b"CAQCBmFiYw=="), Ok(Format::Value));

    assert!(matches!(
        detect_format(b"???"),
        Err(DecoderError::UnknownFormat(_))
    ));
}

#[test]
fn test_auto_reports_detected_format() {
    let report = decode(&config(Format::Auto, b"CAQCBmFiYw==")).unwrap();
    assert_eq!(report.format, Format::Value);
    assert!(report.to_string().starts_with("format: value\n"));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_requires_format() {
    let result = DecodeConfig::builder().key("abc").build();
    assert!(matches!(result, Err(DecoderError::Usage(_))));
}

#[test]
fn test_config_requires_key() {
    let result = DecodeConfig::builder().format(Format::Value).build();
    assert!(matches!(result, Err(DecoderError::Usage(_))));

    let result = DecodeConfig::builder().format(Format::Value).key("").build();
    assert!(matches!(result, Err(DecoderError::Usage(_))));
}

#[test]
fn test_format_names() {
    assert_eq!("table_row".parse::<Format>(), Ok(Format::TableRow));
    assert_eq!("table_index".parse::<Format>(), Ok(Format::TableIndex));
    assert_eq!("value".parse::<Format>(), Ok(Format::Value));
    assert_eq!("index_value".parse::<Format>(), Ok(Format::Value));
    assert_eq!("auto".parse::<Format>(), Ok(Format::Auto));
    assert!(matches!(
        "tabel_row".parse::<Format>(),
        Err(DecoderError::UnknownFormat(_))
    ));
}
