//! Test-only encoders for building codec inputs
//!
//! The crate only decodes, so tests build their byte buffers here.

#![allow(dead_code)]

pub const TAG_NIL: u8 = 0x00;
pub const TAG_BYTES: u8 = 0x01;
pub const TAG_COMPACT_BYTES: u8 = 0x02;
pub const TAG_INT: u8 = 0x03;
pub const TAG_UINT: u8 = 0x04;
pub const TAG_FLOAT: u8 = 0x05;
pub const TAG_DECIMAL: u8 = 0x06;
pub const TAG_DURATION: u8 = 0x07;
pub const TAG_VARINT: u8 = 0x08;
pub const TAG_UVARINT: u8 = 0x09;

const SIGN_MASK: u64 = 1 << 63;

pub fn encode_int_raw(v: i64) -> [u8; 8] {
    ((v as u64) ^ SIGN_MASK).to_be_bytes()
}

pub fn encode_int(v: i64) -> Vec<u8> {
    let mut out = vec![TAG_INT];
    out.extend_from_slice(&encode_int_raw(v));
    out
}

pub fn encode_uint(v: u64) -> Vec<u8> {
    let mut out = vec![TAG_UINT];
    out.extend_from_slice(&v.to_be_bytes());
    out
}

pub fn encode_float(v: f64) -> Vec<u8> {
    let bits = v.to_bits();
    let raw = if v >= 0.0 { bits | SIGN_MASK } else { !bits };
    let mut out = vec![TAG_FLOAT];
    out.extend_from_slice(&raw.to_be_bytes());
    out
}

pub fn encode_duration(nanos: i64) -> Vec<u8> {
    let mut out = vec![TAG_DURATION];
    out.extend_from_slice(&encode_int_raw(nanos));
    out
}

pub fn uvarint(mut v: u64) -> Vec<u8> {
    let mut out = Vec::new();
    while v >= 0x80 {
        out.push((v as u8) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
    out
}

pub fn varint(v: i64) -> Vec<u8> {
    uvarint(((v << 1) ^ (v >> 63)) as u64)
}

pub fn encode_varint(v: i64) -> Vec<u8> {
    let mut out = vec![TAG_VARINT];
    out.extend(varint(v));
    out
}

pub fn encode_uvarint(v: u64) -> Vec<u8> {
    let mut out = vec![TAG_UVARINT];
    out.extend(uvarint(v));
    out
}

/// Memcomparable groups without the tag
pub fn bytes_groups(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut idx = 0;
    loop {
        let remain = data.len() - idx;
        if remain >= 8 {
            out.extend_from_slice(&data[idx..idx + 8]);
            out.push(0xff);
            idx += 8;
        } else {
            let pad = 8 - remain;
            out.extend_from_slice(&data[idx..]);
            out.extend(std::iter::repeat(0u8).take(pad));
            out.push(0xff - pad as u8);
            return out;
        }
    }
}

pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = vec![TAG_BYTES];
    out.extend(bytes_groups(data));
    out
}

pub fn encode_compact_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = vec![TAG_COMPACT_BYTES];
    out.extend(varint(data.len() as i64));
    out.extend_from_slice(data);
    out
}

pub fn row_key(table_id: i64, row_id: i64) -> Vec<u8> {
    let mut out = vec![b't'];
    out.extend_from_slice(&encode_int_raw(table_id));
    out.extend_from_slice(b"_r");
    out.extend_from_slice(&encode_int_raw(row_id));
    out
}

pub fn index_key(table_id: i64, index_id: i64, values: &[u8]) -> Vec<u8> {
    let mut out = vec![b't'];
    out.extend_from_slice(&encode_int_raw(table_id));
    out.extend_from_slice(b"_i");
    out.extend_from_slice(&encode_int_raw(index_id));
    out.extend_from_slice(values);
    out
}

/// Escape every byte as `\xNN`
pub fn hex_escape(raw: &[u8]) -> String {
    raw.iter().map(|b| format!("\\x{:02x}", b)).collect()
}
