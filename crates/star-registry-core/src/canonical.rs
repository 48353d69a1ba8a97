//! Canonical CBOR encoding for deterministic block snapshots.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are i64 seconds)
//!
//! The same block fields always produce the same bytes, and therefore the
//! same digest, on every platform.

use ciborium::value::Value;

use crate::block::Block;

/// Snapshot field keys (integer keys for compact encoding).
mod keys {
    pub const PAYLOAD: u64 = 0;
    pub const HEIGHT: u64 = 1;
    pub const TIMESTAMP: u64 = 2;
    pub const PREVIOUS_HASH: u64 = 3;
    pub const HASH: u64 = 4;
}

/// Encode a block snapshot to canonical CBOR bytes.
///
/// With `for_hash` set the `hash` field is written as null regardless of
/// its current value, which is the form a block's own digest is taken over.
pub fn canonical_block_bytes(block: &Block, for_hash: bool) -> Vec<u8> {
    let value = block_to_cbor_value(block, for_hash);
    let mut buf = Vec::new();
    encode_value_to(&mut buf, &value);
    buf
}

fn block_to_cbor_value(block: &Block, for_hash: bool) -> Value {
    let optional_hash = |h: Option<[u8; 32]>| match h {
        Some(bytes) => Value::Bytes(bytes.to_vec()),
        None => Value::Null,
    };

    let hash = if for_hash {
        Value::Null
    } else {
        optional_hash(block.hash.map(|h| h.0))
    };

    Value::Map(vec![
        (
            Value::Integer(keys::PAYLOAD.into()),
            Value::Bytes(block.payload.to_vec()),
        ),
        (
            Value::Integer(keys::HEIGHT.into()),
            Value::Integer(block.height.into()),
        ),
        (
            Value::Integer(keys::TIMESTAMP.into()),
            Value::Integer(block.timestamp.into()),
        ),
        (
            Value::Integer(keys::PREVIOUS_HASH.into()),
            optional_hash(block.previous_hash.map(|h| h.0)),
        ),
        (Value::Integer(keys::HASH.into()), hash),
    ])
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Array(arr) => encode_array(buf, arr),
        Value::Map(entries) => encode_map_canonical(buf, entries),
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Float(_) => panic!("floats not supported in canonical encoding"),
        _ => panic!("unsupported CBOR value type"),
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

fn encode_array(buf: &mut Vec<u8>, arr: &[Value]) {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item);
    }
}

/// Encode a map canonically (major type 5), keys sorted by encoded bytes.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}
