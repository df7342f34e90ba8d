//! Bencode encoder: [`Value`] tree → canonical byte buffer.

use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::token;
use crate::value::Value;
use crate::DEFAULT_MAX_DEPTH;

/// Encodes a [`Value`] tree to its canonical Bencode byte representation.
///
/// Canonical here means: integers and byte-string lengths use their minimal
/// decimal representation, and dictionary keys are written in strictly
/// ascending byte-lexicographic order. [`Value::Dict`]'s `BTreeMap` backing
/// already guarantees that ordering by construction, so the encoder never
/// needs to sort.
///
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    utf8: bool,
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            utf8: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Encoder {
    /// An encoder with default configuration: [`Value::Text`] is rejected
    /// (use [`Encoder::utf8`] to accept it), max nesting depth is
    /// [`crate::DEFAULT_MAX_DEPTH`].
    pub fn new() -> Self {
        Self::default()
    }

    /// If `yes`, [`Value::Text`] is accepted and transcoded to UTF-8 bytes
    /// instead of failing with [`Error::TypeError`].
    pub fn utf8(mut self, yes: bool) -> Self {
        self.utf8 = yes;
        self
    }

    /// Sets the maximum list/dict nesting depth; exceeding it during encode
    /// fails with [`Error::RecursionLimitExceeded`] instead of recursing
    /// further.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Encodes `value` to a freshly allocated buffer.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_value(value, &mut out, 1)?;
        Ok(out)
    }

    fn encode_value(&self, value: &Value, out: &mut Vec<u8>, depth: usize) -> Result<()> {
        match value {
            Value::Integer(n) => {
                encode_integer(n, out);
                Ok(())
            }
            Value::ByteString(bytes) => {
                encode_bytestring(bytes, out);
                Ok(())
            }
            Value::Text(text) => {
                if !self.utf8 {
                    return Err(Error::TypeError(
                        "text string requires an encoder configured for utf8",
                    ));
                }
                encode_bytestring(text.as_bytes(), out);
                Ok(())
            }
            Value::List(items) | Value::Tuple(items) => {
                if depth > self.max_depth {
                    return Err(Error::RecursionLimitExceeded);
                }
                out.push(token::LIST_START);
                for item in items {
                    self.encode_value(item, out, depth + 1)?;
                }
                out.push(token::END);
                Ok(())
            }
            Value::Dict(dict) => {
                if depth > self.max_depth {
                    return Err(Error::RecursionLimitExceeded);
                }
                out.push(token::DICT_START);
                // `BTreeMap` iterates in ascending key order already, which
                // is exactly the wire format's canonical ordering.
                for (key, value) in dict {
                    encode_bytestring(key, out);
                    self.encode_value(value, out, depth + 1)?;
                }
                out.push(token::END);
                Ok(())
            }
            Value::PreEncoded(bytes) => {
                out.extend_from_slice(bytes);
                Ok(())
            }
        }
    }
}

fn encode_integer(n: &BigInt, out: &mut Vec<u8>) {
    out.push(token::INTEGER_START);
    out.extend(n.to_string().into_bytes());
    out.push(token::END);
}

fn encode_bytestring(bytes: &[u8], out: &mut Vec<u8>) {
    out.extend(bytes.len().to_string().into_bytes());
    out.push(token::BYTES_DELIMITER);
    out.extend_from_slice(bytes);
}
