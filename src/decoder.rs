//! Bencode decoder: byte buffer → [`Value`] tree.

use std::collections::BTreeMap;

use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::read::SliceRead;
use crate::token;
use crate::value::Value;
use crate::DEFAULT_MAX_DEPTH;

/// Decodes a single top-level Bencode value from a byte buffer.
///
/// `Decoder` is a small builder over immutable configuration (list tag,
/// text-string transcoding, max nesting depth) rather than a struct with
/// mutable fields. There is no decode-time state to carry between calls, and
/// [`Decoder::decode`] may be called repeatedly, from multiple threads, over
/// disjoint buffers.
///
/// See the crate-level docs for the preconfigured [`crate::decode`],
/// [`crate::decode_as_tuple`] and [`crate::decode_utf8`] entry points.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    tuples: bool,
    utf8: bool,
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            tuples: false,
            utf8: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Decoder {
    /// A decoder with default configuration: lists decode as `Value::List`,
    /// byte strings stay raw, max nesting depth is
    /// [`crate::DEFAULT_MAX_DEPTH`].
    pub fn new() -> Self {
        Self::default()
    }

    /// If `yes`, lists decode as [`Value::Tuple`] instead of [`Value::List`].
    pub fn tuples(mut self, yes: bool) -> Self {
        self.tuples = yes;
        self
    }

    /// If `yes`, byte-string payloads are transcoded from UTF-8 into
    /// [`Value::Text`]; invalid UTF-8 fails the decode with
    /// [`Error::TranscodingError`].
    ///
    /// Dictionary keys are never transcoded. They stay raw bytes
    /// regardless of this setting, so the strictly-ascending
    /// byte-lexicographic key-ordering rule always compares the same bytes
    /// that are on the wire. See `DESIGN.md` for the rationale.
    pub fn utf8(mut self, yes: bool) -> Self {
        self.utf8 = yes;
        self
    }

    /// Sets the maximum list/dict nesting depth; exceeding it during decode
    /// fails with [`Error::RecursionLimitExceeded`] instead of recursing
    /// further.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decodes exactly one top-level value from `buf`. Fails if `buf`
    /// contains trailing bytes after that value, or if `buf` is malformed.
    pub fn decode(&self, buf: &[u8]) -> Result<Value> {
        let mut cursor = SliceRead::new(buf);
        let value = self.decode_value(&mut cursor, 1)?;
        if !cursor.at_end() {
            return Err(Error::MalformedInput(
                "trailing bytes after top-level value",
            ));
        }
        Ok(value)
    }

    fn decode_value(&self, cursor: &mut SliceRead, depth: usize) -> Result<Value> {
        match cursor.peek_byte()? {
            token::INTEGER_START => self.decode_int(cursor),
            token::LIST_START => {
                let items = self.decode_list(cursor, depth)?;
                Ok(if self.tuples {
                    Value::Tuple(items)
                } else {
                    Value::List(items)
                })
            }
            token::DICT_START => Ok(Value::Dict(self.decode_dict(cursor, depth)?)),
            b if b.is_ascii_digit() => {
                let bytes = self.decode_bytestring(cursor)?;
                self.wrap_bytestring(bytes)
            }
            _ => Err(Error::MalformedInput("unrecognized value tag")),
        }
    }

    fn wrap_bytestring(&self, bytes: Vec<u8>) -> Result<Value> {
        if self.utf8 {
            String::from_utf8(bytes)
                .map(Value::Text)
                .map_err(|_| Error::TranscodingError)
        } else {
            Ok(Value::ByteString(bytes))
        }
    }

    /// Decodes an integer literal. The cursor must be positioned at the
    /// leading `'i'`.
    fn decode_int(&self, cursor: &mut SliceRead) -> Result<Value> {
        expect_byte(cursor, token::INTEGER_START)?;
        let raw = read_until(cursor, token::END, "unterminated integer literal")?;
        validate_integer_literal(raw)?;
        let n =
            BigInt::parse_bytes(raw, 10).ok_or(Error::MalformedInput("invalid integer literal"))?;
        Ok(Value::Integer(n))
    }

    /// Decodes a byte-string literal's raw payload (no text transcoding).
    /// The cursor must be positioned at the leading length digit.
    fn decode_bytestring(&self, cursor: &mut SliceRead) -> Result<Vec<u8>> {
        let len_raw = read_until(cursor, token::BYTES_DELIMITER, "missing byte string length")?;
        validate_length_literal(len_raw)?;
        let len: usize = std::str::from_utf8(len_raw)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(Error::MalformedInput("byte string length too large"))?;
        Ok(cursor.next_bytes(len)?.to_vec())
    }

    /// Decodes a list's elements. The cursor must be positioned at the
    /// leading `'l'`.
    fn decode_list(&self, cursor: &mut SliceRead, depth: usize) -> Result<Vec<Value>> {
        if depth > self.max_depth {
            return Err(Error::RecursionLimitExceeded);
        }
        expect_byte(cursor, token::LIST_START)?;
        let mut items = Vec::new();
        loop {
            if cursor.peek_byte()? == token::END {
                cursor.next_byte()?;
                break;
            }
            items.push(self.decode_value(cursor, depth + 1)?);
        }
        Ok(items)
    }

    /// Decodes a dictionary's key/value pairs, enforcing strictly ascending
    /// byte-lexicographic key order. The cursor must be positioned at the
    /// leading `'d'`.
    fn decode_dict(
        &self,
        cursor: &mut SliceRead,
        depth: usize,
    ) -> Result<BTreeMap<Vec<u8>, Value>> {
        if depth > self.max_depth {
            return Err(Error::RecursionLimitExceeded);
        }
        expect_byte(cursor, token::DICT_START)?;
        let mut dict = BTreeMap::new();
        let mut last_key: Option<Vec<u8>> = None;
        loop {
            if cursor.peek_byte()? == token::END {
                cursor.next_byte()?;
                break;
            }
            if !cursor.peek_byte()?.is_ascii_digit() {
                return Err(Error::MalformedInput(
                    "dictionary key must be a byte string",
                ));
            }
            let key = self.decode_bytestring(cursor)?;
            if let Some(last) = &last_key {
                if *last >= key {
                    return Err(Error::MalformedInput(
                        "dictionary keys must be strictly ascending",
                    ));
                }
            }
            let value = self.decode_value(cursor, depth + 1)?;
            last_key = Some(key.clone());
            dict.insert(key, value);
        }
        Ok(dict)
    }
}

fn expect_byte(cursor: &mut SliceRead, expected: u8) -> Result<()> {
    if cursor.next_byte()? == expected {
        Ok(())
    } else {
        Err(Error::MalformedInput("unexpected byte"))
    }
}

/// Consumes bytes up to (not including) the first occurrence of `stop`,
/// then consumes `stop` itself, returning the bytes before it.
fn read_until<'a>(
    cursor: &mut SliceRead<'a>,
    stop: u8,
    eof_reason: &'static str,
) -> Result<&'a [u8]> {
    let offset = cursor
        .remaining_slice()
        .iter()
        .position(|&b| b == stop)
        .ok_or(Error::MalformedInput(eof_reason))?;
    let bytes = cursor.next_bytes(offset)?;
    cursor.next_byte()?;
    Ok(bytes)
}

/// `-?[0-9]+`, no leading zeros (other than a lone `0`), no negative zero.
fn validate_integer_literal(raw: &[u8]) -> Result<()> {
    if raw.is_empty() {
        return Err(Error::MalformedInput("empty integer literal"));
    }
    let (negative, digits) = match raw.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, raw),
    };
    if digits.is_empty() {
        return Err(Error::MalformedInput("integer literal has no digits"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(Error::MalformedInput("non-digit in integer literal"));
    }
    if digits[0] == b'0' && digits.len() > 1 {
        return Err(Error::MalformedInput("leading zero in integer literal"));
    }
    if negative && digits == b"0" {
        return Err(Error::MalformedInput("negative zero"));
    }
    Ok(())
}

/// `0 | [1-9][0-9]*`, i.e. no leading zeros in a multi-digit length.
fn validate_length_literal(raw: &[u8]) -> Result<()> {
    if raw.is_empty() {
        return Err(Error::MalformedInput("empty byte string length"));
    }
    if !raw.iter().all(u8::is_ascii_digit) {
        return Err(Error::MalformedInput("non-digit in byte string length"));
    }
    if raw[0] == b'0' && raw.len() > 1 {
        return Err(Error::MalformedInput("leading zero in byte string length"));
    }
    Ok(())
}
