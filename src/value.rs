//! The Bencode value tree.

use std::collections::BTreeMap;

use num_bigint::BigInt;

/// A decoded (or to-be-encoded) Bencode value.
///
/// This is a tagged union over exactly the kinds the wire format supports,
/// plus the two decode-mode/encode-mode adapters described in the module
/// docs: [`Value::Tuple`] (produced instead of [`Value::List`] under the
/// tuple-list decode mode) and [`Value::Text`] (produced/accepted instead of
/// [`Value::ByteString`] under the UTF-8 text mode). Neither adapter changes
/// wire representation: a `Tuple` encodes exactly like a `List`, and a `Text`
/// encodes exactly like the `ByteString` its bytes transcode to.
///
/// Booleans are deliberately not a variant here (the wire format has no
/// boolean kind); construct `Value::from(true)`/`Value::from(false)` and the
/// `From<bool>` impl below coerces to the `i0e`/`i1e` integer encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// `i<decimal>e`, arbitrary magnitude.
    Integer(BigInt),
    /// `<decimal-length>:<bytes>`.
    ByteString(Vec<u8>),
    /// A byte string transcoded to text under a charset-aware decode/encode
    /// mode. Never produced by plain (non-UTF-8) decode.
    Text(String),
    /// `l<values>e`, produced by default-mode decode or built by callers.
    List(Vec<Value>),
    /// `l<values>e`, produced instead of `List` under tuple-list decode mode.
    Tuple(Vec<Value>),
    /// `d<key><value>...e`. Iteration order is always ascending
    /// byte-lexicographic, since `Vec<u8>`'s `Ord` already matches the wire
    /// format's key ordering rule.
    Dict(BTreeMap<Vec<u8>, Value>),
    /// Already-encoded bytes, spliced verbatim by the encoder. Never
    /// produced by the decoder.
    PreEncoded(Vec<u8>),
}

impl Value {
    /// Shorthand for `Value::ByteString(bytes.into())`.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::ByteString(bytes.into())
    }

    /// Shorthand for `Value::List(values)`.
    pub fn list(values: impl Into<Vec<Value>>) -> Self {
        Value::List(values.into())
    }

    /// Shorthand for `Value::Dict(dict)`.
    pub fn dict(dict: BTreeMap<Vec<u8>, Value>) -> Self {
        Value::Dict(dict)
    }
}

impl From<bool> for Value {
    /// Coerces to the integer encoding (`i1e`/`i0e`); the wire format has no
    /// separate boolean kind.
    fn from(value: bool) -> Self {
        Value::Integer(BigInt::from(value as i64))
    }
}

macro_rules! impl_from_integer {
    ($($type:ty)*) => {$(
        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Value::Integer(BigInt::from(value))
            }
        }
    )*};
}

impl_from_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::ByteString(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::ByteString(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::ByteString(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::ByteString(value)
    }
}

/// A wrapper over already-encoded Bencode bytes, spliced verbatim into the
/// output of [`crate::encode`] to avoid re-encoding a static sub-structure.
///
/// The decoder never produces one: this is purely an encoder-side
/// optimization. Validity of `bytes` as Bencode is the caller's
/// responsibility and is not checked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bencached(pub Vec<u8>);

impl Bencached {
    /// Wraps `bytes`, which must already be valid Bencode.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Bencached(bytes.into())
    }
}

impl From<Bencached> for Value {
    fn from(wrapper: Bencached) -> Self {
        Value::PreEncoded(wrapper.0)
    }
}
