//! Canonical Bencode encoding and decoding.
//!
//! Bencode is the structured serialization format used by the BitTorrent
//! protocol: integers, byte strings, lists and dictionaries, encoded so that
//! any given value has exactly one valid byte representation. That
//! canonical-form guarantee is what this crate enforces on both ends. The
//! decoder rejects any input that isn't already in canonical form (leading
//! zeros, negative zero, disordered or duplicate dictionary keys, ...), and
//! the encoder only ever produces canonical output.
//!
//! ```
//! use bencode::{decode, encode, Value};
//!
//! let value = decode(b"d3:agei30e4:name4:atome").unwrap();
//! assert_eq!(encode(&value).unwrap(), b"d3:agei30e4:name4:atome".to_vec());
//! ```
//!
//! # Data model
//!
//! Everything decodes into and encodes from a single tagged tree, [`Value`].
//! There is no generic `Serialize`/`Deserialize`-over-arbitrary-host-types
//! dispatch here: Bencode's four wire kinds map onto a closed `enum`, and
//! callers build or inspect `Value` trees directly. See the [`value`]
//! module for the full variant list, including the decode-mode/encode-mode
//! adapters ([`Value::Tuple`], [`Value::Text`]).
//!
//! # Decode and encode modes
//!
//! [`Decoder`] and [`Encoder`] are small configuration builders:
//!
//! - [`Decoder::tuples`] / the [`decode_as_tuple`] shorthand decode lists as
//!   [`Value::Tuple`] instead of [`Value::List`].
//! - [`Decoder::utf8`] / [`Encoder::utf8`] and the [`decode_utf8`] /
//!   [`encode_utf8`] shorthands transcode byte strings to/from
//!   [`Value::Text`]. Dictionary keys are exempt (see [`decoder`]'s module
//!   docs for why).
//! - [`Decoder::max_depth`] / [`Encoder::max_depth`] bound nesting depth
//!   (default [`DEFAULT_MAX_DEPTH`]) to guard against malicious or
//!   accidental unbounded recursion.
//!
//! # Errors
//!
//! All fallible operations return [`Error`]; see its documentation for the
//! failure kinds.

mod decoder;
mod encoder;
mod error;
mod read;
mod token;
pub mod value;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use value::{Bencached, Value};

/// Default maximum list/dict nesting depth for [`Decoder`] and [`Encoder`],
/// chosen to stay well within a standard thread's stack while rejecting the
/// pathologically deep inputs that recursive descent can't otherwise bound.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Decodes a single top-level Bencode value from `buf`, with default
/// configuration (lists as [`Value::List`], byte strings as
/// [`Value::ByteString`]).
pub fn decode(buf: &[u8]) -> Result<Value> {
    Decoder::new().decode(buf)
}

/// Decodes `buf` the same way [`decode`] does, except lists decode as
/// [`Value::Tuple`].
pub fn decode_as_tuple(buf: &[u8]) -> Result<Value> {
    Decoder::new().tuples(true).decode(buf)
}

/// Decodes `buf` the same way [`decode`] does, except byte strings are
/// transcoded from UTF-8 into [`Value::Text`] (dictionary keys excepted).
pub fn decode_utf8(buf: &[u8]) -> Result<Value> {
    Decoder::new().utf8(true).decode(buf)
}

/// Encodes `value` to its canonical Bencode byte representation. Fails with
/// [`Error::TypeError`] if `value` contains a [`Value::Text`] node, since
/// the non-UTF-8 encoder has no charset to transcode it with.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    Encoder::new().encode(value)
}

/// Encodes `value` the same way [`encode`] does, except [`Value::Text`]
/// nodes are accepted and transcoded to UTF-8 bytes.
pub fn encode_utf8(value: &Value) -> Result<Vec<u8>> {
    Encoder::new().utf8(true).encode(value)
}
