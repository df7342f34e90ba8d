//! Errors produced while decoding or encoding Bencode.

use std::result;

/// All possible failures of [`crate::decode`] and [`crate::encode`] (and
/// their preconfigured variants).
///
/// Syntactic and canonicalization violations in decoded input collapse to
/// [`Error::MalformedInput`] rather than a constellation of narrower
/// sub-variants. Callers are expected to match on the error kind, not on
/// the exact grammar rule violated, so the `&'static str` carries the
/// reason purely for diagnostics.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The input violates the Bencode grammar or one of its canonicalization
    /// rules (leading zeros, negative zero, disordered or duplicate
    /// dictionary keys, truncated or trailing bytes, ...).
    #[error("malformed bencode input: {0}")]
    MalformedInput(&'static str),

    /// A value of an unsupported kind was passed to the encoder, a
    /// dictionary key was not a byte string, or a text string was passed to
    /// an encoder with no charset configured.
    #[error("unsupported value type: {0}")]
    TypeError(&'static str),

    /// Nesting depth exceeded the configured maximum during decode or
    /// encode.
    #[error("maximum recursion depth exceeded")]
    RecursionLimitExceeded,

    /// A byte string could not be transcoded to/from text under a
    /// configured charset (UTF-8 is the only charset this crate defines).
    #[error("transcoding error")]
    TranscodingError,
}

/// Alias for `Result` with this crate's [`Error`].
pub type Result<T> = result::Result<T, Error>;
