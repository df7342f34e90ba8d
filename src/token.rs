//! Bencode wire tokens.

/// Leading byte of an integer literal: `i<digits>e`.
pub const INTEGER_START: u8 = b'i';

/// Leading byte of a list: `l<values>e`.
pub const LIST_START: u8 = b'l';

/// Leading byte of a dictionary: `d<key><value>...e`.
pub const DICT_START: u8 = b'd';

/// Terminator shared by integers, lists and dictionaries.
pub const END: u8 = b'e';

/// Separator between a byte string's decimal length and its payload.
pub const BYTES_DELIMITER: u8 = b':';
