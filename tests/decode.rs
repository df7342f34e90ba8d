//! Concrete decode scenarios.

use std::collections::BTreeMap;

use bencode::{decode, decode_as_tuple, Error, Value};

#[test]
fn integer_zero() {
    assert_eq!(decode(b"i0e").unwrap(), Value::from(0));
}

#[test]
fn negative_integer() {
    assert_eq!(decode(b"i-10e").unwrap(), Value::from(-10));
}

#[test]
fn negative_zero_is_rejected() {
    assert!(matches!(decode(b"i-0e"), Err(Error::MalformedInput(_))));
}

#[test]
fn leading_zero_is_rejected() {
    assert!(matches!(decode(b"i03e"), Err(Error::MalformedInput(_))));
}

#[test]
fn byte_string() {
    assert_eq!(decode(b"3:abc").unwrap(), Value::bytes(&b"abc"[..]));
}

#[test]
fn list_of_byte_strings() {
    assert_eq!(
        decode(b"l3:asd2:xye").unwrap(),
        Value::list(vec![Value::from("asd"), Value::from("xy")])
    );
}

#[test]
fn dict_of_mixed_values() {
    let mut expected = BTreeMap::new();
    expected.insert(b"age".to_vec(), Value::from(25));
    expected.insert(b"eyes".to_vec(), Value::from("blue"));
    assert_eq!(
        decode(b"d3:agei25e4:eyes4:bluee").unwrap(),
        Value::dict(expected)
    );
}

#[test]
fn disordered_dict_keys_are_rejected() {
    assert!(matches!(
        decode(b"d1:b0:1:a0:e"),
        Err(Error::MalformedInput(_))
    ));
}

#[test]
fn duplicate_dict_keys_are_rejected() {
    assert!(matches!(
        decode(b"d1:a0:1:a0:e"),
        Err(Error::MalformedInput(_))
    ));
}

#[test]
fn trailing_bytes_are_rejected() {
    assert!(matches!(decode(b"i6easd"), Err(Error::MalformedInput(_))));
}

#[test]
fn odd_dict_item_count_is_rejected() {
    assert!(matches!(decode(b"d3:fooe"), Err(Error::MalformedInput(_))));
}

#[test]
fn byte_string_length_exceeding_buffer_is_rejected() {
    assert!(matches!(
        decode(b"2147483639:foo"),
        Err(Error::MalformedInput(_))
    ));
    assert!(matches!(
        decode(b"432432432432432:foo"),
        Err(Error::MalformedInput(_))
    ));
}

#[test]
fn depth_100_exceeds_a_lower_configured_limit() {
    let nested = "l".repeat(100) + &"e".repeat(100);
    let decoder = bencode::Decoder::new().max_depth(64);
    assert_eq!(
        decoder.decode(nested.as_bytes()),
        Err(Error::RecursionLimitExceeded)
    );
}

#[test]
fn tuple_mode_decodes_lists_as_tuples() {
    assert_eq!(
        decode_as_tuple(b"l5:Alice3:Bobe").unwrap(),
        Value::Tuple(vec![Value::from("Alice"), Value::from("Bob")])
    );
}
