//! Property-based round-trip tests.

use std::collections::BTreeMap;

use bencode::{decode, decode_as_tuple, encode, encode_utf8, Value};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A `Value` generator bounded in both branching and nesting depth, so
/// `quickcheck`'s shrinker terminates and generated trees stay a reasonable
/// size. Wraps `Value` rather than implementing `Arbitrary` on it directly,
/// since the crate's own `Value` has no opinion on how it should be
/// randomly generated.
#[derive(Debug, Clone)]
struct ArbitraryValue(Value);

const MAX_DEPTH: u32 = 4;

impl Arbitrary for ArbitraryValue {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbitraryValue(arbitrary_value(g, MAX_DEPTH))
    }
}

fn arbitrary_value(g: &mut Gen, depth: u32) -> Value {
    if depth == 0 {
        return arbitrary_leaf(g);
    }
    match u32::arbitrary(g) % 4 {
        0 => arbitrary_leaf(g),
        1 => {
            let len = usize::arbitrary(g) % 4;
            Value::list((0..len).map(|_| arbitrary_value(g, depth - 1)).collect::<Vec<_>>())
        }
        2 => {
            let len = usize::arbitrary(g) % 4;
            Value::Tuple((0..len).map(|_| arbitrary_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut dict = BTreeMap::new();
            for i in 0..len {
                let key = format!("k{i}").into_bytes();
                dict.insert(key, arbitrary_value(g, depth - 1));
            }
            Value::dict(dict)
        }
    }
}

fn arbitrary_leaf(g: &mut Gen) -> Value {
    if bool::arbitrary(g) {
        Value::from(i64::arbitrary(g))
    } else {
        Value::bytes(Vec::<u8>::arbitrary(g))
    }
}

/// Turns tuples into lists, matching what `decode` (non-tuple mode)
/// produces for any list-shaped literal. This is the `canonicalize` from
/// the round-trip invariant.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Tuple(items) => Value::List(items.iter().map(canonicalize).collect()),
        Value::List(items) => Value::List(items.iter().map(canonicalize).collect()),
        Value::Dict(dict) => {
            Value::Dict(dict.iter().map(|(k, v)| (k.clone(), canonicalize(v))).collect())
        }
        other => other.clone(),
    }
}

#[quickcheck]
fn round_trip_through_decode(value: ArbitraryValue) -> bool {
    let encoded = encode(&value.0).expect("arbitrary values always encode");
    let decoded = decode(&encoded).expect("encoder output always decodes");
    decoded == canonicalize(&value.0)
}

#[quickcheck]
fn round_trip_through_decode_as_tuple(value: ArbitraryValue) -> bool {
    let encoded = encode(&value.0).expect("arbitrary values always encode");
    let decoded = decode_as_tuple(&encoded).expect("encoder output always decodes");
    // Under tuple mode every list-shaped node comes back as a `Tuple`,
    // whether it started life as a `List` or a `Tuple`.
    fn as_tuples(value: &Value) -> Value {
        match value {
            Value::List(items) | Value::Tuple(items) => {
                Value::Tuple(items.iter().map(as_tuples).collect())
            }
            Value::Dict(dict) => {
                Value::Dict(dict.iter().map(|(k, v)| (k.clone(), as_tuples(v))).collect())
            }
            other => other.clone(),
        }
    }
    decoded == as_tuples(&value.0)
}

#[quickcheck]
fn equal_values_encode_identically(value: ArbitraryValue) -> bool {
    let canonical = canonicalize(&value.0);
    encode(&value.0).unwrap() == encode(&canonical).unwrap()
}

#[quickcheck]
fn decode_never_leaves_trailing_bytes_on_success(value: ArbitraryValue) -> bool {
    let encoded = encode(&value.0).unwrap();
    let mut doubled = encoded.clone();
    doubled.extend_from_slice(&encoded);
    decode(&encoded).is_ok() && decode(&doubled).is_err()
}

#[test]
fn utf8_text_round_trips() {
    let value = Value::Text("hello world".to_string());
    let encoded = encode_utf8(&value).unwrap();
    assert_eq!(bencode::decode_utf8(&encoded).unwrap(), value);
}
