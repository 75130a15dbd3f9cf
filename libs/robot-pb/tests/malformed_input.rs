//! Decoding hostile or damaged bytes: every failure is an `Err`, never a
//! panic or a partially filled value.

#![allow(clippy::unwrap_used)]

use prost::Message;
use robot_pb::common::variant::Value;
use robot_pb::interfaces::{CreateRequest, Params};
use robot_pb::{
    Codec, CodecConfig, DEFAULT_MAX_DEPTH, Dictionary, Error, Kind, MAX_DEPTH, Variant,
    decode_dictionary, decode_variant, encode_dictionary,
};

fn nested(levels: usize) -> Dictionary {
    let mut dict: Dictionary = [("leaf", 1)].into_iter().collect();
    for _ in 1..levels {
        let mut outer = Dictionary::new();
        outer.insert("inner", dict);
        dict = outer;
    }
    dict
}

#[test]
fn truncated_string_payload() {
    // field 15 (string_value), declared length 10, three bytes present
    let bytes = [0x7A, 0x0A, b'a', b'b', b'c'];
    assert!(matches!(decode_variant(&bytes), Err(Error::MalformedEncoding(_))));
}

#[test]
fn invalid_utf8_in_string() {
    let bytes = [0x7A, 0x02, 0xFF, 0xFE];
    assert!(matches!(decode_variant(&bytes), Err(Error::MalformedEncoding(_))));
}

#[test]
fn truncated_dictionary() {
    let mut dict = Dictionary::new();
    dict.insert("number", 999);
    dict.insert("text", "Map Value");
    let bytes = encode_dictionary(&dict);
    // last byte sits inside the final entry's string
    assert!(matches!(
        decode_dictionary(&bytes[..bytes.len() - 1]),
        Err(Error::MalformedEncoding(_))
    ));
}

#[test]
fn unknown_discriminant_is_surfaced() {
    // kind = 99, then an unknown varint field 99 = 1
    let bytes = [0x08, 99, 0x98, 0x06, 0x01];
    assert_eq!(decode_variant(&bytes), Err(Error::UnknownVariant(99)));
}

#[test]
fn unknown_discriminant_inside_dictionary() {
    let mut dict = Dictionary::new();
    dict.insert("future", Variant { kind: 64, value: None });
    let bytes = encode_dictionary(&dict);
    assert_eq!(decode_dictionary(&bytes), Err(Error::UnknownVariant(64)));
}

#[test]
fn discriminant_disagreeing_with_member() {
    let forged = Variant {
        kind: Kind::String as i32,
        value: Some(Value::Int32Value(5)),
    };
    let bytes = forged.encode_to_vec();
    assert!(matches!(decode_variant(&bytes), Err(Error::MalformedEncoding(_))));
}

#[test]
fn zero_discriminant_is_accepted() {
    let untagged = Variant {
        kind: 0,
        value: Some(Value::BoolValue(true)),
    };
    let back = decode_variant(&untagged.encode_to_vec()).unwrap();
    assert_eq!(back.which(), Kind::Bool);
    assert!(back.bool_value());
}

#[test]
fn nesting_beyond_default_limit() {
    let bytes = encode_dictionary(&nested(DEFAULT_MAX_DEPTH));
    assert!(decode_dictionary(&bytes).is_ok());

    let bytes = encode_dictionary(&nested(DEFAULT_MAX_DEPTH + 4));
    assert_eq!(
        decode_dictionary(&bytes),
        Err(Error::RecursionLimitExceeded { limit: DEFAULT_MAX_DEPTH })
    );

    let relaxed = Codec::new(CodecConfig {
        max_depth: DEFAULT_MAX_DEPTH + 4,
        ..CodecConfig::default()
    });
    assert!(relaxed.decode::<Dictionary>(&bytes).is_ok());
}

#[test]
fn nesting_beyond_runtime_guard() {
    let bytes = encode_dictionary(&nested(60));
    let max = Codec::new(CodecConfig {
        max_depth: MAX_DEPTH,
        ..CodecConfig::default()
    });
    assert_eq!(
        max.decode::<Dictionary>(&bytes),
        Err(Error::RecursionLimitExceeded { limit: MAX_DEPTH })
    );
}

#[test]
fn runtime_guard_reports_the_configured_limit() {
    let bytes = encode_dictionary(&nested(40));
    assert_eq!(
        decode_dictionary(&bytes),
        Err(Error::RecursionLimitExceeded { limit: DEFAULT_MAX_DEPTH })
    );
}

#[test]
fn untagged_unknown_member_decodes_empty() {
    // field 33, varint 1, no kind tag: skipped like any unknown field
    let bytes = [0x88, 0x02, 0x01];
    let v = decode_variant(&bytes).unwrap();
    assert!(!v.is_set());
    assert_eq!(v.which(), Kind::Unknown);
}

#[test]
fn envelopes_apply_the_depth_limit() {
    let request = CreateRequest {
        request_data: None,
        params: Some(Params {
            extra: Some(nested(DEFAULT_MAX_DEPTH + 1)),
            ..Default::default()
        }),
    };
    let codec = Codec::default();
    let bytes = codec.encode(&request);
    assert_eq!(
        codec.decode::<CreateRequest>(&bytes),
        Err(Error::RecursionLimitExceeded { limit: DEFAULT_MAX_DEPTH })
    );
}

#[test]
fn garbage_never_panics() {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    for len in 0..64 {
        let bytes: Vec<u8> = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state as u8
            })
            .collect();
        let _ = decode_variant(&bytes);
        let _ = decode_dictionary(&bytes);
    }
}
