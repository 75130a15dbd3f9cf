//! # robot-pb
//!
//! Protobuf payload types for the robot message bus: a self-describing
//! [`Variant`] value, the recursive [`Dictionary`] built from it, the
//! request/response envelopes that carry dictionaries as open-ended
//! payloads, and the detection/perception frames.
//!
//! Messages are plain `prost` types and follow the definitions under
//! `proto/`; tag numbers there are the wire contract. [`Codec`] wraps
//! `prost` decoding with the checks the schema cannot express on its own:
//! dictionary nesting depth, discriminant consistency and optional range
//! validation.
//!
//! ```rust
//! use robot_pb::{Dictionary, Variant, decode_dictionary, encode_dictionary};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("number", 999);
//! dict.insert("text", "Map Value");
//!
//! let bytes = encode_dictionary(&dict);
//! let back = decode_dictionary(&bytes).unwrap();
//! assert_eq!(back.get("number"), Some(&Variant::from(999)));
//! ```

pub mod codec;
pub mod common;
pub mod detection;
pub mod error;
pub mod interfaces;
pub mod json;
pub mod legacy;
pub mod perception;
pub mod pretty;

pub use codec::{
    Checker, Codec, CodecConfig, DEFAULT_MAX_DEPTH, LEGACY_MAX_DEPTH, MAX_DEPTH, Payload,
    decode_dictionary, decode_variant, encode_dictionary, encode_variant,
};
pub use common::{Date, Dictionary, Kind, Timestamp, Variant};
pub use error::{Error, Result};
pub use interfaces::Status;
