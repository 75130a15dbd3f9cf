//! The canonical variant schema generation (`proto/common/variant.proto`).

pub mod array;
pub mod dictionary;
pub mod kind;
pub mod time;
pub mod variant;

pub use array::{
    BoolArray, ByteArray, CharArray, DoubleArray, FloatArray, Int8Array, Int16Array, Int32Array,
    Int64Array, StringArray, Uint8Array, Uint16Array, Uint32Array, Uint64Array,
};
pub use dictionary::Dictionary;
pub use kind::Kind;
pub use time::{Date, Timestamp};
pub use variant::Variant;
