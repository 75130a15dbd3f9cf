//! The tagged union at the heart of every payload.
//!
//! A [`Variant`] holds at most one [`Value`]. Reads of an inactive member
//! return that member's zero value rather than failing, matching protobuf
//! oneof semantics; use [`Variant::which`] or the `has_*` predicates when the
//! difference matters.

use super::array::{
    BoolArray, ByteArray, CharArray, DoubleArray, FloatArray, Int8Array, Int16Array, Int32Array,
    Int64Array, StringArray, Uint8Array, Uint16Array, Uint32Array, Uint64Array,
};
use super::{Date, Dictionary, Kind, Timestamp};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Variant {
    /// Discriminant written next to the value by every constructor.
    /// [`Variant::which`] derives the kind from the active member instead.
    #[prost(enumeration = "Kind", tag = "1")]
    pub kind: i32,
    #[prost(
        oneof = "Value",
        tags = "2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32"
    )]
    pub value: ::core::option::Option<Value>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum Value {
    #[prost(bool, tag = "2")]
    BoolValue(bool),
    /// Widened to `int32` on the wire.
    #[prost(int32, tag = "3")]
    Int8Value(i32),
    #[prost(uint32, tag = "4")]
    Uint8Value(u32),
    #[prost(int32, tag = "5")]
    Int16Value(i32),
    #[prost(uint32, tag = "6")]
    Uint16Value(u32),
    #[prost(int32, tag = "7")]
    Int32Value(i32),
    #[prost(uint32, tag = "8")]
    Uint32Value(u32),
    #[prost(int64, tag = "9")]
    Int64Value(i64),
    #[prost(uint64, tag = "10")]
    Uint64Value(u64),
    #[prost(float, tag = "11")]
    FloatValue(f32),
    #[prost(double, tag = "12")]
    DoubleValue(f64),
    /// Unicode scalar value.
    #[prost(uint32, tag = "13")]
    CharValue(u32),
    #[prost(bytes = "vec", tag = "14")]
    ByteValue(::prost::alloc::vec::Vec<u8>),
    #[prost(string, tag = "15")]
    StringValue(::prost::alloc::string::String),
    #[prost(message, tag = "16")]
    DateValue(Date),
    #[prost(message, tag = "17")]
    TimestampValue(Timestamp),
    #[prost(message, tag = "18")]
    DictValue(Dictionary),
    #[prost(message, tag = "19")]
    BoolArrayValue(BoolArray),
    #[prost(message, tag = "20")]
    Int8ArrayValue(Int8Array),
    #[prost(message, tag = "21")]
    Uint8ArrayValue(Uint8Array),
    #[prost(message, tag = "22")]
    Int16ArrayValue(Int16Array),
    #[prost(message, tag = "23")]
    Uint16ArrayValue(Uint16Array),
    #[prost(message, tag = "24")]
    Int32ArrayValue(Int32Array),
    #[prost(message, tag = "25")]
    Uint32ArrayValue(Uint32Array),
    #[prost(message, tag = "26")]
    Int64ArrayValue(Int64Array),
    #[prost(message, tag = "27")]
    Uint64ArrayValue(Uint64Array),
    #[prost(message, tag = "28")]
    FloatArrayValue(FloatArray),
    #[prost(message, tag = "29")]
    DoubleArrayValue(DoubleArray),
    #[prost(message, tag = "30")]
    CharArrayValue(CharArray),
    #[prost(message, tag = "31")]
    ByteArrayValue(ByteArray),
    #[prost(message, tag = "32")]
    StringArrayValue(StringArray),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::BoolValue(_) => Kind::Bool,
            Value::Int8Value(_) => Kind::Int8,
            Value::Uint8Value(_) => Kind::Uint8,
            Value::Int16Value(_) => Kind::Int16,
            Value::Uint16Value(_) => Kind::Uint16,
            Value::Int32Value(_) => Kind::Int32,
            Value::Uint32Value(_) => Kind::Uint32,
            Value::Int64Value(_) => Kind::Int64,
            Value::Uint64Value(_) => Kind::Uint64,
            Value::FloatValue(_) => Kind::Float,
            Value::DoubleValue(_) => Kind::Double,
            Value::CharValue(_) => Kind::Char,
            Value::ByteValue(_) => Kind::Byte,
            Value::StringValue(_) => Kind::String,
            Value::DateValue(_) => Kind::Date,
            Value::TimestampValue(_) => Kind::Timestamp,
            Value::DictValue(_) => Kind::Dict,
            Value::BoolArrayValue(_) => Kind::BoolArray,
            Value::Int8ArrayValue(_) => Kind::Int8Array,
            Value::Uint8ArrayValue(_) => Kind::Uint8Array,
            Value::Int16ArrayValue(_) => Kind::Int16Array,
            Value::Uint16ArrayValue(_) => Kind::Uint16Array,
            Value::Int32ArrayValue(_) => Kind::Int32Array,
            Value::Uint32ArrayValue(_) => Kind::Uint32Array,
            Value::Int64ArrayValue(_) => Kind::Int64Array,
            Value::Uint64ArrayValue(_) => Kind::Uint64Array,
            Value::FloatArrayValue(_) => Kind::FloatArray,
            Value::DoubleArrayValue(_) => Kind::DoubleArray,
            Value::CharArrayValue(_) => Kind::CharArray,
            Value::ByteArrayValue(_) => Kind::ByteArray,
            Value::StringArrayValue(_) => Kind::StringArray,
        }
    }
}

static EMPTY_DICTIONARY: Dictionary = Dictionary::new();

// Copy-typed members: zero on inactive.
macro_rules! scalar_accessors {
    ($($getter:ident, $has:ident => $member:ident: $ty:ty;)*) => {
        $(
            pub fn $getter(&self) -> $ty {
                match &self.value {
                    Some(Value::$member(v)) => *v,
                    _ => <$ty>::default(),
                }
            }

            pub fn $has(&self) -> bool {
                matches!(self.value, Some(Value::$member(_)))
            }
        )*
    };
}

// Narrow kinds: zero on inactive or when the widened wire value does not fit.
macro_rules! narrow_accessors {
    ($($getter:ident, $has:ident => $member:ident: $ty:ty;)*) => {
        $(
            pub fn $getter(&self) -> $ty {
                match &self.value {
                    Some(Value::$member(v)) => <$ty>::try_from(*v).unwrap_or_default(),
                    _ => 0,
                }
            }

            pub fn $has(&self) -> bool {
                matches!(self.value, Some(Value::$member(_)))
            }
        )*
    };
}

// Empty slice on inactive.
macro_rules! array_accessors {
    ($($getter:ident, $has:ident => $member:ident: $elem:ty;)*) => {
        $(
            pub fn $getter(&self) -> &[$elem] {
                match &self.value {
                    Some(Value::$member(a)) => &a.values,
                    _ => &[],
                }
            }

            pub fn $has(&self) -> bool {
                matches!(self.value, Some(Value::$member(_)))
            }
        )*
    };
}

impl Variant {
    pub fn new(value: Value) -> Self {
        Self { kind: value.kind() as i32, value: Some(value) }
    }

    /// Replaces the active member, keeping `kind` in step.
    pub fn set(&mut self, value: Value) {
        self.kind = value.kind() as i32;
        self.value = Some(value);
    }

    pub fn clear(&mut self) {
        self.kind = Kind::Unknown as i32;
        self.value = None;
    }

    pub fn take(&mut self) -> Option<Value> {
        self.kind = Kind::Unknown as i32;
        self.value.take()
    }

    /// Kind of the active member, `Kind::Unknown` when nothing is set.
    pub fn which(&self) -> Kind {
        self.value.as_ref().map_or(Kind::Unknown, Value::kind)
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    scalar_accessors! {
        bool_value, has_bool_value => BoolValue: bool;
        int32_value, has_int32_value => Int32Value: i32;
        uint32_value, has_uint32_value => Uint32Value: u32;
        int64_value, has_int64_value => Int64Value: i64;
        uint64_value, has_uint64_value => Uint64Value: u64;
        float_value, has_float_value => FloatValue: f32;
        double_value, has_double_value => DoubleValue: f64;
    }

    narrow_accessors! {
        int8_value, has_int8_value => Int8Value: i8;
        uint8_value, has_uint8_value => Uint8Value: u8;
        int16_value, has_int16_value => Int16Value: i16;
        uint16_value, has_uint16_value => Uint16Value: u16;
    }

    array_accessors! {
        bool_array_value, has_bool_array_value => BoolArrayValue: bool;
        int8_array_value, has_int8_array_value => Int8ArrayValue: i32;
        uint8_array_value, has_uint8_array_value => Uint8ArrayValue: u32;
        int16_array_value, has_int16_array_value => Int16ArrayValue: i32;
        uint16_array_value, has_uint16_array_value => Uint16ArrayValue: u32;
        int32_array_value, has_int32_array_value => Int32ArrayValue: i32;
        uint32_array_value, has_uint32_array_value => Uint32ArrayValue: u32;
        int64_array_value, has_int64_array_value => Int64ArrayValue: i64;
        uint64_array_value, has_uint64_array_value => Uint64ArrayValue: u64;
        float_array_value, has_float_array_value => FloatArrayValue: f32;
        double_array_value, has_double_array_value => DoubleArrayValue: f64;
        char_array_value, has_char_array_value => CharArrayValue: u32;
        byte_array_value, has_byte_array_value => ByteArrayValue: Vec<u8>;
        string_array_value, has_string_array_value => StringArrayValue: String;
    }

    /// `'\0'` when inactive, U+FFFD when the stored value is not a Unicode
    /// scalar.
    pub fn char_value(&self) -> char {
        match &self.value {
            Some(Value::CharValue(c)) => char::from_u32(*c).unwrap_or(char::REPLACEMENT_CHARACTER),
            _ => '\0',
        }
    }

    pub fn has_char_value(&self) -> bool {
        matches!(self.value, Some(Value::CharValue(_)))
    }

    pub fn byte_value(&self) -> &[u8] {
        match &self.value {
            Some(Value::ByteValue(b)) => b,
            _ => &[],
        }
    }

    pub fn has_byte_value(&self) -> bool {
        matches!(self.value, Some(Value::ByteValue(_)))
    }

    pub fn string_value(&self) -> &str {
        match &self.value {
            Some(Value::StringValue(s)) => s,
            _ => "",
        }
    }

    pub fn has_string_value(&self) -> bool {
        matches!(self.value, Some(Value::StringValue(_)))
    }

    pub fn date_value(&self) -> Date {
        match &self.value {
            Some(Value::DateValue(d)) => *d,
            _ => Date::default(),
        }
    }

    pub fn has_date_value(&self) -> bool {
        matches!(self.value, Some(Value::DateValue(_)))
    }

    pub fn timestamp_value(&self) -> Timestamp {
        match &self.value {
            Some(Value::TimestampValue(t)) => *t,
            _ => Timestamp::default(),
        }
    }

    pub fn has_timestamp_value(&self) -> bool {
        matches!(self.value, Some(Value::TimestampValue(_)))
    }

    /// The nested dictionary, or a shared empty one when inactive.
    pub fn dict_value(&self) -> &Dictionary {
        match &self.value {
            Some(Value::DictValue(d)) => d,
            _ => &EMPTY_DICTIONARY,
        }
    }

    pub fn has_dict_value(&self) -> bool {
        matches!(self.value, Some(Value::DictValue(_)))
    }

    /// Switches to the `Dict` member if another one is active, then hands
    /// out the dictionary for in-place edits.
    pub fn dict_value_mut(&mut self) -> &mut Dictionary {
        if !self.has_dict_value() {
            self.set(Value::DictValue(Dictionary::new()));
        }
        match &mut self.value {
            Some(Value::DictValue(d)) => d,
            _ => unreachable!("dict member was just set"),
        }
    }

    /// Number of dictionary levels below this value; scalars are 0.
    pub fn dictionary_depth(&self) -> usize {
        match &self.value {
            Some(Value::DictValue(d)) => d.depth(),
            _ => 0,
        }
    }
}

impl From<Value> for Variant {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

macro_rules! variant_from {
    ($($ty:ty => |$v:ident| $member:expr;)*) => {
        $(
            impl From<$ty> for Variant {
                fn from($v: $ty) -> Self {
                    Self::new($member)
                }
            }
        )*
    };
}

variant_from! {
    bool => |v| Value::BoolValue(v);
    i8 => |v| Value::Int8Value(v.into());
    u8 => |v| Value::Uint8Value(v.into());
    i16 => |v| Value::Int16Value(v.into());
    u16 => |v| Value::Uint16Value(v.into());
    i32 => |v| Value::Int32Value(v);
    u32 => |v| Value::Uint32Value(v);
    i64 => |v| Value::Int64Value(v);
    u64 => |v| Value::Uint64Value(v);
    f32 => |v| Value::FloatValue(v);
    f64 => |v| Value::DoubleValue(v);
    char => |v| Value::CharValue(v.into());
    Vec<u8> => |v| Value::ByteValue(v);
    &[u8] => |v| Value::ByteValue(v.to_vec());
    String => |v| Value::StringValue(v);
    &str => |v| Value::StringValue(v.to_owned());
    Date => |v| Value::DateValue(v);
    Timestamp => |v| Value::TimestampValue(v);
    Dictionary => |v| Value::DictValue(v);
    BoolArray => |v| Value::BoolArrayValue(v);
    Int8Array => |v| Value::Int8ArrayValue(v);
    Uint8Array => |v| Value::Uint8ArrayValue(v);
    Int16Array => |v| Value::Int16ArrayValue(v);
    Uint16Array => |v| Value::Uint16ArrayValue(v);
    Int32Array => |v| Value::Int32ArrayValue(v);
    Uint32Array => |v| Value::Uint32ArrayValue(v);
    Int64Array => |v| Value::Int64ArrayValue(v);
    Uint64Array => |v| Value::Uint64ArrayValue(v);
    FloatArray => |v| Value::FloatArrayValue(v);
    DoubleArray => |v| Value::DoubleArrayValue(v);
    CharArray => |v| Value::CharArrayValue(v);
    ByteArray => |v| Value::ByteArrayValue(v);
    StringArray => |v| Value::StringArrayValue(v);
    // `Vec<u8>` is a byte string; build a `Uint8Array` explicitly.
    Vec<bool> => |v| Value::BoolArrayValue(v.into());
    Vec<i8> => |v| Value::Int8ArrayValue(v.into());
    Vec<i16> => |v| Value::Int16ArrayValue(v.into());
    Vec<u16> => |v| Value::Uint16ArrayValue(v.into());
    Vec<i32> => |v| Value::Int32ArrayValue(v.into());
    Vec<u32> => |v| Value::Uint32ArrayValue(v.into());
    Vec<i64> => |v| Value::Int64ArrayValue(v.into());
    Vec<u64> => |v| Value::Uint64ArrayValue(v.into());
    Vec<f32> => |v| Value::FloatArrayValue(v.into());
    Vec<f64> => |v| Value::DoubleArrayValue(v.into());
    Vec<char> => |v| Value::CharArrayValue(v.into());
    Vec<Vec<u8>> => |v| Value::ByteArrayValue(v.into());
    Vec<String> => |v| Value::StringArrayValue(v.into());
}
