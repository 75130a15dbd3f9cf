//! One message per scalar kind, each a single `repeated` field.
//!
//! 8- and 16-bit kinds travel widened to 32 bits; the `From` impls accept
//! the native element type.

macro_rules! array_message {
    ($(#[$doc:meta])* $name:ident, [$($prost:tt)*], $elem:ty) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct $name {
            #[prost($($prost)*, repeated, tag = "1")]
            pub values: ::prost::alloc::vec::Vec<$elem>,
        }

        impl $name {
            pub fn len(&self) -> usize {
                self.values.len()
            }

            pub fn is_empty(&self) -> bool {
                self.values.is_empty()
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(values: Vec<$elem>) -> Self {
                Self { values }
            }
        }
    };
}

macro_rules! widen_from {
    ($name:ident, $native:ty) => {
        impl From<Vec<$native>> for $name {
            fn from(values: Vec<$native>) -> Self {
                Self { values: values.into_iter().map(Into::into).collect() }
            }
        }
    };
}

array_message!(BoolArray, [bool], bool);
array_message!(
    /// int8 elements widened to `int32`.
    Int8Array, [int32], i32
);
array_message!(
    /// uint8 elements widened to `uint32`.
    Uint8Array, [uint32], u32
);
array_message!(Int16Array, [int32], i32);
array_message!(Uint16Array, [uint32], u32);
array_message!(Int32Array, [int32], i32);
array_message!(Uint32Array, [uint32], u32);
array_message!(Int64Array, [int64], i64);
array_message!(Uint64Array, [uint64], u64);
array_message!(FloatArray, [float], f32);
array_message!(DoubleArray, [double], f64);
array_message!(
    /// Unicode scalar values.
    CharArray, [uint32], u32
);
array_message!(ByteArray, [bytes = "vec"], ::prost::alloc::vec::Vec<u8>);
array_message!(StringArray, [string], ::prost::alloc::string::String);

widen_from!(Int8Array, i8);
widen_from!(Uint8Array, u8);
widen_from!(Int16Array, i16);
widen_from!(Uint16Array, u16);
widen_from!(CharArray, char);

impl From<Vec<&str>> for StringArray {
    fn from(values: Vec<&str>) -> Self {
        Self { values: values.into_iter().map(str::to_owned).collect() }
    }
}

impl CharArray {
    /// Decoded characters; invalid scalar values become U+FFFD.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.values
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}
