//! The earlier typed-variant schema generation
//! (`proto/legacy/typed_variant.proto`).
//!
//! Deprecated. Every scalar is wrapped in a `Typed*` message carrying its
//! own [`VariantType`], and [`VariantType`] numbers differ from
//! [`Kind`](crate::Kind) (`BOOL` is 7 here, 2 there). The two generations are
//! not wire-compatible and no conversion between them is provided; decode
//! legacy bytes only with these types.

use crate::codec::{Checker, LEGACY_MAX_DEPTH, Payload};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VariantType {
    Unknown = 0,
    Int32 = 1,
    Int64 = 2,
    Uint32 = 3,
    Uint64 = 4,
    Float = 5,
    Double = 6,
    Bool = 7,
    String = 8,
    Binary = 9,
    Array = 10,
    Map = 11,
}

macro_rules! typed_wrapper {
    ($name:ident, [$($prost:tt)*], $ty:ty, $variant_type:expr) => {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct $name {
            #[prost(enumeration = "VariantType", tag = "1")]
            pub value_type: i32,
            #[prost($($prost)*, tag = "2")]
            pub value: $ty,
        }

        impl $name {
            pub fn new(value: $ty) -> Self {
                Self { value_type: $variant_type as i32, value }
            }
        }
    };
}

typed_wrapper!(TypedInt32, [int32], i32, VariantType::Int32);
typed_wrapper!(TypedInt64, [int64], i64, VariantType::Int64);
typed_wrapper!(TypedUInt32, [uint32], u32, VariantType::Uint32);
typed_wrapper!(TypedUInt64, [uint64], u64, VariantType::Uint64);
typed_wrapper!(TypedFloat, [float], f32, VariantType::Float);
typed_wrapper!(TypedDouble, [double], f64, VariantType::Double);
typed_wrapper!(TypedBool, [bool], bool, VariantType::Bool);
typed_wrapper!(TypedString, [string], ::prost::alloc::string::String, VariantType::String);
typed_wrapper!(TypedBinary, [bytes = "vec"], ::prost::alloc::vec::Vec<u8>, VariantType::Binary);
typed_wrapper!(TypedArray, [message, optional], ::core::option::Option<VariantArray>, VariantType::Array);
typed_wrapper!(TypedMap, [message, optional], ::core::option::Option<VariantMap>, VariantType::Map);

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TypedVariant {
    #[prost(oneof = "typed_variant::Value", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11")]
    pub value: ::core::option::Option<typed_variant::Value>,
}

pub mod typed_variant {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Int32Val(super::TypedInt32),
        #[prost(message, tag = "2")]
        Int64Val(super::TypedInt64),
        #[prost(message, tag = "3")]
        Uint32Val(super::TypedUInt32),
        #[prost(message, tag = "4")]
        Uint64Val(super::TypedUInt64),
        #[prost(message, tag = "5")]
        FloatVal(super::TypedFloat),
        #[prost(message, tag = "6")]
        DoubleVal(super::TypedDouble),
        #[prost(message, tag = "7")]
        BoolVal(super::TypedBool),
        #[prost(message, tag = "8")]
        StringVal(super::TypedString),
        #[prost(message, tag = "9")]
        BinaryVal(super::TypedBinary),
        #[prost(message, tag = "10")]
        ArrayVal(super::TypedArray),
        #[prost(message, tag = "11")]
        MapVal(super::TypedMap),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VariantArray {
    #[prost(message, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<TypedVariant>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VariantMap {
    #[prost(btree_map = "string, message", tag = "1")]
    pub values: ::std::collections::BTreeMap<::prost::alloc::string::String, TypedVariant>,
}

impl TypedVariant {
    pub fn new(value: typed_variant::Value) -> Self {
        Self { value: Some(value) }
    }

    /// Type of the active wrapper as the wrapper itself records it.
    pub fn value_type(&self) -> VariantType {
        use typed_variant::Value;
        let raw = match &self.value {
            Some(Value::Int32Val(v)) => v.value_type,
            Some(Value::Int64Val(v)) => v.value_type,
            Some(Value::Uint32Val(v)) => v.value_type,
            Some(Value::Uint64Val(v)) => v.value_type,
            Some(Value::FloatVal(v)) => v.value_type,
            Some(Value::DoubleVal(v)) => v.value_type,
            Some(Value::BoolVal(v)) => v.value_type,
            Some(Value::StringVal(v)) => v.value_type,
            Some(Value::BinaryVal(v)) => v.value_type,
            Some(Value::ArrayVal(v)) => v.value_type,
            Some(Value::MapVal(v)) => v.value_type,
            None => 0,
        };
        VariantType::try_from(raw).unwrap_or(VariantType::Unknown)
    }
}

macro_rules! typed_variant_from {
    ($($ty:ty => $member:ident($wrapper:ident);)*) => {
        $(
            impl From<$ty> for TypedVariant {
                fn from(v: $ty) -> Self {
                    Self::new(typed_variant::Value::$member($wrapper::new(v)))
                }
            }
        )*
    };
}

typed_variant_from! {
    i32 => Int32Val(TypedInt32);
    i64 => Int64Val(TypedInt64);
    u32 => Uint32Val(TypedUInt32);
    u64 => Uint64Val(TypedUInt64);
    f32 => FloatVal(TypedFloat);
    f64 => DoubleVal(TypedDouble);
    bool => BoolVal(TypedBool);
    String => StringVal(TypedString);
    Vec<u8> => BinaryVal(TypedBinary);
}

impl From<&str> for TypedVariant {
    fn from(v: &str) -> Self {
        v.to_owned().into()
    }
}

impl From<VariantArray> for TypedVariant {
    fn from(v: VariantArray) -> Self {
        Self::new(typed_variant::Value::ArrayVal(TypedArray::new(Some(v))))
    }
}

impl From<VariantMap> for TypedVariant {
    fn from(v: VariantMap) -> Self {
        Self::new(typed_variant::Value::MapVal(TypedMap::new(Some(v))))
    }
}

impl<T: Into<TypedVariant>> FromIterator<T> for VariantArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(Into::into).collect() }
    }
}

impl<K: Into<String>, V: Into<TypedVariant>> FromIterator<(K, V)> for VariantMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Payload for TypedVariant {
    const DEPTH_CEILING: usize = LEGACY_MAX_DEPTH;

    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.typed_variant(self)
    }
}

impl Payload for VariantArray {
    const DEPTH_CEILING: usize = LEGACY_MAX_DEPTH;

    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.typed_variants(&self.values)
    }
}

impl Payload for VariantMap {
    const DEPTH_CEILING: usize = LEGACY_MAX_DEPTH;

    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.typed_variants(self.values.values())
    }
}
