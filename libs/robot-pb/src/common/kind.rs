/// Discriminant of a [`Variant`](super::Variant).
///
/// Wire values equal the field number of the matching `Variant` member, so
/// they are part of the wire contract and must never be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Kind {
    Unknown = 0,
    Bool = 2,
    Int8 = 3,
    Uint8 = 4,
    Int16 = 5,
    Uint16 = 6,
    Int32 = 7,
    Uint32 = 8,
    Int64 = 9,
    Uint64 = 10,
    Float = 11,
    Double = 12,
    Char = 13,
    Byte = 14,
    String = 15,
    Date = 16,
    Timestamp = 17,
    Dict = 18,
    BoolArray = 19,
    Int8Array = 20,
    Uint8Array = 21,
    Int16Array = 22,
    Uint16Array = 23,
    Int32Array = 24,
    Uint32Array = 25,
    Int64Array = 26,
    Uint64Array = 27,
    FloatArray = 28,
    DoubleArray = 29,
    CharArray = 30,
    ByteArray = 31,
    StringArray = 32,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Unknown => "Unknown",
            Kind::Bool => "Bool",
            Kind::Int8 => "Int8",
            Kind::Uint8 => "Uint8",
            Kind::Int16 => "Int16",
            Kind::Uint16 => "Uint16",
            Kind::Int32 => "Int32",
            Kind::Uint32 => "Uint32",
            Kind::Int64 => "Int64",
            Kind::Uint64 => "Uint64",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::Char => "Char",
            Kind::Byte => "Byte",
            Kind::String => "String",
            Kind::Date => "Date",
            Kind::Timestamp => "Timestamp",
            Kind::Dict => "Dict",
            Kind::BoolArray => "BoolArray",
            Kind::Int8Array => "Int8Array",
            Kind::Uint8Array => "Uint8Array",
            Kind::Int16Array => "Int16Array",
            Kind::Uint16Array => "Uint16Array",
            Kind::Int32Array => "Int32Array",
            Kind::Uint32Array => "Uint32Array",
            Kind::Int64Array => "Int64Array",
            Kind::Uint64Array => "Uint64Array",
            Kind::FloatArray => "FloatArray",
            Kind::DoubleArray => "DoubleArray",
            Kind::CharArray => "CharArray",
            Kind::ByteArray => "ByteArray",
            Kind::StringArray => "StringArray",
        }
    }

    /// Single primitive values, `Bool` through `String`.
    pub fn is_scalar(self) -> bool {
        (Kind::Bool as i32..=Kind::String as i32).contains(&(self as i32))
    }

    pub fn is_array(self) -> bool {
        (Kind::BoolArray as i32..=Kind::StringArray as i32).contains(&(self as i32))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
