//! Encoding and checked decoding of payload messages.
//!
//! `prost` handles the wire format. On top of it, [`Codec::decode`] runs a
//! [`Checker`] over the decoded tree, because the schema itself cannot
//! bound dictionary nesting or tie the `kind` tag to the active member:
//!
//! - nesting deeper than [`CodecConfig::max_depth`] dictionaries fails with
//!   [`Error::RecursionLimitExceeded`];
//! - a `kind` tag this build does not know, with no known member set, fails
//!   with [`Error::UnknownVariant`]. Values written by a newer schema are
//!   surfaced, not carried along opaquely. This relies on the writer
//!   sending `kind`: a member this build does not know, sent without a
//!   tag, is skipped as an unknown field and decodes as an empty variant;
//! - a known `kind` tag that disagrees with the active member fails with
//!   [`Error::MalformedEncoding`]. A zero tag is accepted and the kind is
//!   taken from the member;
//! - with [`CodecConfig::validate_ranges`] set, dates, timestamps, narrow
//!   integers and chars are range checked ([`Error::FieldOutOfRange`]).
//!
//! Legacy typed variants nest at most [`LEGACY_MAX_DEPTH`] levels whatever
//! the configured limit. If `prost`'s own guard fires first it is reported
//! as [`Error::RecursionLimitExceeded`] with the limit in effect.
//!
//! A failed decode never hands back a partial message.

use prost::Message;
use serde::Deserialize;

use crate::common::variant::Value;
use crate::common::{Dictionary, Kind, Variant};
use crate::error::{Error, Result};
use crate::legacy::{TypedVariant, typed_variant};

/// Default bound on dictionary nesting.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Ceiling for [`CodecConfig::max_depth`]. Each dictionary level costs
/// three levels of `prost`'s own nesting guard (100) and envelopes add at
/// most two, so up to 33 levels decode before `prost` objects.
pub const MAX_DEPTH: usize = 30;

/// Ceiling for legacy typed variants. A legacy map level costs four
/// `prost` levels (wrapper, map message, entry, typed variant), so a
/// scalar inside 25 nested maps already trips `prost`'s guard.
pub const LEGACY_MAX_DEPTH: usize = 24;

const PROST_RECURSION: &str = "recursion limit reached";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum dictionary nesting accepted on decode.
    pub max_depth: usize,
    /// Check dates, timestamps, narrow integers and chars on decode.
    pub validate_ranges: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            validate_ranges: false,
        }
    }
}

/// Stateless and `Copy`; share freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    max_depth: usize,
    validate_ranges: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        let max_depth = if config.max_depth > MAX_DEPTH {
            tracing::warn!(
                requested = config.max_depth,
                ceiling = MAX_DEPTH,
                "max_depth clamped"
            );
            MAX_DEPTH
        } else {
            config.max_depth
        };
        Self {
            max_depth,
            validate_ranges: config.validate_ranges,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn validates_ranges(&self) -> bool {
        self.validate_ranges
    }

    /// Infallible: every in-memory message has an encoding. An empty
    /// variant encodes to zero bytes.
    pub fn encode<M: Payload>(&self, message: &M) -> Vec<u8> {
        let bytes = message.encode_to_vec();
        tracing::debug!(
            message = std::any::type_name::<M>(),
            len = bytes.len(),
            "encoded"
        );
        bytes
    }

    pub fn decode<M: Payload>(&self, bytes: &[u8]) -> Result<M> {
        let message = M::decode(bytes).map_err(|e| self.decode_error::<M>(e))?;
        self.check(&message)?;
        tracing::debug!(
            message = std::any::type_name::<M>(),
            len = bytes.len(),
            "decoded"
        );
        Ok(message)
    }

    /// Nesting limit applied to `M`: the configured one, lowered to the
    /// message's own ceiling.
    pub fn depth_limit<M: Payload>(&self) -> usize {
        self.max_depth.min(M::DEPTH_CEILING)
    }

    fn decode_error<M: Payload>(&self, e: prost::DecodeError) -> Error {
        if e.to_string().contains(PROST_RECURSION) {
            Error::RecursionLimitExceeded {
                limit: self.depth_limit::<M>(),
            }
        } else {
            e.into()
        }
    }

    /// Runs the decode-time checks on an in-memory message.
    pub fn check<M: Payload>(&self, message: &M) -> Result<()> {
        message.check(&mut Checker { codec: *self })
    }
}

pub fn encode_variant(variant: &Variant) -> Vec<u8> {
    Codec::default().encode(variant)
}

pub fn decode_variant(bytes: &[u8]) -> Result<Variant> {
    Codec::default().decode(bytes)
}

pub fn encode_dictionary(dictionary: &Dictionary) -> Vec<u8> {
    Codec::default().encode(dictionary)
}

pub fn decode_dictionary(bytes: &[u8]) -> Result<Dictionary> {
    Codec::default().decode(bytes)
}

/// A top-level message the codec can encode and decode.
///
/// Implementors hand every variant, dictionary or legacy typed variant they
/// carry to the checker. Messages without such fields keep the default.
pub trait Payload: Message + Default {
    /// Highest nesting depth this message can be decoded at.
    const DEPTH_CEILING: usize = MAX_DEPTH;

    fn check(&self, _checker: &mut Checker) -> Result<()> {
        Ok(())
    }
}

/// Walks a decoded tree applying the codec's limits.
pub struct Checker {
    codec: Codec,
}

impl Checker {
    pub fn variant(&mut self, variant: &Variant) -> Result<()> {
        self.variant_at(variant, 0)
    }

    pub fn dictionary(&mut self, dictionary: &Dictionary) -> Result<()> {
        self.dictionary_at(dictionary, 1)
    }

    pub fn optional_dictionary(&mut self, dictionary: Option<&Dictionary>) -> Result<()> {
        dictionary.map_or(Ok(()), |d| self.dictionary(d))
    }

    pub fn typed_variant(&mut self, variant: &TypedVariant) -> Result<()> {
        self.typed_variant_at(variant, 0)
    }

    fn dictionary_at(&mut self, dictionary: &Dictionary, depth: usize) -> Result<()> {
        if depth > self.codec.max_depth {
            return Err(Error::RecursionLimitExceeded {
                limit: self.codec.max_depth,
            });
        }
        for variant in dictionary.key_value_list.values() {
            self.variant_at(variant, depth)?;
        }
        Ok(())
    }

    fn variant_at(&mut self, variant: &Variant, depth: usize) -> Result<()> {
        check_discriminant(variant)?;
        match &variant.value {
            Some(Value::DictValue(d)) => self.dictionary_at(d, depth + 1),
            Some(value) if self.codec.validate_ranges => check_range(value),
            _ => Ok(()),
        }
    }

    /// Elements of a legacy array or map, one level below the caller.
    pub fn typed_variants<'a>(
        &mut self,
        children: impl IntoIterator<Item = &'a TypedVariant>,
    ) -> Result<()> {
        self.typed_level(children, 0)
    }

    // Arrays and maps of the legacy generation count as nesting levels.
    fn typed_variant_at(&mut self, variant: &TypedVariant, depth: usize) -> Result<()> {
        match &variant.value {
            Some(typed_variant::Value::ArrayVal(a)) => {
                self.typed_level(a.value.iter().flat_map(|arr| arr.values.iter()), depth)
            }
            Some(typed_variant::Value::MapVal(m)) => {
                self.typed_level(m.value.iter().flat_map(|map| map.values.values()), depth)
            }
            _ => Ok(()),
        }
    }

    fn typed_level<'a>(
        &mut self,
        children: impl IntoIterator<Item = &'a TypedVariant>,
        depth: usize,
    ) -> Result<()> {
        let limit = self.codec.max_depth.min(LEGACY_MAX_DEPTH);
        if depth + 1 > limit {
            return Err(Error::RecursionLimitExceeded { limit });
        }
        for child in children {
            self.typed_variant_at(child, depth + 1)?;
        }
        Ok(())
    }
}

fn check_discriminant(variant: &Variant) -> Result<()> {
    let tagged = Kind::try_from(variant.kind);
    match (tagged, &variant.value) {
        (Err(_), None) => Err(Error::UnknownVariant(variant.kind)),
        (Err(_), Some(value)) => Err(Error::MalformedEncoding(format!(
            "kind tag {} set on a {} member",
            variant.kind,
            value.kind()
        ))),
        (Ok(Kind::Unknown), _) => Ok(()),
        (Ok(kind), None) => Err(Error::MalformedEncoding(format!(
            "kind tag {kind} set without a value"
        ))),
        (Ok(kind), Some(value)) if kind != value.kind() => Err(Error::MalformedEncoding(format!(
            "kind tag {kind} set on a {} member",
            value.kind()
        ))),
        _ => Ok(()),
    }
}

fn out_of_range(field: &'static str, detail: impl ToString) -> Error {
    Error::FieldOutOfRange {
        field,
        detail: detail.to_string(),
    }
}

fn check_elements<T: Copy + ToString>(
    field: &'static str,
    values: &[T],
    fits: impl Fn(T) -> bool,
) -> Result<()> {
    match values.iter().copied().find(|&v| !fits(v)) {
        Some(v) => Err(out_of_range(field, v)),
        None => Ok(()),
    }
}

fn check_range(value: &Value) -> Result<()> {
    match value {
        Value::Int8Value(v) => check_elements("int8_value", &[*v], |v| i8::try_from(v).is_ok()),
        Value::Uint8Value(v) => check_elements("uint8_value", &[*v], |v| u8::try_from(v).is_ok()),
        Value::Int16Value(v) => check_elements("int16_value", &[*v], |v| i16::try_from(v).is_ok()),
        Value::Uint16Value(v) => {
            check_elements("uint16_value", &[*v], |v| u16::try_from(v).is_ok())
        }
        Value::CharValue(v) => check_elements("char_value", &[*v], |v| char::from_u32(v).is_some()),
        Value::DateValue(d) => match d.to_naive() {
            Some(_) => Ok(()),
            None => Err(out_of_range(
                "date_value",
                format!("{}-{}-{}", d.year, d.month, d.day),
            )),
        },
        Value::TimestampValue(t) if !t.is_normalized() => {
            Err(out_of_range("timestamp_value.nanos", t.nanos))
        }
        Value::Int8ArrayValue(a) => {
            check_elements("int8_array_value", &a.values, |v| i8::try_from(v).is_ok())
        }
        Value::Uint8ArrayValue(a) => {
            check_elements("uint8_array_value", &a.values, |v| u8::try_from(v).is_ok())
        }
        Value::Int16ArrayValue(a) => {
            check_elements("int16_array_value", &a.values, |v| i16::try_from(v).is_ok())
        }
        Value::Uint16ArrayValue(a) => {
            check_elements("uint16_array_value", &a.values, |v| u16::try_from(v).is_ok())
        }
        Value::CharArrayValue(a) => {
            check_elements("char_array_value", &a.values, |v| char::from_u32(v).is_some())
        }
        _ => Ok(()),
    }
}

impl Payload for Variant {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.variant(self)
    }
}

impl Payload for Dictionary {
    fn check(&self, checker: &mut Checker) -> Result<()> {
        checker.dictionary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Date, Int8Array, Timestamp};

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
    fn config_clamps_to_ceiling() {
        let codec = Codec::new(CodecConfig {
            max_depth: 500,
            validate_ranges: false,
        });
        assert_eq!(codec.max_depth(), MAX_DEPTH);
        assert_eq!(Codec::default().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn depth_limit_is_inclusive() {
        let codec = Codec::new(CodecConfig {
            max_depth: 3,
            validate_ranges: false,
        });
        assert!(codec.check(&nested(3)).is_ok());
        assert_eq!(
            codec.check(&nested(4)),
            Err(Error::RecursionLimitExceeded { limit: 3 })
        );
        // a variant is level 0, its dictionary level 1
        assert!(codec.check(&Variant::from(nested(3))).is_ok());
        assert_eq!(
            codec.check(&Variant::from(nested(4))),
            Err(Error::RecursionLimitExceeded { limit: 3 })
        );
    }

    #[test]
    fn legacy_limit_is_lowered_to_its_ceiling() {
        let codec = Codec::new(CodecConfig {
            max_depth: MAX_DEPTH,
            validate_ranges: false,
        });
        assert_eq!(codec.depth_limit::<Dictionary>(), MAX_DEPTH);
        assert_eq!(codec.depth_limit::<TypedVariant>(), LEGACY_MAX_DEPTH);
        assert_eq!(Codec::default().depth_limit::<TypedVariant>(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn discriminant_consistency() {
        let mut v = Variant::from(5);
        assert!(check_discriminant(&v).is_ok());

        v.kind = Kind::String as i32;
        assert!(matches!(check_discriminant(&v), Err(Error::MalformedEncoding(_))));

        v.kind = 0;
        assert!(check_discriminant(&v).is_ok());

        let orphan = Variant { kind: Kind::Bool as i32, value: None };
        assert!(matches!(check_discriminant(&orphan), Err(Error::MalformedEncoding(_))));

        let future = Variant { kind: 77, value: None };
        assert_eq!(check_discriminant(&future), Err(Error::UnknownVariant(77)));
    }

    #[test]
    fn ranges_checked_only_when_enabled() {
        let strict = Codec::new(CodecConfig {
            validate_ranges: true,
            ..CodecConfig::default()
        });
        let lenient = Codec::default();

        let bad_date = Variant::from(Date::new(2023, 2, 30));
        assert!(lenient.check(&bad_date).is_ok());
        assert!(matches!(
            strict.check(&bad_date),
            Err(Error::FieldOutOfRange { field: "date_value", .. })
        ));

        let bad_ts = Variant::from(Timestamp::new(1, 1_000_000_000));
        assert!(strict.check(&bad_ts).is_err());

        let bad_int8 = Variant::from(Int8Array::from(vec![1i32, 200]));
        assert_eq!(
            strict.check(&bad_int8),
            Err(Error::FieldOutOfRange {
                field: "int8_array_value",
                detail: "200".into()
            })
        );

        let mut dict = Dictionary::new();
        dict.insert("ok", Date::new(2024, 2, 29));
        dict.insert("char", Variant::new(Value::CharValue(0x11_0000)));
        assert!(strict.check(&dict).is_err());
    }
}
