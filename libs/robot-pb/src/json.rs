//! Conversion between [`Variant`] trees and `serde_json` values.
//!
//! JSON has fewer types than a variant, so the mapping is lossy going out
//! and picks the widest kind coming back in: every integer becomes
//! `Int64` (or `Uint64` above `i64::MAX`), every fraction `Double`, every
//! string `String`. Dates and timestamps are rendered as strings and come
//! back as strings.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::SecondsFormat;
use serde_json::{Map, Number, Value as Json, json};

use crate::common::variant::Value;
use crate::common::{Date, Dictionary, Timestamp, Variant};
use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════
//  Variant → JSON
// ═══════════════════════════════════════════════════════════════

pub fn to_json(variant: &Variant) -> Json {
    let Some(value) = &variant.value else {
        return Json::Null;
    };
    match value {
        Value::BoolValue(b) => Json::Bool(*b),
        Value::Int8Value(v) | Value::Int16Value(v) | Value::Int32Value(v) => json!(v),
        Value::Uint8Value(v) | Value::Uint16Value(v) | Value::Uint32Value(v) => json!(v),
        Value::Int64Value(v) => json!(v),
        Value::Uint64Value(v) => json!(v),
        Value::FloatValue(v) => json!(v),
        Value::DoubleValue(v) => json!(v),
        Value::CharValue(_) => Json::String(variant.char_value().to_string()),
        Value::ByteValue(b) => Json::String(STANDARD.encode(b)),
        Value::StringValue(s) => Json::String(s.clone()),
        Value::DateValue(d) => date_to_json(d),
        Value::TimestampValue(t) => timestamp_to_json(t),
        Value::DictValue(d) => dictionary_to_json(d),
        Value::BoolArrayValue(a) => json!(a.values),
        Value::Int8ArrayValue(a) => json!(a.values),
        Value::Uint8ArrayValue(a) => json!(a.values),
        Value::Int16ArrayValue(a) => json!(a.values),
        Value::Uint16ArrayValue(a) => json!(a.values),
        Value::Int32ArrayValue(a) => json!(a.values),
        Value::Uint32ArrayValue(a) => json!(a.values),
        Value::Int64ArrayValue(a) => json!(a.values),
        Value::Uint64ArrayValue(a) => json!(a.values),
        Value::FloatArrayValue(a) => json!(a.values),
        Value::DoubleArrayValue(a) => json!(a.values),
        Value::CharArrayValue(a) => {
            Json::Array(a.chars().map(|c| Json::String(c.to_string())).collect())
        }
        Value::ByteArrayValue(a) => Json::Array(
            a.values
                .iter()
                .map(|b| Json::String(STANDARD.encode(b)))
                .collect(),
        ),
        Value::StringArrayValue(a) => json!(a.values),
    }
}

pub fn dictionary_to_json(dictionary: &Dictionary) -> Json {
    let map: Map<String, Json> = dictionary
        .iter()
        .map(|(k, v)| (k.clone(), to_json(v)))
        .collect();
    Json::Object(map)
}

fn date_to_json(date: &Date) -> Json {
    Json::String(format!("{:04}-{:02}-{:02}", date.year, date.month, date.day))
}

// Falls back to the raw pair when chrono cannot represent the instant.
fn timestamp_to_json(ts: &Timestamp) -> Json {
    match ts.to_datetime() {
        Some(dt) => Json::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => json!({ "seconds": ts.seconds, "nanos": ts.nanos }),
    }
}

// ═══════════════════════════════════════════════════════════════
//  JSON → Variant
// ═══════════════════════════════════════════════════════════════

pub fn from_json(value: &Json) -> Result<Variant> {
    Ok(match value {
        Json::Null => Variant::default(),
        Json::Bool(b) => Variant::from(*b),
        Json::Number(n) => number_to_variant(n)?,
        Json::String(s) => Variant::from(s.as_str()),
        Json::Object(map) => Variant::from(object_to_dictionary(map)?),
        Json::Array(items) => array_to_variant(items)?,
    })
}

/// The top level must be a JSON object.
pub fn dictionary_from_json(value: &Json) -> Result<Dictionary> {
    match value {
        Json::Object(map) => object_to_dictionary(map),
        other => Err(Error::Unrepresentable(format!(
            "expected a JSON object, got {}",
            json_type(other)
        ))),
    }
}

fn object_to_dictionary(map: &Map<String, Json>) -> Result<Dictionary> {
    let mut dict = Dictionary::new();
    for (key, value) in map {
        dict.insert(key.as_str(), from_json(value)?);
    }
    Ok(dict)
}

fn number_to_variant(n: &Number) -> Result<Variant> {
    if let Some(i) = n.as_i64() {
        Ok(Variant::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Variant::from(u))
    } else if let Some(f) = n.as_f64() {
        Ok(Variant::from(f))
    } else {
        Err(Error::Unrepresentable(format!("number {n}")))
    }
}

// Element kind chosen for a JSON array, widened as elements are seen.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NumericClass {
    Signed,
    Unsigned,
    Float,
}

fn array_to_variant(items: &[Json]) -> Result<Variant> {
    let Some(first) = items.first() else {
        return Err(Error::Unrepresentable(
            "empty JSON array has no element kind".to_string(),
        ));
    };
    match first {
        Json::Bool(_) => items
            .iter()
            .map(|v| v.as_bool().ok_or_else(|| mixed(v)))
            .collect::<Result<Vec<bool>>>()
            .map(Variant::from),
        Json::String(_) => items
            .iter()
            .map(|v| v.as_str().map(str::to_owned).ok_or_else(|| mixed(v)))
            .collect::<Result<Vec<String>>>()
            .map(Variant::from),
        Json::Number(_) => numeric_array(items),
        other => Err(Error::Unrepresentable(format!(
            "arrays of {} are not supported",
            json_type(other)
        ))),
    }
}

fn numeric_array(items: &[Json]) -> Result<Variant> {
    let mut class = NumericClass::Signed;
    for item in items {
        let Json::Number(n) = item else {
            return Err(mixed(item));
        };
        let seen = if n.is_i64() {
            NumericClass::Signed
        } else if n.is_u64() {
            NumericClass::Unsigned
        } else {
            NumericClass::Float
        };
        class = class.max(seen);
    }
    let numbers = items.iter().filter_map(|v| match v {
        Json::Number(n) => Some(n),
        _ => None,
    });
    Ok(match class {
        NumericClass::Signed => Variant::from(numbers.filter_map(Number::as_i64).collect::<Vec<_>>()),
        NumericClass::Unsigned => {
            // negatives and u64 overflow cannot share one integer kind
            let values: Option<Vec<u64>> = numbers.map(Number::as_u64).collect();
            match values {
                Some(values) => Variant::from(values),
                None => {
                    return Err(Error::Unrepresentable(
                        "array mixes negative integers with integers above i64::MAX".to_string(),
                    ));
                }
            }
        }
        NumericClass::Float => Variant::from(numbers.filter_map(Number::as_f64).collect::<Vec<_>>()),
    })
}

fn mixed(item: &Json) -> Error {
    Error::Unrepresentable(format!(
        "heterogeneous JSON array (found {})",
        json_type(item)
    ))
}

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
