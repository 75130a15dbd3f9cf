//! Human-readable rendering of variant trees, one value per line.
//!
//! ```text
//! Dict: 2 items
//!   flag: Bool: true
//!   pose: Dict: 1 items
//!     x: Double: 1.5
//! ```

use std::fmt::{self, Display, Write};

use crate::common::variant::Value;
use crate::common::{Dictionary, Variant};

const INDENT: &str = "  ";

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_variant(f, self, 0)
    }
}

/// Entries only, without a `Dict:` header line.
impl Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self, 0)
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, dict: &Dictionary, level: usize) -> fmt::Result {
    for (key, value) in dict {
        write!(f, "{}{key}: ", INDENT.repeat(level))?;
        write_variant(f, value, level)?;
    }
    Ok(())
}

fn write_variant(f: &mut fmt::Formatter<'_>, variant: &Variant, level: usize) -> fmt::Result {
    let Some(value) = &variant.value else {
        return writeln!(f, "Unset");
    };
    write!(f, "{}: ", value.kind())?;
    match value {
        Value::BoolValue(v) => writeln!(f, "{v}"),
        Value::Int8Value(v) | Value::Int16Value(v) | Value::Int32Value(v) => writeln!(f, "{v}"),
        Value::Uint8Value(v) | Value::Uint16Value(v) | Value::Uint32Value(v) => writeln!(f, "{v}"),
        Value::Int64Value(v) => writeln!(f, "{v}"),
        Value::Uint64Value(v) => writeln!(f, "{v}"),
        Value::FloatValue(v) => writeln!(f, "{v}"),
        Value::DoubleValue(v) => writeln!(f, "{v}"),
        Value::CharValue(_) => writeln!(f, "{}", variant.char_value()),
        Value::ByteValue(b) => writeln!(f, "{}", hex(b)),
        Value::StringValue(s) => writeln!(f, "{s}"),
        Value::DateValue(d) => writeln!(f, "{:04}-{:02}-{:02}", d.year, d.month, d.day),
        Value::TimestampValue(t) => writeln!(f, "{}.{:09}", t.seconds, t.nanos),
        Value::DictValue(d) => {
            writeln!(f, "{} items", d.len())?;
            write_entries(f, d, level + 1)
        }
        Value::BoolArrayValue(a) => write_list(f, &a.values),
        Value::Int8ArrayValue(a) => write_list(f, &a.values),
        Value::Uint8ArrayValue(a) => write_list(f, &a.values),
        Value::Int16ArrayValue(a) => write_list(f, &a.values),
        Value::Uint16ArrayValue(a) => write_list(f, &a.values),
        Value::Int32ArrayValue(a) => write_list(f, &a.values),
        Value::Uint32ArrayValue(a) => write_list(f, &a.values),
        Value::Int64ArrayValue(a) => write_list(f, &a.values),
        Value::Uint64ArrayValue(a) => write_list(f, &a.values),
        Value::FloatArrayValue(a) => write_list(f, &a.values),
        Value::DoubleArrayValue(a) => write_list(f, &a.values),
        Value::CharArrayValue(a) => write_list(f, &a.chars().collect::<Vec<_>>()),
        Value::ByteArrayValue(a) => {
            write_list(f, &a.values.iter().map(|b| hex(b)).collect::<Vec<_>>())
        }
        Value::StringArrayValue(a) => write_list(f, &a.values),
    }
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    let mut first = true;
    for item in items {
        if !first {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
        first = false;
    }
    writeln!(f)
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}
