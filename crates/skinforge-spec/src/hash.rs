//! Canonical hashing of documents.
//!
//! A document hash identifies a render request independent of key order
//! and whitespace, so two editors producing the same settings get the same
//! hash:
//!
//! ```text
//! document_hash = hex(BLAKE3(canonical_json(document)))
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::error::SpecError;

/// Canonical BLAKE3 hash of any serializable value.
///
/// # Example
/// ```
/// use skinforge_spec::{hash::canonical_hash, SkinSettings};
///
/// let a = canonical_hash(&SkinSettings::default()).unwrap();
/// let b = canonical_hash(&SkinSettings::default()).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<String, SpecError> {
    let value = serde_json::to_value(value)?;
    Ok(blake3::hash(canonicalize_json(&value).as_bytes())
        .to_hex()
        .to_string())
}

/// Render a JSON value with sorted keys, no whitespace, and integral
/// floats written without a fraction.
pub fn canonicalize_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, &map[key]);
            }
            out.push('}');
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if !f.is_finite() => "null".to_string(),
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => "null".to_string(),
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_are_sorted_and_whitespace_dropped() {
        let v: Value = serde_json::from_str(r#"{ "b": 1, "a": [true, null, "x"] }"#).unwrap();
        assert_eq!(canonicalize_json(&v), r#"{"a":[true,null,"x"],"b":1}"#);
    }

    #[test]
    fn integral_floats_match_integers() {
        let a: Value = serde_json::from_str(r#"{"n": 2.0}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"n": 2}"#).unwrap();
        assert_eq!(canonicalize_json(&a), canonicalize_json(&b));
        let c: Value = serde_json::from_str(r#"{"n": 0.25}"#).unwrap();
        assert_eq!(canonicalize_json(&c), r#"{"n":0.25}"#);
    }

    #[test]
    fn control_characters_are_escaped() {
        let v = Value::String("a\u{1}b\n".to_string());
        assert_eq!(canonicalize_json(&v), "\"a\\u0001b\\n\"");
    }
}
