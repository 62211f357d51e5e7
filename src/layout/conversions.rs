use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::xdf::format::format_float;

/// A loosely typed scalar: map names, labels and display bounds may be written
/// either as strings or as numbers and are rendered back verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(v) => f.write_str(&format_float(*v)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Decodes an already parsed value, dropping it with a warning when it has the wrong shape.
pub fn from_loose<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match T::deserialize(&value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Ignoring malformed value {value}: {e}");
            None
        }
    }
}

/// `deserialize_with` hook for optional fields: wrong types are ignored instead of
/// failing the whole document.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_loose(value))
}

/// Like [`lenient`], but falls back to `T::default()`.
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Optional float that may also be written as a numeric string (`"0.5"`, `" -40 "`).
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    if number.is_none() {
        tracing::warn!("Ignoring non-numeric value {value}");
    }
    Ok(number)
}

/// Truthiness of a flag field: `true`, non-zero numbers and non-empty strings count as set.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Optional nested object which counts as absent when empty or falsy.
pub fn non_empty_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    if !value.is_object() {
        tracing::warn!("Ignoring non-object axis definition {value}");
        return Ok(None);
    }
    Ok(from_loose(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "truthy")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient")]
        label: Option<Scalar>,
        #[serde(default, deserialize_with = "lenient_number")]
        ratio: Option<f64>,
    }

    #[test]
    fn wrong_types_are_dropped() {
        let sample: Sample =
            serde_json::from_value(json!({ "count": "twelve", "label": [1, 2] })).unwrap();
        assert_eq!(sample.count, None);
        assert_eq!(sample.label, None);
        assert!(!sample.flag);
    }

    #[test]
    fn numbers_may_be_written_as_strings() {
        for (raw, expected) in [
            (json!(0.5), Some(0.5)),
            (json!(2), Some(2.0)),
            (json!("0.5"), Some(0.5)),
            (json!(" -40 "), Some(-40.0)),
            (json!("fast"), None),
            (json!([1]), None),
            (json!(null), None),
        ] {
            let sample: Sample = serde_json::from_value(json!({ "ratio": raw })).unwrap();
            assert_eq!(sample.ratio, expected);
        }
    }

    #[test]
    fn null_counts_as_absent() {
        let sample: Sample = serde_json::from_value(json!({ "count": null, "flag": null })).unwrap();
        assert_eq!(sample.count, None);
        assert!(!sample.flag);
    }

    #[test]
    fn flags_follow_truthiness() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(1), true),
            (json!(0), false),
            (json!("yes"), true),
            (json!(""), false),
        ] {
            let sample: Sample = serde_json::from_value(json!({ "flag": raw })).unwrap();
            assert_eq!(sample.flag, expected);
        }
    }

    #[test]
    fn scalars_render_verbatim() {
        assert_eq!(Scalar::Int(42).to_string(), "42");
        assert_eq!(Scalar::Float(10.5).to_string(), "10.5");
        assert_eq!(Scalar::Float(3.0).to_string(), "3.0");
        assert_eq!(Scalar::from("-1.5e3").to_string(), "-1.5e3");
    }
}
