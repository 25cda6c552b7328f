// src/core/parse.rs
//! Tolerant decoding for the vacancy dataset.
//!
//! The dataset is produced elsewhere and its field shapes drift: counts show
//! up as numbers or numeric strings, identifiers as strings or numbers, and
//! `program_studi` as either a list or a JSON-encoded string of that list.
//! Nested records (`perusahaan`, `jadwal`) that are not objects are dropped
//! on their own, never taking the vacancy with them.
//! Nothing in here returns an error; a value that cannot be read becomes
//! "missing" (or an empty list) for that one record.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::model::{ProgramField, ProgramStudy};

/// Parsed study programs for a raw `program_studi` value.
///
/// - list: returned as-is
/// - string: decoded as a JSON list; anything else decodes to empty
/// - absent or any other shape: empty
pub fn parse_programs(field: Option<&ProgramField>) -> Vec<ProgramStudy> {
    match field {
        Some(ProgramField::List(list)) => list.clone(),
        Some(ProgramField::Text(text)) => parse_program_text(text),
        Some(ProgramField::Other(_)) | None => Vec::new(),
    }
}

pub fn parse_program_text(text: &str) -> Vec<ProgramStudy> {
    serde_json::from_str::<Vec<ProgramStudy>>(text).unwrap_or_default()
}

pub fn lenient_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_from(Value::deserialize(d)?).unwrap_or_default())
}

pub fn opt_lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_from(Value::deserialize(d)?))
}

/// Non-negative count from a number or a numeric string.
pub fn opt_count<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from(&Value::deserialize(d)?))
}

/// Nested record when the value is an object that decodes; otherwise `None`.
pub fn opt_record<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

fn opt_string_from(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn count_from(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
        }
        _ => None,
    }
}
