//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order), at every depth.
//! 2. Compact form, no extraneous whitespace.
//! 3. Numbers must be integers (`i64` or `u64`). Floats are rejected so that
//!    no platform float formatting leaks into a digest. Metric values travel
//!    as strings produced by [`canonical_f64`].
//!
//! Sorting is done on the value itself, so the output does not depend on
//! whether `serde_json` was built with `preserve_order`.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON at {path}: {raw}")]
    NonIntegerNumber { path: String, raw: String },
    /// `serde_json` refused to write the value.
    #[error("canonical JSON serialization failed: {detail}")]
    Serialize { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an integer.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let sorted = canonicalize(value, "$")?;
    serde_json::to_vec(&sorted).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

/// Shortest round-trip decimal rendering of a float, always with a `.` or
/// exponent (`120.0`, `118.19999999999999`).
#[must_use]
pub fn canonical_f64(value: f64) -> String {
    format!("{value:?}")
}

fn canonicalize(value: &serde_json::Value, path: &str) -> Result<serde_json::Value, CanonError> {
    match value {
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(value.clone())
            } else {
                Err(CanonError::NonIntegerNumber {
                    path: path.to_string(),
                    raw: n.to_string(),
                })
            }
        }
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| canonicalize(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(serde_json::Value::Array),
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for key in keys {
                let child = canonicalize(&map[key], &format!("{path}.{key}"))?;
                out.insert(key.clone(), child);
            }
            Ok(serde_json::Value::Object(out))
        }
        serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::String(_) => {
            Ok(value.clone())
        }
    }
}
