//! Payload shape validation.
//!
//! Each data source answers with JSON whose shape is only loosely
//! guaranteed. These functions accept a decoded body and either return the
//! typed payload or a [`ShapeError`] describing why it was rejected.

use serde::Deserialize;
use serde_json::Value;
use stockview_types::{PricePoint, PriceSeries, Profile};
use thiserror::Error;

/// Wire key of the short-term price series.
pub const SHORT_TERM_KEY: &str = "shortTerm";

/// Wire key of the long-term price series.
pub const LONG_TERM_KEY: &str = "longTerm";

/// Key the profile service sets when it has no profile for a ticker.
pub const ERROR_MARKER_KEY: &str = "error";

/// Reasons a payload is rejected.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Expected a JSON array.
    #[error("expected an array, found {found}")]
    NotAnArray {
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// Expected a JSON object.
    #[error("expected an object, found {found}")]
    NotAnObject {
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A required field is missing.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// The service reported an error instead of a payload.
    #[error("service reported error: {0}")]
    ErrorMarker(String),

    /// An element did not match the expected record.
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] serde_json::Error),
}

/// Returns the JSON kind of a value, for diagnostics.
#[must_use]
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validates a headlines payload: an array of strings, in delivery order.
///
/// # Errors
///
/// Returns an error if the payload is not an array or holds non-string entries.
pub fn parse_headlines(value: Value) -> Result<Vec<String>, ShapeError> {
    if !value.is_array() {
        return Err(ShapeError::NotAnArray { found: kind(&value) });
    }
    Ok(serde_json::from_value(value)?)
}

/// Validates one named price series inside a prices payload.
///
/// The two series of a payload are validated independently, so a broken
/// short-term series does not affect the long-term one and vice versa.
/// Entries that are not `{date, price}` records are skipped; the rest keep
/// their delivery order.
///
/// # Errors
///
/// Returns an error if the payload is not an object, the key is missing, or
/// the series is not an array.
pub fn parse_series(value: &Value, key: &'static str) -> Result<PriceSeries, ShapeError> {
    let object = value
        .as_object()
        .ok_or(ShapeError::NotAnObject { found: kind(value) })?;
    let series = object.get(key).ok_or(ShapeError::MissingField(key))?;
    let entries = series
        .as_array()
        .ok_or(ShapeError::NotAnArray { found: kind(series) })?;

    let points: Vec<PricePoint> = entries
        .iter()
        .filter_map(|entry| PricePoint::deserialize(entry).ok())
        .collect();
    let dropped = entries.len() - points.len();
    if dropped > 0 {
        tracing::warn!(
            series = key,
            dropped,
            kept = points.len(),
            "skipped malformed price points"
        );
    }
    Ok(PriceSeries::new(points))
}

/// Returns true unless the value is `null`, `false`, `0` or an empty string.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validates a profile payload: an object without an error marker.
///
/// The marker only counts when it is set; `"error": null` or
/// `"error": ""` next to a profile is ignored.
///
/// # Errors
///
/// Returns an error if the payload is not an object, carries an error
/// marker, or has fields of the wrong type.
pub fn parse_profile(value: Value) -> Result<Profile, ShapeError> {
    let object = value
        .as_object()
        .ok_or(ShapeError::NotAnObject { found: kind(&value) })?;
    if let Some(marker) = object.get(ERROR_MARKER_KEY).filter(|m| is_set(m)) {
        let message = marker
            .as_str()
            .map_or_else(|| marker.to_string(), str::to_string);
        return Err(ShapeError::ErrorMarker(message));
    }
    Ok(serde_json::from_value(value)?)
}
