//! JSON direction: sample documents to records
//!
//! The decoder is written as one case of a generic JSON object walker: a
//! document whose `type` ends in [`SAMPLE_TYPE_SUFFIX`] becomes a
//! [`TimeseriesSample`], anything else is handed back untouched.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::axes::{Axes, Axis, SampleKind};
use super::sample::TimeseriesSample;
use crate::entity::Envelope;
use crate::{Error, Result};

/// Suffix shared by every sample discriminant.
pub const SAMPLE_TYPE_SUFFIX: &str = "axialSample";

/// Outcome of decoding a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonDecoded {
    /// The document was a sample.
    Sample(TimeseriesSample),
    /// The document was not a sample and is returned unchanged.
    Passthrough(Value),
}

impl JsonDecoded {
    /// The decoded sample, if any.
    #[must_use]
    pub fn into_sample(self) -> Option<TimeseriesSample> {
        match self {
            Self::Sample(sample) => Some(sample),
            Self::Passthrough(_) => None,
        }
    }
}

/// Non-axis keys of a sample document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleDocument {
    id: String,
    tags: Vec<String>,
    metadata: HashMap<String, String>,
    timestamp: i64,
    acquisition_id: String,
    #[serde(default)]
    device_id: Option<String>,
    #[serde(default)]
    sensor_id: Option<String>,
}

/// Decode a parsed JSON document.
///
/// Documents without a string `type` ending in `axialSample` pass through
/// unchanged. Sample documents must carry `id`, `tags`, `metadata`,
/// `timestamp`, `acquisitionId` and every axis the variant prescribes;
/// `deviceId`/`sensorId` may be missing or `null`. Axis keys outside the
/// variant are ignored.
///
/// # Errors
///
/// - [`Error::InvalidVariant`] if `type` ends in `axialSample` but names no
///   known variant
/// - [`Error::MissingField`] if a prescribed axis key is missing
/// - [`Error::InvalidField`] if an axis value is neither a number nor `null`
/// - [`Error::Json`] if any other required key is missing or ill-typed
///
/// # Example
///
/// ```rust
/// use dempy::timeseries::{from_json, Axis};
///
/// let document = serde_json::json!({
///     "type": "UniaxialSample", "id": "s1", "tags": [], "metadata": {},
///     "timestamp": 1, "acquisitionId": "acq1", "x": 0.5
/// });
/// let sample = from_json(document)?.into_sample().expect("sample document");
/// assert_eq!(sample.axis(Axis::X), Some(0.5));
/// # Ok::<(), dempy::Error>(())
/// ```
pub fn from_json(document: Value) -> Result<JsonDecoded> {
    let kind = match document.get("type").and_then(Value::as_str) {
        Some(name) if name.ends_with(SAMPLE_TYPE_SUFFIX) => Some(name.parse::<SampleKind>()),
        _ => None,
    };
    let Some(kind) = kind else {
        tracing::debug!("passing through non-sample JSON document");
        return Ok(JsonDecoded::Passthrough(document));
    };
    let kind = kind?;

    let mut values = [None; 5];
    for &axis in kind.axes() {
        values[axis as usize] = read_axis(&document, axis)?;
    }

    let fields = SampleDocument::deserialize(&document)?;
    let sample = TimeseriesSample::builder(
        fields.id,
        fields.timestamp,
        fields.acquisition_id,
        Axes::from_values(kind, values),
    )
    .tags(fields.tags)
    .metadata(fields.metadata)
    .maybe_device_id(fields.device_id)
    .maybe_sensor_id(fields.sensor_id)
    .build();

    tracing::trace!(id = %sample.id(), type_name = %kind, "decoded timeseries sample from JSON");

    Ok(JsonDecoded::Sample(sample))
}

/// Parse JSON text and decode it with [`from_json`].
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed text, otherwise as [`from_json`].
pub fn from_json_str(text: &str) -> Result<JsonDecoded> {
    from_json(serde_json::from_str(text)?)
}

/// Decode a JSON array of sample documents, as returned by sample listings.
///
/// # Errors
///
/// Returns [`Error::UnexpectedDocument`] if the value is not an array or an
/// element is not a sample document, otherwise as [`from_json`].
pub fn samples_from_json(documents: Value) -> Result<Vec<TimeseriesSample>> {
    let documents = match documents {
        Value::Array(documents) => documents,
        other => {
            return Err(Error::UnexpectedDocument(format!(
                "expected an array of samples, got {other}"
            )))
        }
    };

    documents
        .into_iter()
        .map(|document| match from_json(document)? {
            JsonDecoded::Sample(sample) => Ok(sample),
            JsonDecoded::Passthrough(other) => Err(Error::UnexpectedDocument(other.to_string())),
        })
        .collect()
}

fn read_axis(document: &Value, axis: Axis) -> Result<Option<f64>> {
    match document.get(axis.name()) {
        None => Err(Error::MissingField(axis.name().to_string())),
        Some(Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| Error::InvalidField {
            field: axis.name().to_string(),
            reason: format!("expected a number, got {value}"),
        }),
    }
}
