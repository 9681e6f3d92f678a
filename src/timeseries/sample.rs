//! Timeseries Sample - axial sensor reading and its binary codec

use std::collections::HashMap;

use prost::Message;

use super::axes::{Axes, Axis, SampleKind};
use crate::entity::{decode_envelope, encode_envelope, Envelope};
use crate::proto::TimeseriesMessage;
use crate::Result;

/// A single sensor reading belonging to an acquisition.
///
/// The envelope `type` is derived from the [`Axes`] variant, so the
/// discriminant and the populated axis set always agree. Records are
/// immutable once built.
///
/// ## Optional fields
///
/// `device_id` and `sensor_id` distinguish "absent" from "empty string";
/// absence survives every round-trip through the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesSample {
    id: String,
    tags: Vec<String>,
    metadata: HashMap<String, String>,
    timestamp: i64,
    acquisition_id: String,
    device_id: Option<String>,
    sensor_id: Option<String>,
    axes: Axes,
}

impl TimeseriesSample {
    /// Create a sample with no tags, metadata, device or sensor.
    ///
    /// # Arguments
    ///
    /// * `id` - Sample identifier
    /// * `timestamp` - Acquisition-relative timestamp
    /// * `acquisition_id` - ID of the owning acquisition
    /// * `axes` - Axis values; the variant decides the sample type
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        timestamp: i64,
        acquisition_id: impl Into<String>,
        axes: Axes,
    ) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            metadata: HashMap::new(),
            timestamp,
            acquisition_id: acquisition_id.into(),
            device_id: None,
            sensor_id: None,
            axes,
        }
    }

    /// Create a builder for constructing a sample with optional fields.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        timestamp: i64,
        acquisition_id: impl Into<String>,
        axes: Axes,
    ) -> TimeseriesSampleBuilder {
        TimeseriesSampleBuilder::new(id, timestamp, acquisition_id, axes)
    }

    /// Create a sample from an untyped discriminant and a full
    /// `[x, y, z, u, w]` slot array.
    ///
    /// Slots outside the variant named by `type_name` are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVariant`] if `type_name` is not one of
    /// the five sample variants.
    pub fn from_parts(
        type_name: &str,
        id: impl Into<String>,
        timestamp: i64,
        acquisition_id: impl Into<String>,
        values: [Option<f64>; 5],
    ) -> Result<Self> {
        let kind: SampleKind = type_name.parse()?;
        Ok(Self::new(
            id,
            timestamp,
            acquisition_id,
            Axes::from_values(kind, values),
        ))
    }

    /// Get the sample variant.
    #[must_use]
    pub const fn kind(&self) -> SampleKind {
        self.axes.kind()
    }

    /// Get the timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Get the owning acquisition ID.
    #[must_use]
    pub fn acquisition_id(&self) -> &str {
        &self.acquisition_id
    }

    /// Get the device ID, if set.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Get the sensor ID, if set.
    #[must_use]
    pub fn sensor_id(&self) -> Option<&str> {
        self.sensor_id.as_deref()
    }

    /// Get the axis values.
    #[must_use]
    pub const fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Get a single axis value. `None` for axes outside the variant.
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> Option<f64> {
        self.axes.get(axis)
    }

    /// Encode to a wire message.
    ///
    /// Writes the envelope, `timestamp` and `acquisition_id` unconditionally,
    /// `device_id`/`sensor_id` only when present, and exactly the axes the
    /// variant prescribes. Axes outside the variant are never set.
    #[must_use]
    pub fn to_protobuf(&self) -> TimeseriesMessage {
        tracing::trace!(id = %self.id, type_name = %self.kind(), "encoding timeseries sample");

        let mut message = TimeseriesMessage {
            entity: encode_envelope(self),
            timestamp: self.timestamp,
            acquisition_id: self.acquisition_id.clone(),
            device_id: self.device_id.clone(),
            sensor_id: self.sensor_id.clone(),
            ..TimeseriesMessage::default()
        };

        for (axis, value) in self.axes.iter() {
            let slot = match axis {
                Axis::X => &mut message.x,
                Axis::Y => &mut message.y,
                Axis::Z => &mut message.z,
                Axis::U => &mut message.u,
                Axis::W => &mut message.w,
            };
            *slot = value;
        }

        message
    }

    /// Decode from a wire message.
    ///
    /// Dispatches on the envelope `type`. Axes outside the variant are
    /// ignored even if the message carries them; a prescribed axis the
    /// message omits decodes as absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVariant`] if the envelope `type` is not
    /// one of the five sample variants.
    pub fn from_protobuf(message: TimeseriesMessage) -> Result<Self> {
        let (type_name, id, tags, metadata) = decode_envelope(message.entity).into_parts();
        let kind: SampleKind = type_name.parse()?;

        let axes = Axes::from_values(
            kind,
            [message.x, message.y, message.z, message.u, message.w],
        );
        for axis in axes.missing() {
            tracing::warn!(id = %id, type_name = %kind, axis = axis.name(), "prescribed axis absent from message");
        }

        tracing::trace!(id = %id, type_name = %kind, "decoded timeseries sample");

        Ok(Self {
            id,
            tags,
            metadata,
            timestamp: message.timestamp,
            acquisition_id: message.acquisition_id,
            device_id: message.device_id,
            sensor_id: message.sensor_id,
            axes,
        })
    }

    /// Encode to protobuf bytes.
    #[must_use]
    pub fn encode_to_vec(&self) -> Vec<u8> {
        self.to_protobuf().encode_to_vec()
    }

    /// Decode from protobuf bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] for malformed bytes and
    /// [`crate::Error::InvalidVariant`] for an unknown (or empty) envelope
    /// `type`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let message = TimeseriesMessage::decode(bytes)?;
        Self::from_protobuf(message)
    }
}

impl Envelope for TimeseriesSample {
    fn type_name(&self) -> &str {
        self.kind().as_str()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}

impl From<&TimeseriesSample> for TimeseriesMessage {
    fn from(sample: &TimeseriesSample) -> Self {
        sample.to_protobuf()
    }
}

impl TryFrom<TimeseriesMessage> for TimeseriesSample {
    type Error = crate::Error;

    fn try_from(message: TimeseriesMessage) -> Result<Self> {
        Self::from_protobuf(message)
    }
}

/// Builder for `TimeseriesSample`.
#[derive(Debug)]
pub struct TimeseriesSampleBuilder {
    sample: TimeseriesSample,
}

impl TimeseriesSampleBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        timestamp: i64,
        acquisition_id: impl Into<String>,
        axes: Axes,
    ) -> Self {
        Self {
            sample: TimeseriesSample::new(id, timestamp, acquisition_id, axes),
        }
    }

    /// Replace the tag list.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.sample.tags.push(tag.into());
        self
    }

    /// Replace the metadata map.
    #[must_use]
    pub fn metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.sample.metadata = metadata;
        self
    }

    /// Insert a single metadata entry, overwriting any previous value.
    #[must_use]
    pub fn metadata_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.sample.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the device ID.
    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.sample.device_id = Some(device_id.into());
        self
    }

    /// Set the sensor ID.
    #[must_use]
    pub fn sensor_id(mut self, sensor_id: impl Into<String>) -> Self {
        self.sample.sensor_id = Some(sensor_id.into());
        self
    }

    pub(crate) fn maybe_device_id(mut self, device_id: Option<String>) -> Self {
        self.sample.device_id = device_id;
        self
    }

    pub(crate) fn maybe_sensor_id(mut self, sensor_id: Option<String>) -> Self {
        self.sample.sensor_id = sensor_id;
        self
    }

    /// Build the `TimeseriesSample`.
    #[must_use]
    pub fn build(self) -> TimeseriesSample {
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biaxial() -> TimeseriesSample {
        TimeseriesSample::builder("s1", 1000, "acq1", Axes::biaxial(1.0, 2.0))
            .device_id("d1")
            .build()
    }

    #[test]
    fn test_sample_new_defaults() {
        let sample = TimeseriesSample::new("s1", 5, "acq1", Axes::uniaxial(0.5));
        assert_eq!(sample.type_name(), "UniaxialSample");
        assert!(sample.tags().is_empty());
        assert!(sample.metadata().is_empty());
        assert!(sample.device_id().is_none());
        assert!(sample.sensor_id().is_none());
    }

    #[test]
    fn test_to_protobuf_sets_only_prescribed_axes() {
        let message = biaxial().to_protobuf();
        assert_eq!(message.x, Some(1.0));
        assert_eq!(message.y, Some(2.0));
        assert!(message.z.is_none());
        assert!(message.u.is_none());
        assert!(message.w.is_none());
    }

    #[test]
    fn test_to_protobuf_leaves_absent_ids_unset() {
        let message = biaxial().to_protobuf();
        assert_eq!(message.device_id.as_deref(), Some("d1"));
        assert!(message.sensor_id.is_none());
    }

    #[test]
    fn test_from_protobuf_ignores_foreign_axes() {
        let mut message = biaxial().to_protobuf();
        message.w = Some(9.0);
        let sample = TimeseriesSample::from_protobuf(message).unwrap();
        assert_eq!(sample.axis(Axis::W), None);
        assert_eq!(sample, biaxial());
    }

    #[test]
    fn test_from_protobuf_missing_prescribed_axis_is_absent() {
        let mut message = biaxial().to_protobuf();
        message.y = None;
        let sample = TimeseriesSample::from_protobuf(message).unwrap();
        assert_eq!(sample.axis(Axis::X), Some(1.0));
        assert_eq!(sample.axis(Axis::Y), None);
    }

    #[test]
    fn test_from_parts_validates_type() {
        let values = [Some(1.0), Some(2.0), Some(3.0), None, None];
        let sample = TimeseriesSample::from_parts("TriaxialSample", "s1", 0, "a", values).unwrap();
        assert_eq!(*sample.axes(), Axes::triaxial(1.0, 2.0, 3.0));
        assert!(TimeseriesSample::from_parts("HexaxialSample", "s1", 0, "a", values).is_err());
    }

    #[test]
    fn test_builder_tag_and_metadata_entry() {
        let sample = TimeseriesSample::builder("s1", 0, "a", Axes::uniaxial(1.0))
            .tag("a")
            .tag("b")
            .metadata_entry("k", "v")
            .build();
        assert_eq!(sample.tags(), ["a", "b"]);
        assert_eq!(sample.metadata().get("k").map(String::as_str), Some("v"));
    }
}
