//! Axial timeseries samples
//!
//! A sample is an [`Entity`](crate::entity::Entity) envelope plus a
//! timestamp, its owning acquisition, optional device/sensor IDs and an
//! ordered subset of five numeric axes. The envelope `type` selects the
//! subset:
//!
//! ```text
//! UniaxialSample      x
//! BiaxialSample       x y
//! TriaxialSample      x y z
//! QuadriaxialSample   x y z u
//! QuinqueaxialSample  x y z u w
//! ```
//!
//! ## Conversions
//!
//! ```text
//! TimeseriesSample ── to_protobuf ──▶ TimeseriesMessage ── encode_to_vec ──▶ bytes
//!        ▲                                   │
//!        └────────── from_protobuf ◀─────────┘
//!        ▲
//!        └────────── from_json ◀── serde_json::Value
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dempy::timeseries::{Axes, Axis, TimeseriesSample};
//!
//! let sample = TimeseriesSample::builder("s1", 1000, "acq1", Axes::biaxial(1.0, 2.0))
//!     .tags(["a", "b"])
//!     .device_id("d1")
//!     .build();
//!
//! let message = sample.to_protobuf();
//! assert!(message.z.is_none());
//!
//! let decoded = TimeseriesSample::decode(&sample.encode_to_vec())?;
//! assert_eq!(decoded, sample);
//! assert_eq!(decoded.axis(Axis::Y), Some(2.0));
//! assert!(decoded.sensor_id().is_none());
//! # Ok::<(), dempy::Error>(())
//! ```

mod axes;
mod json;
mod sample;

pub use axes::{Axes, Axis, SampleKind};
pub use json::{from_json, from_json_str, samples_from_json, JsonDecoded, SAMPLE_TYPE_SUFFIX};
pub use sample::{TimeseriesSample, TimeseriesSampleBuilder};
