//! # dempy: Axial Sample Codec
//!
//! **Version**: 0.1.0
//!
//! Lossless conversion of axial sensor samples between three
//! representations: the in-memory record, the protobuf wire message and the
//! JSON document returned by the remote service.
//!
//! ## Design Principles
//!
//! - **Closed variant set**: the five sample shapes are a sum type, so an axis
//!   can never be set outside the variant that prescribes it
//! - **Explicit presence**: optional wire fields are `Option`, never sentinel
//!   values; absence survives every round-trip
//! - **Stateless**: every conversion is a pure function of its input and is
//!   safe to call from any number of threads
//!
//! ## Example Usage
//!
//! ```rust
//! use dempy::timeseries::{from_json, Axis, TimeseriesSample};
//!
//! let document = serde_json::json!({
//!     "type": "TriaxialSample", "id": "s1", "tags": [], "metadata": {},
//!     "timestamp": 1000, "acquisitionId": "acq1",
//!     "deviceId": "d1", "sensorId": "sn1",
//!     "x": 0.1, "y": 0.2, "z": 0.3
//! });
//!
//! let sample = from_json(document)?.into_sample().expect("sample document");
//! assert_eq!(sample.axis(Axis::Z), Some(0.3));
//! assert_eq!(sample.axis(Axis::U), None);
//!
//! let bytes = sample.encode_to_vec();
//! assert_eq!(TimeseriesSample::decode(&bytes)?, sample);
//! # Ok::<(), dempy::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod entity;
pub mod error;
pub mod proto;
pub mod timeseries;

pub use entity::{Entity, Envelope};
pub use error::{Error, Result};
pub use timeseries::{Axes, Axis, SampleKind, TimeseriesSample};
