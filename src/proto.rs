//! Wire schema (proto2, package `dempy`)
//!
//! ```text
//! message Entity {
//!   required string type = 1;
//!   required string id = 2;
//!   repeated string tags = 3;
//!   map<string, string> metadata = 4;
//! }
//!
//! message TimeseriesMessage {
//!   required Entity entity = 1;
//!   required int64 timestamp = 2;
//!   required string acquisition_id = 3;
//!   optional string device_id = 4;
//!   optional string sensor_id = 5;
//!   optional double x = 6;
//!   optional double y = 7;
//!   optional double z = 8;
//!   optional double u = 9;
//!   optional double w = 10;
//! }
//! ```
//!
//! Optional fields are `Option<T>`: `is_some()` is the presence query, and
//! prost generates default-returning accessors (`msg.x()`) for them.

use std::collections::HashMap;

/// Envelope shared by every domain record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entity {
    /// Variant discriminant
    #[prost(string, required, tag = "1")]
    pub r#type: String,
    /// Record identifier
    #[prost(string, required, tag = "2")]
    pub id: String,
    /// Ordered tag list
    #[prost(string, repeated, tag = "3")]
    pub tags: Vec<String>,
    /// Key-value metadata
    #[prost(map = "string, string", tag = "4")]
    pub metadata: HashMap<String, String>,
}

/// A single axial sample on the wire.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeseriesMessage {
    /// Embedded envelope
    #[prost(message, required, tag = "1")]
    pub entity: Entity,
    /// Sample timestamp
    #[prost(int64, required, tag = "2")]
    pub timestamp: i64,
    /// Owning acquisition
    #[prost(string, required, tag = "3")]
    pub acquisition_id: String,
    /// Producing device, if known
    #[prost(string, optional, tag = "4")]
    pub device_id: Option<String>,
    /// Producing sensor, if known
    #[prost(string, optional, tag = "5")]
    pub sensor_id: Option<String>,
    /// First axis
    #[prost(double, optional, tag = "6")]
    pub x: Option<f64>,
    /// Second axis
    #[prost(double, optional, tag = "7")]
    pub y: Option<f64>,
    /// Third axis
    #[prost(double, optional, tag = "8")]
    pub z: Option<f64>,
    /// Fourth axis
    #[prost(double, optional, tag = "9")]
    pub u: Option<f64>,
    /// Fifth axis
    #[prost(double, optional, tag = "10")]
    pub w: Option<f64>,
}
