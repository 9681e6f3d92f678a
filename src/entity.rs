//! Entity envelope - the fields shared by every domain record
//!
//! Every record the remote service knows about carries the same four
//! envelope fields: a `type` discriminant, an `id`, an ordered tag list and
//! a string-to-string metadata map. The envelope codec maps those fields to
//! and from the [`proto::Entity`] wire message verbatim; it performs no
//! validation of its own.
//!
//! ## Usage
//!
//! ```rust
//! use dempy::entity::{decode_envelope, encode_envelope, Entity, Envelope};
//!
//! let entity = Entity::new("UniaxialSample", "s1")
//!     .with_tags(["a", "b"])
//!     .with_metadata([("k", "v")]);
//!
//! let message = encode_envelope(&entity);
//! let decoded = decode_envelope(message);
//!
//! assert_eq!(decoded, entity);
//! assert_eq!(decoded.tags(), ["a", "b"]);
//! ```

use std::collections::HashMap;

use crate::proto;

/// Read access to the envelope fields of a domain record.
pub trait Envelope {
    /// Variant discriminant.
    fn type_name(&self) -> &str;

    /// Record identifier.
    fn id(&self) -> &str;

    /// Ordered tags. Duplicates are allowed.
    fn tags(&self) -> &[String];

    /// Key-value metadata.
    fn metadata(&self) -> &HashMap<String, String>;
}

/// Owned envelope as recovered from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entity {
    type_name: String,
    id: String,
    tags: Vec<String>,
    metadata: HashMap<String, String>,
}

impl Entity {
    /// Create an envelope with no tags and no metadata.
    #[must_use]
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
            tags: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the metadata map.
    #[must_use]
    pub fn with_metadata<I, K, V>(mut self, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = metadata
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Split the envelope into its parts: `(type, id, tags, metadata)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String, Vec<String>, HashMap<String, String>) {
        (self.type_name, self.id, self.tags, self.metadata)
    }
}

impl Envelope for Entity {
    fn type_name(&self) -> &str {
        &self.type_name
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

impl From<proto::Entity> for Entity {
    fn from(message: proto::Entity) -> Self {
        Self {
            type_name: message.r#type,
            id: message.id,
            tags: message.tags,
            metadata: message.metadata,
        }
    }
}

/// Write the four envelope fields of `record` into a wire envelope.
///
/// All four fields are always written, including an empty tag list or
/// metadata map.
#[must_use]
pub fn encode_envelope<E: Envelope + ?Sized>(record: &E) -> proto::Entity {
    proto::Entity {
        r#type: record.type_name().to_string(),
        id: record.id().to_string(),
        tags: record.tags().to_vec(),
        metadata: record.metadata().clone(),
    }
}

/// Read the four envelope fields back out of a wire envelope.
#[must_use]
pub fn decode_envelope(message: proto::Entity) -> Entity {
    Entity::from(message)
}
