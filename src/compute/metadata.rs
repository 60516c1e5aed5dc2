// ABOUTME: Identity and placement metadata shared by compute resources.
// ABOUTME: Capability traits that Image implements by embedding ResourceMetadata.

use crate::types::{Id, LocationId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Kind of compute resource a metadata value describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeType {
    Node,
    Image,
    Hardware,
}

/// How wide an area a location covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationScope {
    Provider,
    Region,
    Zone,
    Host,
}

impl fmt::Display for LocationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationScope::Provider => write!(f, "provider"),
            LocationScope::Region => write!(f, "region"),
            LocationScope::Zone => write!(f, "zone"),
            LocationScope::Host => write!(f, "host"),
        }
    }
}

/// Where a resource lives, optionally nested in a wider location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    scope: LocationScope,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Box<Location>>,
}

impl Location {
    pub fn new(id: LocationId, scope: LocationScope) -> Self {
        Self {
            id,
            scope,
            description: String::new(),
            parent: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parent(mut self, parent: Location) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn id(&self) -> &LocationId {
        &self.id
    }

    pub fn scope(&self) -> LocationScope {
        self.scope
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parent(&self) -> Option<&Location> {
        self.parent.as_deref()
    }
}

/// Identity, naming and placement of a compute resource.
///
/// `K` is the marker of the resource kind, so an image's metadata carries an
/// [`ImageId`](crate::types::ImageId).
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ResourceMetadata<K> {
    id: Id<K>,
    provider_id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(default)]
    user_metadata: BTreeMap<String, String>,
    #[serde(default)]
    tags: BTreeSet<String>,
}

impl<K> ResourceMetadata<K> {
    /// The provider id defaults to the string form of `id`.
    pub fn new(id: Id<K>, name: impl Into<String>) -> Self {
        Self {
            provider_id: id.as_str().to_string(),
            id,
            name: name.into(),
            location: None,
            uri: None,
            user_metadata: BTreeMap::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_user_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &Id<K> {
        &self.id
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn user_metadata(&self) -> &BTreeMap<String, String> {
        &self.user_metadata
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

// K is only a marker; these impls must not require bounds on it.

impl<K> Clone for ResourceMetadata<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            provider_id: self.provider_id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            uri: self.uri.clone(),
            user_metadata: self.user_metadata.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl<K> PartialEq for ResourceMetadata<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.provider_id == other.provider_id
            && self.name == other.name
            && self.location == other.location
            && self.uri == other.uri
            && self.user_metadata == other.user_metadata
            && self.tags == other.tags
    }
}

impl<K> Eq for ResourceMetadata<K> {}

impl<K> fmt::Debug for ResourceMetadata<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceMetadata")
            .field("id", &self.id)
            .field("provider_id", &self.provider_id)
            .field("name", &self.name)
            .field("location", &self.location)
            .field("uri", &self.uri)
            .field("user_metadata", &self.user_metadata)
            .field("tags", &self.tags)
            .finish()
    }
}

/// Read access to the identity of a compute resource.
pub trait ComputeMetadata {
    /// Marker of the resource kind.
    type Kind;

    fn compute_type(&self) -> ComputeType;

    fn resource_metadata(&self) -> &ResourceMetadata<Self::Kind>;

    fn id(&self) -> &Id<Self::Kind> {
        self.resource_metadata().id()
    }

    fn provider_id(&self) -> &str {
        self.resource_metadata().provider_id()
    }

    fn name(&self) -> &str {
        self.resource_metadata().name()
    }

    fn location(&self) -> Option<&Location> {
        self.resource_metadata().location()
    }

    fn uri(&self) -> Option<&str> {
        self.resource_metadata().uri()
    }

    fn user_metadata(&self) -> &BTreeMap<String, String> {
        self.resource_metadata().user_metadata()
    }

    fn tags(&self) -> &BTreeSet<String> {
        self.resource_metadata().tags()
    }
}

/// A compute resource that also reports a canonical status `S`.
pub trait ComputeMetadataIncludingStatus<S: Copy>: ComputeMetadata {
    fn status(&self) -> S;

    /// The provider's own status text the canonical status came from, if known.
    fn backend_status(&self) -> Option<&str>;
}
