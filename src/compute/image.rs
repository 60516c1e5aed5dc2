// ABOUTME: Immutable snapshot of one cloud image in provider-neutral form.
// ABOUTME: Built once by a provider adapter; a status change yields a new value.

use super::credentials::LoginCredentials;
use super::metadata::{ComputeMetadata, ComputeMetadataIncludingStatus, ComputeType, ResourceMetadata};
use super::operating_system::OperatingSystem;
use super::status::Status;
use crate::types::ImageMarker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A virtual machine image as seen through the provider abstraction.
///
/// Every accessor returns the value fixed when the image was built. Images
/// are plain values: cheap to clone, `Send + Sync`, and never mutated in
/// place. To describe a newer state of the same image, build a new one with
/// [`Image::to_builder`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(flatten)]
    metadata: ResourceMetadata<ImageMarker>,
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backend_status: Option<String>,
    operating_system: OperatingSystem,
    #[serde(default)]
    version: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_credentials: Option<LoginCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin_password: Option<String>,
}

impl Image {
    pub fn builder(
        metadata: ResourceMetadata<ImageMarker>,
        operating_system: OperatingSystem,
    ) -> ImageBuilder {
        ImageBuilder::new(metadata, operating_system)
    }

    /// Starts a builder seeded with this snapshot.
    pub fn to_builder(&self) -> ImageBuilder {
        ImageBuilder {
            image: self.clone(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn backend_status(&self) -> Option<&str> {
        self.backend_status.as_deref()
    }

    /// The operating system installed on this image.
    pub fn operating_system(&self) -> &OperatingSystem {
        &self.operating_system
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Default credentials for logging into instances of this image.
    ///
    /// `None` means the provider exposes no default login; it is not an error.
    pub fn default_credentials(&self) -> Option<&LoginCredentials> {
        self.default_credentials.as_ref()
    }

    /// Root or console password, if the provider still reports one.
    #[deprecated(note = "superseded by `default_credentials`")]
    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }

    pub fn metadata(&self) -> &ResourceMetadata<ImageMarker> {
        &self.metadata
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("metadata", &self.metadata)
            .field("status", &self.status)
            .field("backend_status", &self.backend_status)
            .field("operating_system", &self.operating_system)
            .field("version", &self.version)
            .field("description", &self.description)
            .field("default_credentials", &self.default_credentials)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ComputeMetadata for Image {
    type Kind = ImageMarker;

    fn compute_type(&self) -> ComputeType {
        ComputeType::Image
    }

    fn resource_metadata(&self) -> &ResourceMetadata<ImageMarker> {
        &self.metadata
    }
}

impl ComputeMetadataIncludingStatus<Status> for Image {
    fn status(&self) -> Status {
        self.status
    }

    fn backend_status(&self) -> Option<&str> {
        self.backend_status.as_deref()
    }
}

/// Assembles an [`Image`].
///
/// Metadata and operating system are required up front. Status starts as
/// [`Status::Unrecognized`] until an adapter sets the normalized value.
#[derive(Debug, Clone)]
pub struct ImageBuilder {
    image: Image,
}

impl ImageBuilder {
    pub fn new(metadata: ResourceMetadata<ImageMarker>, operating_system: OperatingSystem) -> Self {
        Self {
            image: Image {
                metadata,
                status: Status::Unrecognized,
                backend_status: None,
                operating_system,
                version: String::new(),
                description: String::new(),
                default_credentials: None,
                admin_password: None,
            },
        }
    }

    pub fn metadata(mut self, metadata: ResourceMetadata<ImageMarker>) -> Self {
        self.image.metadata = metadata;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.image.status = status;
        self
    }

    /// `None` clears a value inherited through [`Image::to_builder`].
    pub fn backend_status(mut self, backend_status: Option<String>) -> Self {
        self.image.backend_status = backend_status;
        self
    }

    pub fn operating_system(mut self, operating_system: OperatingSystem) -> Self {
        self.image.operating_system = operating_system;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.image.version = version.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.image.description = description.into();
        self
    }

    pub fn default_credentials(mut self, credentials: Option<LoginCredentials>) -> Self {
        self.image.default_credentials = credentials;
        self
    }

    #[deprecated(note = "set `default_credentials` instead")]
    pub fn admin_password(mut self, password: Option<String>) -> Self {
        self.image.admin_password = password;
        self
    }

    pub fn build(self) -> Image {
        self.image
    }
}
