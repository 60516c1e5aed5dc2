// ABOUTME: Provider-neutral compute domain model.
// ABOUTME: Image entity, canonical status, OS descriptor, credentials, metadata.

mod credentials;
mod image;
mod metadata;
mod operating_system;
mod status;

pub use credentials::{LoginCredentials, LoginCredentialsBuilder};
pub use image::{Image, ImageBuilder};
pub use metadata::{
    ComputeMetadata, ComputeMetadataIncludingStatus, ComputeType, Location, LocationScope,
    ResourceMetadata,
};
pub use operating_system::{OperatingSystem, OperatingSystemBuilder, OsFamily};
pub use status::{ParseStatusError, Status};
