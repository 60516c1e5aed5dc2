// ABOUTME: Seam between provider-specific raw data and the Image entity.
// ABOUTME: ProviderAdapter factories plus a generic adapter over ImageRecord documents.

mod error;
mod record;

pub use error::{AdapterError, AdapterErrorKind};
pub use record::{ImageRecord, OsRecord, RecordAdapter};

use crate::compute::{Image, LoginCredentials, OperatingSystem, ResourceMetadata, Status};
use crate::types::ImageMarker;

/// Translates one provider's raw image data into an [`Image`].
///
/// Implemented by provider integrations outside this crate. Every method is
/// a pure function of the raw value; fetching that value (network calls,
/// retries, caching) happens before the adapter is involved.
pub trait ProviderAdapter {
    /// The provider's own representation of an image.
    type Raw;

    /// Must be total: values the provider's table does not know are
    /// [`Status::Unrecognized`].
    fn native_status_to_canonical(&self, raw: &Self::Raw) -> Status;

    fn metadata(&self, raw: &Self::Raw) -> ResourceMetadata<ImageMarker>;

    fn operating_system(&self, raw: &Self::Raw) -> OperatingSystem;

    fn default_credentials(&self, raw: &Self::Raw) -> Option<LoginCredentials>;

    fn version(&self, _raw: &Self::Raw) -> String {
        String::new()
    }

    fn description(&self, _raw: &Self::Raw) -> String {
        String::new()
    }

    /// The native status text, kept on the image for diagnostics.
    fn backend_status(&self, _raw: &Self::Raw) -> Option<String> {
        None
    }

    /// Legacy root password. New adapters should leave this as `None` and
    /// report [`default_credentials`](Self::default_credentials) instead.
    fn admin_password(&self, _raw: &Self::Raw) -> Option<String> {
        None
    }

    #[allow(deprecated)]
    fn image(&self, raw: &Self::Raw) -> Image {
        Image::builder(self.metadata(raw), self.operating_system(raw))
            .status(self.native_status_to_canonical(raw))
            .backend_status(self.backend_status(raw))
            .version(self.version(raw))
            .description(self.description(raw))
            .default_credentials(self.default_credentials(raw))
            .admin_password(self.admin_password(raw))
            .build()
    }
}
