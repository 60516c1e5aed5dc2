// ABOUTME: Generic image record document and the adapter that converts it.
// ABOUTME: Records come from YAML or JSON already fetched by a provider integration.

use super::ProviderAdapter;
use super::error::{AdapterError, DecodeJsonSnafu, DecodeYamlSnafu, ReadSnafu};
use crate::compute::{
    Image, Location, LoginCredentials, OperatingSystem, OsFamily, ResourceMetadata, Status,
};
use crate::diagnostics::{Diagnostics, Warning};
use crate::normalize::{NativeStatus, NormalizeStatus, StatusRegistry};
use crate::types::{ImageId, ImageMarker, ProviderName};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::collections::BTreeMap;
use std::path::Path;

/// Provider-agnostic description of an image exactly as a provider reported it.
///
/// ```yaml
/// provider: aws-ec2
/// id: ami-0abc1234
/// name: ubuntu-jammy-22.04
/// status: available
/// operating_system:
///   family: ubuntu
///   version: "22.04"
///   arch: x86_64
///   is_64bit: true
/// default_credentials:
///   user: ubuntu
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub provider: ProviderName,
    pub id: ImageId,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub status: Option<NativeStatus>,
    #[serde(default)]
    pub operating_system: OsRecord,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_credentials: Option<LoginCredentials>,
    #[serde(default)]
    pub admin_password: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub user_metadata: BTreeMap<String, String>,
}

/// Operating system fields as the provider spelled them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OsRecord {
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_64bit: bool,
}

impl ImageRecord {
    pub fn from_yaml(yaml: &str) -> Result<Self, AdapterError> {
        serde_yaml::from_str(yaml).context(DecodeYamlSnafu)
    }

    pub fn from_json(json: &str) -> Result<Self, AdapterError> {
        serde_json::from_str(json).context(DecodeJsonSnafu)
    }

    /// Reads a record file: `.json` files as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self, AdapterError> {
        let content = std::fs::read_to_string(path).context(ReadSnafu { path })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }
}

/// Converts [`ImageRecord`]s using the status table registered for each
/// record's provider.
#[derive(Debug, Clone, Copy)]
pub struct RecordAdapter<'a> {
    registry: &'a StatusRegistry,
}

impl<'a> RecordAdapter<'a> {
    pub fn new(registry: &'a StatusRegistry) -> Self {
        Self { registry }
    }

    /// Like [`ProviderAdapter::image`], also recording anything that fell
    /// back to an unrecognized value.
    pub fn image_with_diagnostics(
        &self,
        record: &ImageRecord,
        diagnostics: &mut Diagnostics,
    ) -> Image {
        let image = self.image(record);
        let provider = record.provider.as_str();

        if image.status() == Status::Unrecognized {
            if self.registry.table(&record.provider).is_none() {
                diagnostics.warn(Warning::unknown_provider(provider));
            } else {
                match &record.status {
                    Some(native) => {
                        diagnostics.warn(Warning::unrecognized_status(provider, &native.to_string()))
                    }
                    None => diagnostics.warn(Warning::missing_status(provider)),
                }
            }
        }

        if let Some(family) = &record.operating_system.family
            && image.operating_system().family().is_unrecognized()
        {
            diagnostics.warn(Warning::unrecognized_os_family(family));
        }

        image
    }
}

impl ProviderAdapter for RecordAdapter<'_> {
    type Raw = ImageRecord;

    fn native_status_to_canonical(&self, raw: &ImageRecord) -> Status {
        match self.registry.table(&raw.provider) {
            Some(table) => table.to_canonical_opt(raw.status.as_ref()),
            None => Status::Unrecognized,
        }
    }

    fn metadata(&self, raw: &ImageRecord) -> ResourceMetadata<ImageMarker> {
        let mut metadata = ResourceMetadata::new(raw.id.clone(), raw.name.clone())
            .with_tags(raw.tags.iter().cloned());

        if let Some(provider_id) = &raw.provider_id {
            metadata = metadata.with_provider_id(provider_id.clone());
        }
        if let Some(location) = &raw.location {
            metadata = metadata.with_location(location.clone());
        }
        if let Some(uri) = &raw.uri {
            metadata = metadata.with_uri(uri.clone());
        }
        for (key, value) in &raw.user_metadata {
            metadata = metadata.with_user_metadata(key.clone(), value.clone());
        }

        metadata
    }

    fn operating_system(&self, raw: &ImageRecord) -> OperatingSystem {
        let os = &raw.operating_system;
        let family = os
            .family
            .as_deref()
            .map(OsFamily::from_value)
            .unwrap_or_default();

        OperatingSystem::builder()
            .family(family)
            .name(os.name.clone())
            .version(os.version.clone())
            .arch(os.arch.clone())
            .description(os.description.clone())
            .is_64bit(os.is_64bit)
            .build()
    }

    fn default_credentials(&self, raw: &ImageRecord) -> Option<LoginCredentials> {
        raw.default_credentials.clone()
    }

    fn version(&self, raw: &ImageRecord) -> String {
        raw.version.clone()
    }

    fn description(&self, raw: &ImageRecord) -> String {
        raw.description.clone()
    }

    fn backend_status(&self, raw: &ImageRecord) -> Option<String> {
        raw.status.as_ref().map(NativeStatus::to_string)
    }

    fn admin_password(&self, raw: &ImageRecord) -> Option<String> {
        raw.admin_password.clone()
    }
}
