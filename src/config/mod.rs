// ABOUTME: Configuration types and parsing for cloudimage.yml.
// ABOUTME: Custom provider status tables layered over the built-in registry.

mod deserialize;
mod init;

pub use init::init_config;

use crate::compute::Status;
use crate::error::{Error, Result};
use crate::normalize::{MatchMode, StatusRegistry, StatusTable, StatusTableBuilder};
use crate::types::ProviderName;
use deserialize::deserialize_status_map;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "cloudimage.yml";
pub const CONFIG_FILENAME_ALT: &str = "cloudimage.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".cloudimage/config.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: BTreeMap<ProviderName, TableConfig>,
}

/// A status table as written in the config file.
///
/// `match` and `case_sensitive` default to the extended built-in table's
/// settings, or to exact, case-insensitive matching.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableConfig {
    /// Built-in table whose entries are copied before these are applied.
    #[serde(default)]
    pub extends: Option<ProviderName>,

    #[serde(default, rename = "match")]
    pub match_mode: Option<MatchMode>,

    #[serde(default)]
    pub case_sensitive: Option<bool>,

    #[serde(default, deserialize_with = "deserialize_status_map")]
    pub statuses: BTreeMap<String, Status>,

    #[serde(default, deserialize_with = "deserialize_status_map")]
    pub codes: BTreeMap<i64, Status>,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("loading config from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`discover`](Self::discover), but an absent file means an empty config.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// The built-in registry with every configured table applied on top.
    ///
    /// A configured provider replaces any built-in table of the same name.
    pub fn registry(&self) -> Result<StatusRegistry> {
        let builtin = StatusRegistry::builtin();
        let mut registry = builtin.clone();

        for (provider, table_config) in &self.providers {
            let table = table_config.build(provider, &builtin)?;
            tracing::debug!("configured status table for {} ({} entries)", provider, table.len());
            registry.insert(provider.clone(), table);
        }

        Ok(registry)
    }

    pub fn template() -> Self {
        let table = TableConfig {
            extends: Some(ProviderName::new("openstack-glance").expect("valid provider name")),
            match_mode: None,
            case_sensitive: None,
            statuses: BTreeMap::from([
                ("building".to_string(), Status::Pending),
                ("ready".to_string(), Status::Available),
            ]),
            codes: BTreeMap::new(),
        };

        Config {
            providers: BTreeMap::from([(
                ProviderName::new("my-cloud").expect("valid provider name"),
                table,
            )]),
        }
    }
}

impl TableConfig {
    fn build(&self, provider: &ProviderName, builtin: &StatusRegistry) -> Result<StatusTable> {
        let mut builder = match &self.extends {
            Some(parent) => {
                let table = builtin.table(parent).ok_or_else(|| {
                    Error::InvalidConfig(format!(
                        "provider {provider} extends unknown built-in table {parent}"
                    ))
                })?;
                StatusTableBuilder::from_table(table)
            }
            None => StatusTable::builder(),
        };

        if let Some(mode) = self.match_mode {
            builder = builder.match_mode(mode);
        }
        if let Some(case_sensitive) = self.case_sensitive {
            builder = builder.case_sensitive(case_sensitive);
        }
        for (native, status) in &self.statuses {
            builder = builder.text(native.clone(), *status);
        }
        for (native, status) in &self.codes {
            builder = builder.code(*native, *status);
        }

        builder.build().map_err(|source| Error::Table {
            provider: provider.clone(),
            source,
        })
    }
}
