// ABOUTME: Status tables keyed by provider name.
// ABOUTME: Normalizing against an unknown provider yields UNRECOGNIZED, never an error.

use super::providers;
use super::table::{NormalizeStatus, StatusTable};
use crate::compute::Status;
use crate::types::ProviderName;
use std::collections::BTreeMap;

/// The status tables an adapter layer knows about.
///
/// Built once at startup, then only read. Share it behind an `Arc` when
/// several adapters need it.
#[derive(Debug, Clone, Default)]
pub struct StatusRegistry {
    tables: BTreeMap<ProviderName, StatusTable>,
}

impl StatusRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every table from [`providers::all`].
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (name, table) in providers::all() {
            match ProviderName::new(name) {
                Ok(provider) => {
                    registry.insert(provider, table);
                }
                Err(e) => tracing::error!("skipping built-in table {}: {}", name, e),
            }
        }
        registry
    }

    /// Adds or replaces the table for `provider`, returning the previous one.
    pub fn insert(&mut self, provider: ProviderName, table: StatusTable) -> Option<StatusTable> {
        self.tables.insert(provider, table)
    }

    pub fn with(mut self, provider: ProviderName, table: StatusTable) -> Self {
        self.insert(provider, table);
        self
    }

    pub fn table(&self, provider: &ProviderName) -> Option<&StatusTable> {
        self.tables.get(provider)
    }

    pub fn providers(&self) -> impl Iterator<Item = &ProviderName> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Normalizes `raw` with the table registered for `provider`.
    pub fn normalize<R>(&self, provider: &ProviderName, raw: &R) -> Status
    where
        R: ?Sized,
        StatusTable: NormalizeStatus<R>,
    {
        match self.tables.get(provider) {
            Some(table) => table.to_canonical(raw),
            None => {
                tracing::warn!("no status table for provider {}, status is unrecognized", provider);
                Status::Unrecognized
            }
        }
    }
}
