// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Parses canonical status names written in any case.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::compute::Status;

/// Reads a map whose values are canonical status names (`available`, `PENDING`, ...).
pub fn deserialize_status_map<'de, D, K>(deserializer: D) -> Result<BTreeMap<K, Status>, D::Error>
where
    D: serde::Deserializer<'de>,
    K: Deserialize<'de> + Ord,
{
    let raw: BTreeMap<K, String> = BTreeMap::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(native, status)| {
            status
                .parse::<Status>()
                .map(|status| (native, status))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}
