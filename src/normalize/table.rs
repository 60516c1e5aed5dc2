// ABOUTME: Provider lookup tables from native status values to canonical Status.
// ABOUTME: Lookups are total: anything missing from a table is UNRECOGNIZED.

use crate::compute::Status;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Converts a provider-native status into the canonical vocabulary.
///
/// Implementations must be total: every input yields a [`Status`], and values
/// the implementation does not know yield [`Status::Unrecognized`]. Closures
/// `Fn(&R) -> Status` implement this trait, which suits adapters whose vendor
/// SDK already exposes a typed status enum.
pub trait NormalizeStatus<R: ?Sized> {
    fn to_canonical(&self, raw: &R) -> Status;

    /// A missing native status is unrecognized.
    fn to_canonical_opt(&self, raw: Option<&R>) -> Status {
        raw.map_or(Status::Unrecognized, |raw| self.to_canonical(raw))
    }
}

impl<R: ?Sized, F> NormalizeStatus<R> for F
where
    F: Fn(&R) -> Status,
{
    fn to_canonical(&self, raw: &R) -> Status {
        self(raw)
    }
}

/// A status exactly as a provider reported it.
///
/// Decoding never fails: values that are neither an integer code nor text
/// (floats, booleans, out-of-range integers, objects such as EC2's
/// `{code, name}` pair) are kept as [`NativeStatus::Other`], which no table
/// maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeStatus {
    Code(i64),
    Text(String),
    Other(serde_json::Value),
}

impl NativeStatus {
    /// Reads a command-line style value: integers are codes, the rest is text.
    pub fn infer(value: &str) -> NativeStatus {
        match value.parse::<i64>() {
            Ok(code) => NativeStatus::Code(code),
            Err(_) => NativeStatus::Text(value.to_string()),
        }
    }
}

impl fmt::Display for NativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeStatus::Code(code) => write!(f, "{code}"),
            NativeStatus::Text(text) => f.write_str(text),
            NativeStatus::Other(value) => write!(f, "{value}"),
        }
    }
}

/// How text statuses are compared against table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The whole native value must equal a key.
    #[default]
    Exact,
    /// A key matches when the native value starts with it. An exact key wins
    /// over any prefix, and the longest matching prefix wins otherwise.
    Prefix,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Prefix => write!(f, "prefix"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("native status '{native}' cannot map to UNRECOGNIZED; leave it out of the table")]
    UnrecognizedTarget { native: String },

    #[error("native status key cannot be empty")]
    EmptyNative,
}

/// An immutable mapping from one provider's status vocabulary to [`Status`].
///
/// Tables only ever hold targets in {PENDING, AVAILABLE, DELETED, ERROR};
/// `UNRECOGNIZED` is what a lookup returns when the table has no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    mode: MatchMode,
    case_sensitive: bool,
    /// Lookup key (folded unless case-sensitive) to the key as written.
    text: BTreeMap<String, TextEntry>,
    codes: BTreeMap<i64, Status>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextEntry {
    written: String,
    status: Status,
}

impl StatusTable {
    pub fn builder() -> StatusTableBuilder {
        StatusTableBuilder::default()
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.codes.len()
    }

    /// All entries, text keys first, each spelled as it was added.
    pub fn entries(&self) -> Vec<(NativeStatus, Status)> {
        self.text
            .values()
            .map(|entry| (NativeStatus::Text(entry.written.clone()), entry.status))
            .chain(self.codes.iter().map(|(k, v)| (NativeStatus::Code(*k), *v)))
            .collect()
    }

    fn fold<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(raw)
        } else {
            Cow::Owned(raw.to_ascii_lowercase())
        }
    }

    fn lookup_text(&self, raw: &str) -> Option<Status> {
        let key = self.fold(raw);
        if let Some(entry) = self.text.get(key.as_ref()) {
            return Some(entry.status);
        }

        match self.mode {
            MatchMode::Exact => None,
            MatchMode::Prefix => self
                .text
                .iter()
                .filter(|(prefix, _)| key.starts_with(prefix.as_str()))
                .max_by_key(|(prefix, _)| prefix.len())
                .map(|(_, entry)| entry.status),
        }
    }
}

impl NormalizeStatus<str> for StatusTable {
    fn to_canonical(&self, raw: &str) -> Status {
        match self.lookup_text(raw) {
            Some(status) => status,
            None => {
                tracing::debug!("native status {:?} not in table, treating as unrecognized", raw);
                Status::Unrecognized
            }
        }
    }
}

impl NormalizeStatus<i64> for StatusTable {
    fn to_canonical(&self, raw: &i64) -> Status {
        match self.codes.get(raw) {
            Some(status) => *status,
            None => {
                tracing::debug!("native status code {} not in table, treating as unrecognized", raw);
                Status::Unrecognized
            }
        }
    }
}

impl NormalizeStatus<NativeStatus> for StatusTable {
    fn to_canonical(&self, raw: &NativeStatus) -> Status {
        match raw {
            NativeStatus::Code(code) => self.to_canonical(code),
            NativeStatus::Text(text) => self.to_canonical(text.as_str()),
            NativeStatus::Other(value) => {
                tracing::debug!("native status {} has no table form, treating as unrecognized", value);
                Status::Unrecognized
            }
        }
    }
}

/// Collects entries for a [`StatusTable`].
///
/// When two entries share a key (after case folding), the later one wins.
#[derive(Debug, Clone, Default)]
pub struct StatusTableBuilder {
    mode: MatchMode,
    case_sensitive: bool,
    text: Vec<(String, Status)>,
    codes: Vec<(i64, Status)>,
}

impl StatusTableBuilder {
    /// Seeds a builder with every entry and option of an existing table.
    ///
    /// Text keys keep their original spelling, so switching the copy to
    /// case-sensitive matching still matches what the source table matched
    /// in that spelling.
    pub fn from_table(table: &StatusTable) -> Self {
        Self {
            mode: table.mode,
            case_sensitive: table.case_sensitive,
            text: table
                .text
                .values()
                .map(|entry| (entry.written.clone(), entry.status))
                .collect(),
            codes: table.codes.iter().map(|(k, v)| (*k, *v)).collect(),
        }
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn text(mut self, native: impl Into<String>, status: Status) -> Self {
        self.text.push((native.into(), status));
        self
    }

    pub fn code(mut self, native: i64, status: Status) -> Self {
        self.codes.push((native, status));
        self
    }

    pub fn build(self) -> Result<StatusTable, TableError> {
        let mut text = BTreeMap::new();
        for (native, status) in self.text {
            if native.is_empty() {
                return Err(TableError::EmptyNative);
            }
            if status == Status::Unrecognized {
                return Err(TableError::UnrecognizedTarget { native });
            }
            let key = if self.case_sensitive {
                native.clone()
            } else {
                native.to_ascii_lowercase()
            };
            text.insert(
                key,
                TextEntry {
                    written: native,
                    status,
                },
            );
        }

        let mut codes = BTreeMap::new();
        for (native, status) in self.codes {
            if status == Status::Unrecognized {
                return Err(TableError::UnrecognizedTarget {
                    native: native.to_string(),
                });
            }
            codes.insert(native, status);
        }

        Ok(StatusTable {
            mode: self.mode,
            case_sensitive: self.case_sensitive,
            text,
            codes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_table() -> StatusTable {
        StatusTable::builder()
            .match_mode(MatchMode::Prefix)
            .text("build", Status::Pending)
            .text("build_failed", Status::Error)
            .text("ready", Status::Available)
            .build()
            .unwrap()
    }

    #[test]
    fn exact_table_ignores_case_by_default() {
        let table = StatusTable::builder()
            .text("ACTIVE", Status::Available)
            .build()
            .unwrap();
        assert_eq!(table.to_canonical("active"), Status::Available);
        assert_eq!(table.to_canonical("Active"), Status::Available);
        assert_eq!(table.to_canonical("ACTIVE "), Status::Unrecognized);
    }

    #[test]
    fn case_sensitive_table_requires_exact_case() {
        let table = StatusTable::builder()
            .case_sensitive(true)
            .text("ACTIVE", Status::Available)
            .build()
            .unwrap();
        assert_eq!(table.to_canonical("ACTIVE"), Status::Available);
        assert_eq!(table.to_canonical("active"), Status::Unrecognized);
    }

    #[test]
    fn longest_prefix_wins() {
        let table = prefix_table();
        assert_eq!(table.to_canonical("build_failed:disk"), Status::Error);
        assert_eq!(table.to_canonical("building"), Status::Pending);
        assert_eq!(table.to_canonical("ready-for-use"), Status::Available);
        assert_eq!(table.to_canonical("bui"), Status::Unrecognized);
    }

    #[test]
    fn exact_mode_does_not_match_prefixes() {
        let table = StatusTable::builder()
            .text("build", Status::Pending)
            .build()
            .unwrap();
        assert_eq!(table.to_canonical("building"), Status::Unrecognized);
    }

    #[test]
    fn later_entry_wins_after_folding() {
        let table = StatusTable::builder()
            .text("Active", Status::Error)
            .text("ACTIVE", Status::Available)
            .build()
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.to_canonical("active"), Status::Available);
    }

    #[test]
    fn unrecognized_target_is_rejected() {
        let err = StatusTable::builder()
            .text("unknown", Status::Unrecognized)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::UnrecognizedTarget {
                native: "unknown".to_string()
            }
        );

        let err = StatusTable::builder()
            .code(99, Status::Unrecognized)
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::UnrecognizedTarget { .. }));
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = StatusTable::builder()
            .text("", Status::Pending)
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::EmptyNative);
    }

    #[test]
    fn codes_and_text_are_separate_namespaces() {
        let table = StatusTable::builder()
            .code(8, Status::Available)
            .build()
            .unwrap();
        assert_eq!(table.to_canonical(&8_i64), Status::Available);
        assert_eq!(table.to_canonical("8"), Status::Unrecognized);
        assert_eq!(
            table.to_canonical(&NativeStatus::Code(8)),
            Status::Available
        );
    }

    #[test]
    fn missing_status_is_unrecognized() {
        let table = prefix_table();
        assert_eq!(table.to_canonical_opt(None::<&str>), Status::Unrecognized);
        assert_eq!(table.to_canonical_opt(Some("ready")), Status::Available);
    }

    #[test]
    fn closures_normalize() {
        let by_len = |raw: &str| {
            if raw.len() > 3 {
                Status::Available
            } else {
                Status::Unrecognized
            }
        };
        assert_eq!(by_len.to_canonical("long"), Status::Available);
    }

    #[test]
    fn infer_splits_codes_from_text() {
        assert_eq!(NativeStatus::infer("-1"), NativeStatus::Code(-1));
        assert_eq!(
            NativeStatus::infer("active"),
            NativeStatus::Text("active".to_string())
        );
    }

    #[test]
    fn other_native_values_are_unrecognized() {
        let table = StatusTable::builder()
            .text("1.5", Status::Available)
            .code(1, Status::Available)
            .build()
            .unwrap();
        let float: NativeStatus = serde_json::from_str("1.5").unwrap();
        let object: NativeStatus = serde_json::from_str(r#"{"code": 16, "name": "running"}"#).unwrap();

        assert!(matches!(float, NativeStatus::Other(_)));
        assert_eq!(table.to_canonical(&float), Status::Unrecognized);
        assert_eq!(table.to_canonical(&object), Status::Unrecognized);
        assert_eq!(object.to_string(), r#"{"code":16,"name":"running"}"#);
    }

    #[test]
    fn from_table_refolds_original_spelling() {
        let base = StatusTable::builder()
            .text("ACTIVE", Status::Available)
            .build()
            .unwrap();
        let strict = StatusTableBuilder::from_table(&base)
            .case_sensitive(true)
            .build()
            .unwrap();

        assert_eq!(base.entries()[0].0, NativeStatus::Text("ACTIVE".to_string()));
        assert_eq!(strict.to_canonical("ACTIVE"), Status::Available);
        assert_eq!(strict.to_canonical("active"), Status::Unrecognized);
    }

    #[test]
    fn from_table_keeps_options_and_entries() {
        let base = prefix_table();
        let extended = StatusTableBuilder::from_table(&base)
            .text("gone", Status::Deleted)
            .build()
            .unwrap();
        assert_eq!(extended.match_mode(), MatchMode::Prefix);
        assert_eq!(extended.len(), base.len() + 1);
        assert_eq!(extended.to_canonical("building"), Status::Pending);
    }
}
