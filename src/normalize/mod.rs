// ABOUTME: Total mapping of provider-native image statuses onto canonical Status.
// ABOUTME: Lookup tables, built-in provider vocabularies, and a per-provider registry.

pub mod providers;
mod registry;
mod table;

pub use registry::StatusRegistry;
pub use table::{MatchMode, NativeStatus, NormalizeStatus, StatusTable, StatusTableBuilder, TableError};
