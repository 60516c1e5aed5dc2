// ABOUTME: Command module aggregator for the cloudimage CLI.
// ABOUTME: Re-exports normalize, tables, and inspect command handlers.

mod inspect;
mod normalize;
mod tables;

pub use inspect::inspect;
pub use normalize::normalize;
pub use tables::tables;

use cloudimage::error::{Error, Result};
use cloudimage::types::ProviderName;

fn parse_provider(name: &str) -> Result<ProviderName> {
    ProviderName::new(name).map_err(|e| Error::UnknownProvider(format!("{name} ({e})")))
}
