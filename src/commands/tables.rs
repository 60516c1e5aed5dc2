// ABOUTME: Tables command implementation.
// ABOUTME: Prints built-in and configured status tables.

use super::parse_provider;
use cloudimage::error::{Error, Result};
use cloudimage::normalize::StatusRegistry;
use cloudimage::output::Output;

pub fn tables(registry: &StatusRegistry, provider: Option<&str>, output: &Output) -> Result<()> {
    match provider {
        Some(name) => {
            let provider = parse_provider(name)?;
            let table = registry
                .table(&provider)
                .ok_or_else(|| Error::UnknownProvider(name.to_string()))?;
            output.tables(&[(&provider, table)]);
        }
        None => {
            let all: Vec<_> = registry
                .providers()
                .filter_map(|provider| registry.table(provider).map(|table| (provider, table)))
                .collect();
            output.tables(&all);
        }
    }

    Ok(())
}
