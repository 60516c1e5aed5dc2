// ABOUTME: Normalize command implementation.
// ABOUTME: Maps raw status values through one provider's table; never fails on unknown values.

use super::parse_provider;
use cloudimage::compute::Status;
use cloudimage::diagnostics::{Diagnostics, Warning};
use cloudimage::error::Result;
use cloudimage::normalize::{NativeStatus, NormalizeStatus, StatusRegistry};
use cloudimage::output::Output;

pub fn normalize(
    registry: &StatusRegistry,
    provider: &str,
    raw: &[String],
    output: &Output,
) -> Result<()> {
    let provider = parse_provider(provider)?;
    let table = registry.table(&provider);
    let mut diag = Diagnostics::default();

    if table.is_none() {
        diag.warn(Warning::unknown_provider(provider.as_str()));
    }

    let results: Vec<_> = raw
        .iter()
        .map(|value| {
            let native = NativeStatus::infer(value);
            let status = table.map_or(Status::Unrecognized, |t| t.to_canonical(&native));
            (native, status)
        })
        .collect();

    output.normalized(&provider, &results);
    Ok(())
}
