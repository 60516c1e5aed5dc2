// ABOUTME: Inspect command implementation.
// ABOUTME: Loads an image record file and prints the canonical image.

use cloudimage::adapter::{ImageRecord, RecordAdapter};
use cloudimage::diagnostics::Diagnostics;
use cloudimage::error::Result;
use cloudimage::normalize::StatusRegistry;
use cloudimage::output::Output;
use std::path::Path;

pub fn inspect(registry: &StatusRegistry, file: &Path, output: &Output) -> Result<()> {
    let record = ImageRecord::load(file)?;
    let mut diag = Diagnostics::default();

    let image = RecordAdapter::new(registry).image_with_diagnostics(&record, &mut diag);

    output.image(&image, &diag);
    Ok(())
}
