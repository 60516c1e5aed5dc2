// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates cloudimage.yml template files.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&Config::template());
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    let mut yaml = String::from(
        "# Status tables for providers without a built-in table, or overrides of one.\n\
         # Targets: pending, available, deleted, error. Anything not listed is UNRECOGNIZED.\n\
         providers:\n",
    );

    for (provider, table) in &config.providers {
        let _ = writeln!(yaml, "  {provider}:");
        if let Some(parent) = &table.extends {
            let _ = writeln!(yaml, "    extends: {parent}");
        }
        let _ = writeln!(yaml, "    # match: prefix");
        let _ = writeln!(yaml, "    # case_sensitive: true");
        let _ = writeln!(yaml, "    statuses:");
        for (native, status) in &table.statuses {
            let _ = writeln!(yaml, "      {native}: {}", status.as_str().to_ascii_lowercase());
        }
        let _ = writeln!(yaml, "    # codes:");
        let _ = writeln!(yaml, "    #   7: error");
    }

    yaml
}
