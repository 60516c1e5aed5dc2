// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports human-readable and JSON output modes.

use crate::compute::{ComputeMetadata, Image, Status};
use crate::diagnostics::Diagnostics;
use crate::normalize::{NativeStatus, StatusTable};
use crate::types::ProviderName;
use serde::Serialize;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly text
    Normal,
    /// JSON for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Print one line per normalized value.
    pub fn normalized(&self, provider: &ProviderName, results: &[(NativeStatus, Status)]) {
        match self.mode {
            OutputMode::Normal => {
                for (native, status) in results {
                    println!("{native} -> {status}");
                }
            }
            OutputMode::Json => {
                let rows: Vec<_> = results
                    .iter()
                    .map(|(native, status)| NormalizedRow {
                        provider,
                        native,
                        status: *status,
                    })
                    .collect();
                print_json(&rows);
            }
        }
    }

    /// Print status tables, one block per provider.
    pub fn tables(&self, tables: &[(&ProviderName, &StatusTable)]) {
        match self.mode {
            OutputMode::Normal => {
                for (provider, table) in tables {
                    println!(
                        "{provider} (match: {}, case sensitive: {})",
                        table.match_mode(),
                        table.is_case_sensitive()
                    );
                    for (native, status) in table.entries() {
                        println!("  {native} -> {status}");
                    }
                }
            }
            OutputMode::Json => {
                let views: Vec<_> = tables
                    .iter()
                    .map(|&(provider, table)| TableView {
                        provider,
                        match_mode: table.match_mode().to_string(),
                        case_sensitive: table.is_case_sensitive(),
                        entries: table
                            .entries()
                            .into_iter()
                            .map(|(native, status)| TableEntry { native, status })
                            .collect(),
                    })
                    .collect();
                print_json(&views);
            }
        }
    }

    /// Print an image summary, with warnings on stderr.
    pub fn image(&self, image: &Image, diagnostics: &Diagnostics) {
        match self.mode {
            OutputMode::Normal => {
                println!("Image:       {} ({})", image.name(), image.id());
                println!("Status:      {}", image.status());
                if let Some(backend) = image.backend_status() {
                    println!("Reported as: {backend}");
                }
                println!("OS:          {}", image.operating_system());
                println!("Version:     {}", display_or_none(image.version()));
                println!("Description: {}", display_or_none(image.description()));
                match image.default_credentials() {
                    Some(creds) => println!("Login user:  {}", creds.user()),
                    None => println!("Login user:  <none>"),
                }
                if let Some(location) = image.location() {
                    println!("Location:    {} ({})", location.id(), location.scope());
                }
            }
            OutputMode::Json => match serde_json::to_value(image) {
                Ok(mut value) => {
                    redact_secrets(&mut value);
                    print_json(&value);
                }
                Err(e) => tracing::error!("failed to serialize image: {}", e),
            },
        }

        for warning in diagnostics.warnings() {
            eprintln!("warning: {}", warning.message);
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => println!("{message}"),
            OutputMode::Json => print_json(&JsonEvent {
                event: "success",
                message,
            }),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => eprintln!("Error: {message}"),
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() { "<none>" } else { value }
}

const REDACTED: &str = "<redacted>";

/// Masks the same secrets `Debug` hides on an image's JSON form.
fn redact_secrets(image: &mut serde_json::Value) {
    if let Some(password) = image.get_mut("admin_password") {
        *password = REDACTED.into();
    }
    if let Some(credentials) = image.get_mut("default_credentials") {
        for field in ["password", "private_key"] {
            if let Some(secret) = credentials.get_mut(field) {
                *secret = REDACTED.into();
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("failed to serialize output: {}", e),
    }
}

#[derive(Serialize)]
struct NormalizedRow<'a> {
    provider: &'a ProviderName,
    native: &'a NativeStatus,
    status: Status,
}

#[derive(Serialize)]
struct TableEntry {
    native: NativeStatus,
    status: Status,
}

#[derive(Serialize)]
struct TableView<'a> {
    provider: &'a ProviderName,
    match_mode: String,
    case_sensitive: bool,
    entries: Vec<TableEntry>,
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redact_secrets_masks_credentials_and_admin_password() {
        let mut image = json!({
            "id": "img-1",
            "admin_password": "s3cret",
            "default_credentials": {"user": "root", "password": "pw", "private_key": "key"}
        });

        redact_secrets(&mut image);

        assert_eq!(image["admin_password"], REDACTED);
        assert_eq!(image["default_credentials"]["password"], REDACTED);
        assert_eq!(image["default_credentials"]["private_key"], REDACTED);
        assert_eq!(image["default_credentials"]["user"], "root");
        assert_eq!(image["id"], "img-1");
    }

    #[test]
    fn redact_secrets_leaves_absent_fields_absent() {
        let mut image = json!({"id": "img-1", "default_credentials": {"user": "root"}});
        redact_secrets(&mut image);
        assert!(image.get("admin_password").is_none());
        assert!(image["default_credentials"].get("password").is_none());
    }
}
