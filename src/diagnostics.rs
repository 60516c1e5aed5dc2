// ABOUTME: Diagnostics accumulator for non-fatal findings while converting images.
// ABOUTME: Normalization never fails, but unrecognized input should still be visible.

/// Collects non-fatal warnings raised while building images.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// A non-fatal warning collected during conversion.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The provider reported a status its table does not map.
    pub fn unrecognized_status(provider: &str, native: &str) -> Self {
        Self {
            kind: WarningKind::UnrecognizedStatus,
            message: format!("{provider}: status '{native}' is unrecognized"),
        }
    }

    /// The record carried no status at all.
    pub fn missing_status(provider: &str) -> Self {
        Self {
            kind: WarningKind::UnrecognizedStatus,
            message: format!("{provider}: image has no status, treating as unrecognized"),
        }
    }

    /// No status table is registered for the provider.
    pub fn unknown_provider(provider: &str) -> Self {
        Self {
            kind: WarningKind::UnknownProvider,
            message: format!("no status table for provider '{provider}'"),
        }
    }

    /// The operating system family name matched no known family.
    pub fn unrecognized_os_family(value: &str) -> Self {
        Self {
            kind: WarningKind::UnrecognizedOsFamily,
            message: format!("operating system family '{value}' is unrecognized"),
        }
    }
}

/// Categories of warnings that can occur during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A status was absent or missing from the provider's table.
    UnrecognizedStatus,
    /// No table exists for the provider at all.
    UnknownProvider,
    /// The OS family fell back to unrecognized.
    UnrecognizedOsFamily,
}
