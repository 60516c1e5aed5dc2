// ABOUTME: Canonical image lifecycle status shared by every provider.
// ABOUTME: Closed five-value vocabulary plus the conceptual transition model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical lifecycle state of an image.
///
/// Provider adapters translate whatever their cloud reports into one of these
/// values. Anything they cannot place becomes [`Status::Unrecognized`]; there
/// is no "unknown" or absent state on an [`Image`](super::Image).
///
/// On the wire the variants serialize as their upper-case names, and
/// `UNRECOGNIZED` is a value in its own right, distinct from a missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The image is in transition and not yet usable.
    Pending,
    /// The image can be used to launch instances.
    Available,
    /// The image is visible but being, or already, removed.
    Deleted,
    /// Creation or a state transition of the image failed.
    Error,
    /// The provider reported a state outside this vocabulary.
    Unrecognized,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown canonical status: {0}")]
pub struct ParseStatusError(pub String);

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::Available,
        Status::Deleted,
        Status::Error,
        Status::Unrecognized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Available => "AVAILABLE",
            Status::Deleted => "DELETED",
            Status::Error => "ERROR",
            Status::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Only available images may be used to launch instances.
    pub fn is_usable(&self) -> bool {
        matches!(self, Status::Available)
    }

    pub fn is_transitional(&self) -> bool {
        matches!(self, Status::Pending)
    }

    /// Deleted and failed images never become usable again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Deleted | Status::Error)
    }

    /// Whether a later snapshot may report `next` after this status.
    ///
    /// Images move `PENDING -> AVAILABLE | ERROR` and `AVAILABLE -> DELETED`.
    /// Any state may drift to `UNRECOGNIZED` when a provider's vocabulary
    /// changes, and leaving `UNRECOGNIZED` is always allowed because the real
    /// prior state is unknown. Nothing enforces this on an image; it describes
    /// what status tables are expected to produce over time.
    pub fn can_transition_to(&self, next: Status) -> bool {
        if *self == next {
            return true;
        }

        match (self, next) {
            (_, Status::Unrecognized) => true,
            (Status::Unrecognized, _) => true,
            (Status::Pending, Status::Available | Status::Error) => true,
            (Status::Available, Status::Deleted) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a canonical name, ignoring ASCII case.
///
/// This is for canonical values written by people (config files, CLI flags).
/// Provider vocabularies go through a status table instead, which never fails.
impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("available".parse::<Status>(), Ok(Status::Available));
        assert_eq!("Pending".parse::<Status>(), Ok(Status::Pending));
        assert_eq!("UNRECOGNIZED".parse::<Status>(), Ok(Status::Unrecognized));
    }

    #[test]
    fn rejects_non_canonical_names() {
        assert!("active".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        for status in Status::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status));
        }
    }

    #[test]
    fn only_available_is_usable() {
        let usable: Vec<_> = Status::ALL.into_iter().filter(Status::is_usable).collect();
        assert_eq!(usable, vec![Status::Available]);
    }

    #[test]
    fn transition_model() {
        assert!(Status::Pending.can_transition_to(Status::Available));
        assert!(Status::Pending.can_transition_to(Status::Error));
        assert!(Status::Available.can_transition_to(Status::Deleted));
        assert!(Status::Deleted.can_transition_to(Status::Unrecognized));
        assert!(Status::Unrecognized.can_transition_to(Status::Available));

        assert!(!Status::Available.can_transition_to(Status::Pending));
        assert!(!Status::Deleted.can_transition_to(Status::Available));
        assert!(!Status::Error.can_transition_to(Status::Available));
        assert!(!Status::Pending.can_transition_to(Status::Deleted));
    }
}
