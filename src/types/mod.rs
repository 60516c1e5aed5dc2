// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod provider_name;

pub use id::{Id, ImageId, ImageMarker, LocationId, LocationMarker};
pub use provider_name::{ProviderName, ProviderNameError};
