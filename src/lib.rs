// ABOUTME: Library root for cloudimage - provider-neutral image model and status normalization.
// ABOUTME: The CLI binary is in main.rs.

pub mod adapter;
pub mod compute;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod normalize;
pub mod output;
pub mod types;
