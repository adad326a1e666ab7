//! Shared helpers and error types

pub mod helper;
pub mod errors;

// Re-export for convenience
pub use errors::AnalyzeError;
pub use helper::{is_sns_domain, parse_pubkey, validate_address};
