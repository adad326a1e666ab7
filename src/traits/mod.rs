//! Collaborator contracts for the analysis pipeline

pub mod balance_provider;
pub mod price_provider;
pub mod domain_resolver;
pub mod report_sink;

// Re-export for convenience
pub use balance_provider::BalanceProvider;
pub use price_provider::PriceProvider;
pub use domain_resolver::DomainResolver;
pub use report_sink::ReportSink;
