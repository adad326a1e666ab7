//! Data models for the portfolio analyzer

pub mod token;
pub mod portfolio;

// Re-export for convenience
pub use token::TokenHolding;
pub use portfolio::PortfolioSnapshot;
