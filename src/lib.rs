//! Multisig Portfolio Analyzer Library
//!
//! Turns a Solana wallet address or SNS domain into a pro-rata swap
//! "shopping list": the per-token amounts to swap in order to liquidate
//! a chosen share of the portfolio while keeping its relative weights.
//! Built for multisig setups where the swaps are executed by hand.

// Public modules - these are the API surface
pub mod models;
pub mod traits;
pub mod providers;
pub mod analysis;
pub mod analyzer;
pub mod sinks;
pub mod utils;

// Re-export commonly used items for easier access
pub use models::{
    token::TokenHolding,
    portfolio::PortfolioSnapshot,
};
pub use traits::{
    balance_provider::BalanceProvider,
    price_provider::PriceProvider,
    domain_resolver::DomainResolver,
    report_sink::ReportSink,
};
pub use providers::{
    rpc_provider::RpcBalanceProvider,
    price_provider::{JupiterPriceProvider, StaticPriceProvider},
    domain_resolver::SnsDomainResolver,
};
pub use analysis::{
    allocator::{Allocation, Allocator, LiquidationKind, LiquidationPlan, LiquidationRequest},
    selection::{SelectAllState, SelectionSet},
    sort::{SortDirection, SortField, SortOrder},
};
pub use analyzer::{
    wallet_analyzer::WalletAnalyzer,
    session::AnalysisSession,
};
pub use sinks::{
    console::ConsoleSink,
    file::FileSink,
    telegram::TelegramSink,
    composite::CompositeSink,
};
pub use utils::errors::AnalyzeError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
