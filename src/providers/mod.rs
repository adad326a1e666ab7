//! Live implementations of the provider traits

pub mod rpc_provider;
pub mod price_provider;
pub mod domain_resolver;

// Re-export for convenience
pub use rpc_provider::RpcBalanceProvider;
pub use price_provider::{JupiterPriceProvider, StaticPriceProvider};
pub use domain_resolver::SnsDomainResolver;
