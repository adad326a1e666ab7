use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::holdings::filter_valuable;
use crate::models::portfolio::PortfolioSnapshot;
use crate::traits::{
    balance_provider::BalanceProvider,
    domain_resolver::DomainResolver,
    price_provider::PriceProvider,
};
use crate::utils::errors::AnalyzeError;
use crate::utils::helper::{is_sns_domain, parse_pubkey};

/// End-to-end analysis pipeline: input resolution, balance fetch,
/// pricing and the valuable-holdings filter.
pub struct WalletAnalyzer {
    balance_provider: Arc<dyn BalanceProvider>,
    price_provider: Arc<dyn PriceProvider>,
    domain_resolver: Arc<dyn DomainResolver>,
}

impl WalletAnalyzer {
    /// Create a new wallet analyzer
    pub fn new(
        balance_provider: Arc<dyn BalanceProvider>,
        price_provider: Arc<dyn PriceProvider>,
        domain_resolver: Arc<dyn DomainResolver>,
    ) -> Self {
        Self {
            balance_provider,
            price_provider,
            domain_resolver,
        }
    }

    /// Analyze a wallet address or SNS domain into a portfolio snapshot
    pub async fn analyze(&self, input: &str) -> Result<PortfolioSnapshot, AnalyzeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        let is_domain = is_sns_domain(trimmed);
        let address = if is_domain {
            self.domain_resolver
                .resolve(trimmed)
                .await
                .map_err(|e| AnalyzeError::UnresolvableDomain {
                    domain: trimmed.to_string(),
                    reason: e.to_string(),
                })?
        } else {
            trimmed.to_string()
        };

        let wallet =
            parse_pubkey(&address).map_err(|_| AnalyzeError::InvalidAddress(address.clone()))?;

        info!("Analyzing wallet: {}", wallet);

        let raw = self.balance_provider.fetch_token_balances(&wallet).await?;
        debug!("Fetched {} raw balances", raw.len());

        let priced = self.price_provider.apply_prices(raw).await;
        let (tokens, total_value) = filter_valuable(priced);

        let snapshot = PortfolioSnapshot::new(wallet, tokens, total_value, is_domain);
        info!(
            "Analysis complete: {} valuable tokens, total value ${:.2}",
            snapshot.token_count(),
            snapshot.total_value
        );
        Ok(snapshot)
    }
}
