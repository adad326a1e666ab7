use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use crate::models::token::TokenHolding;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Get price for a token in USD
    async fn get_token_price(&self, mint: &Pubkey) -> Option<f64>;

    /// Attach prices and USD values to a set of holdings.
    ///
    /// Holdings with no known price come back unchanged. Implementations
    /// with a batch endpoint should override this.
    async fn apply_prices(&self, holdings: Vec<TokenHolding>) -> Vec<TokenHolding> {
        let mut priced = Vec::with_capacity(holdings.len());
        for holding in holdings {
            match self.get_token_price(&holding.mint).await {
                Some(price) => priced.push(holding.with_price(price)),
                None => priced.push(holding),
            }
        }
        priced
    }
}
