use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;
use super::token::TokenHolding;

/// Immutable result of one wallet analysis.
///
/// Holds only the valuable positions, in the order the balance fetch
/// produced them, plus their combined USD value.
#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub wallet_address: Pubkey,
    pub tokens: Vec<TokenHolding>,
    pub total_value: f64,
    /// Whether the wallet was entered as a domain rather than an address
    pub is_domain: bool,
    pub analyzed_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    /// Create a new snapshot
    pub fn new(
        wallet_address: Pubkey,
        tokens: Vec<TokenHolding>,
        total_value: f64,
        is_domain: bool,
    ) -> Self {
        Self {
            wallet_address,
            tokens,
            total_value,
            is_domain,
            analyzed_at: Utc::now(),
        }
    }

    /// Look up a holding by mint
    pub fn find(&self, mint: &Pubkey) -> Option<&TokenHolding> {
        self.tokens.iter().find(|t| t.mint == *mint)
    }

    /// Check if the snapshot holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens in the portfolio
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
