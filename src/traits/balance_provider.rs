use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use crate::models::token::TokenHolding;

/// Core trait for fetching on-chain balances
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Fetch all token balances for a wallet, without market data.
    ///
    /// Errors when the wallet is unreachable or holds nothing at all.
    async fn fetch_token_balances(&self, wallet: &Pubkey) -> anyhow::Result<Vec<TokenHolding>>;
}
