use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use solana_account_decoder_client_types::token::UiTokenAccount;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info};

use crate::traits::balance_provider::BalanceProvider;
use crate::models::token::TokenHolding;
use crate::utils::helper::lamports_to_sol;

/// Metadata for well-known mints, so the common tokens render with their
/// real symbols without a metadata service
const KNOWN_TOKENS: &[(&str, &str, &str)] = &[
    ("So11111111111111111111111111111111111111112", "SOL", "Wrapped SOL"),
    ("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC", "USD Coin"),
    ("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", "USDT", "USD Tether"),
    ("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", "BONK", "Bonk"),
    ("JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN", "JUP", "Jupiter"),
    ("mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So", "mSOL", "Marinade staked SOL"),
];

/// Wrapped SOL mint, used to fold the native balance into the token list
pub fn wrapped_sol_mint() -> Pubkey {
    spl_token::native_mint::id()
}

/// RPC-based balance provider
pub struct RpcBalanceProvider {
    rpc_client: Arc<RpcClient>,
    metadata_cache: Arc<DashMap<Pubkey, (String, String)>>,
}

impl RpcBalanceProvider {
    /// Create a new RPC balance provider
    pub fn new(rpc_url: String) -> Self {
        let client = RpcClient::new_with_commitment(
            rpc_url,
            CommitmentConfig { commitment: CommitmentLevel::Processed },
        );

        Self {
            rpc_client: Arc::new(client),
            metadata_cache: Arc::new(DashMap::new()),
        }
    }

    /// Get RPC client (for internal use)
    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }

    fn lookup_metadata(&self, mint: &Pubkey) -> (String, String) {
        if let Some(entry) = self.metadata_cache.get(mint) {
            return entry.clone();
        }

        let mint_str = mint.to_string();
        let meta = KNOWN_TOKENS
            .iter()
            .find(|(addr, _, _)| *addr == mint_str)
            .map(|(_, symbol, name)| ((*symbol).to_string(), (*name).to_string()))
            .unwrap_or_else(|| (format!("TOKEN_{}", &mint_str[..4]), "Unknown Token".to_string()));

        self.metadata_cache.insert(*mint, meta.clone());
        meta
    }

    fn with_metadata(&self, holding: TokenHolding) -> TokenHolding {
        let (symbol, name) = self.lookup_metadata(&holding.mint);
        holding.with_metadata(symbol, name, None)
    }

    async fn fetch_program_accounts(
        &self,
        wallet: &Pubkey,
        program_id: Pubkey,
        holdings: &mut Vec<TokenHolding>,
    ) -> anyhow::Result<()> {
        let accounts = self
            .rpc_client
            .get_token_accounts_by_owner(wallet, TokenAccountsFilter::ProgramId(program_id))
            .await?;

        debug!("{} accounts under program {}", accounts.len(), program_id);

        for keyed_account in accounts {
            if let solana_account_decoder::UiAccountData::Json(parsed_account) =
                keyed_account.account.data
            {
                if let Some(info) = parsed_account.parsed.get("info") {
                    if let Ok(token_data) =
                        serde_json::from_value::<UiTokenAccount>(info.clone())
                    {
                        let token_amount = token_data.token_amount;
                        if let Ok(amount_u64) = token_amount.amount.parse::<u64>() {
                            if amount_u64 > 0 {
                                let mint: Pubkey = token_data.mint.parse()?;
                                let holding = TokenHolding::new(
                                    mint,
                                    token_amount.ui_amount.unwrap_or(0.0),
                                    token_amount.decimals,
                                );
                                holdings.push(self.with_metadata(holding));
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl BalanceProvider for RpcBalanceProvider {
    async fn fetch_token_balances(&self, wallet: &Pubkey) -> anyhow::Result<Vec<TokenHolding>> {
        // Fetch accounts for both SPL Token and SPL Token-2022 programs
        let mut holdings = Vec::new();
        self.fetch_program_accounts(wallet, spl_token::id(), &mut holdings)
            .await?;
        self.fetch_program_accounts(wallet, spl_token_2022::id(), &mut holdings)
            .await?;

        // Fold the native SOL balance into the wrapped-SOL entry
        let lamports = self.rpc_client.get_balance(wallet).await?;
        if lamports > 0 {
            let sol_amount = lamports_to_sol(lamports);
            let sol_mint = wrapped_sol_mint();
            match holdings.iter_mut().find(|t| t.mint == sol_mint) {
                Some(wsol) => wsol.ui_amount += sol_amount,
                None => {
                    let holding = TokenHolding::new(sol_mint, sol_amount, 9);
                    holdings.push(self.with_metadata(holding));
                }
            }
        }

        if holdings.is_empty() {
            anyhow::bail!("no token holdings found for wallet {}", wallet);
        }

        info!("Found {} tokens with non-zero balance", holdings.len());
        Ok(holdings)
    }
}
