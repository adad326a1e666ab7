use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, warn};

use crate::traits::price_provider::PriceProvider;
use crate::models::token::TokenHolding;

/// Default Jupiter price API endpoint
pub const DEFAULT_PRICE_API_URL: &str = "https://lite-api.jup.ag";

#[derive(Debug, Deserialize)]
struct PriceResponse {
    /// Unknown mints come back as null entries
    data: HashMap<String, Option<PriceEntry>>,
}

#[derive(Debug, Deserialize)]
struct PriceEntry {
    /// Decimal string, e.g. "147.2612"
    price: String,
}

/// Jupiter-backed price provider with an in-process cache
pub struct JupiterPriceProvider {
    client: reqwest::Client,
    base_url: String,
    price_cache: Arc<DashMap<Pubkey, f64>>,
}

impl JupiterPriceProvider {
    /// Create a provider against a price API endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            price_cache: Arc::new(DashMap::new()),
        }
    }

    /// Fetch a batch of prices from the API, returning whatever resolved
    async fn fetch_prices(&self, mints: &[Pubkey]) -> anyhow::Result<HashMap<Pubkey, f64>> {
        let ids = mints
            .iter()
            .map(Pubkey::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/price/v2?ids={}", self.base_url, ids);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let parsed: PriceResponse = response.json().await?;

        let mut prices = HashMap::new();
        for (mint_str, entry) in parsed.data {
            let Some(entry) = entry else { continue };
            let Ok(mint) = mint_str.parse::<Pubkey>() else { continue };
            match entry.price.parse::<f64>() {
                Ok(price) => {
                    prices.insert(mint, price);
                }
                Err(e) => warn!("Unparseable price for {}: {}", mint_str, e),
            }
        }

        debug!("Fetched {} prices for {} mints", prices.len(), mints.len());
        Ok(prices)
    }
}

impl Default for JupiterPriceProvider {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_API_URL)
    }
}

#[async_trait]
impl PriceProvider for JupiterPriceProvider {
    async fn get_token_price(&self, mint: &Pubkey) -> Option<f64> {
        // Check cache first
        if let Some(price) = self.price_cache.get(mint) {
            return Some(*price);
        }

        match self.fetch_prices(std::slice::from_ref(mint)).await {
            Ok(prices) => {
                let price = prices.get(mint).copied();
                if let Some(price) = price {
                    self.price_cache.insert(*mint, price);
                }
                price
            }
            Err(e) => {
                debug!("Failed to fetch price for {}: {}", mint, e);
                None
            }
        }
    }

    async fn apply_prices(&self, holdings: Vec<TokenHolding>) -> Vec<TokenHolding> {
        // One batch request for everything not already cached
        let to_fetch: Vec<Pubkey> = holdings
            .iter()
            .map(|t| t.mint)
            .filter(|mint| !self.price_cache.contains_key(mint))
            .collect();

        if !to_fetch.is_empty() {
            match self.fetch_prices(&to_fetch).await {
                Ok(prices) => {
                    for (mint, price) in prices {
                        self.price_cache.insert(mint, price);
                    }
                }
                Err(e) => warn!("Batch price fetch failed: {}", e),
            }
        }

        holdings
            .into_iter()
            .map(|holding| match self.price_cache.get(&holding.mint) {
                Some(price) => {
                    let price = *price;
                    holding.with_price(price)
                }
                None => holding,
            })
            .collect()
    }
}

/// Fixed-table price provider for offline runs and tests
pub struct StaticPriceProvider {
    prices: DashMap<Pubkey, f64>,
}

impl StaticPriceProvider {
    /// Create a provider preloaded with the major stablecoins at 1 USD
    pub fn new() -> Self {
        let provider = Self { prices: DashMap::new() };
        for (mint, price) in [
            ("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 1.0), // USDC
            ("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 1.0), // USDT
        ] {
            if let Ok(mint) = mint.parse() {
                provider.prices.insert(mint, price);
            }
        }
        provider
    }

    /// Seed a price
    pub fn with_price(self, mint: Pubkey, price: f64) -> Self {
        self.prices.insert(mint, price);
        self
    }
}

impl Default for StaticPriceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn get_token_price(&self, mint: &Pubkey) -> Option<f64> {
        self.prices.get(mint).map(|price| *price)
    }
}
