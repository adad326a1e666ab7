use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::traits::domain_resolver::DomainResolver;

/// Default SNS resolver proxy endpoint
pub const DEFAULT_RESOLVER_URL: &str = "https://sns-sdk-proxy.jup.ag";

#[derive(Debug, Deserialize)]
struct ResolveResponse {
    address: Option<String>,
}

/// Resolver for SNS names backed by the public resolver proxy
pub struct SnsDomainResolver {
    client: reqwest::Client,
    base_url: String,
}

impl SnsDomainResolver {
    /// Create a resolver against a proxy endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for SnsDomainResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLVER_URL)
    }
}

#[async_trait]
impl DomainResolver for SnsDomainResolver {
    async fn resolve(&self, domain: &str) -> anyhow::Result<String> {
        let clean = domain.trim().trim_start_matches('@').to_lowercase();
        let url = format!("{}/resolve/{}", self.base_url, clean);

        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            let parsed: ResolveResponse = response.json().await?;
            if let Some(address) = parsed.address {
                debug!("Resolved {} to {}", clean, address);
                return Ok(address);
            }
        }

        anyhow::bail!("could not resolve domain: {}", clean)
    }
}
