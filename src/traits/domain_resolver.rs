use async_trait::async_trait;

/// Trait for resolving human-readable wallet domains
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Resolve a domain name to a wallet address string.
    ///
    /// Errors with a descriptive reason when the name does not resolve.
    async fn resolve(&self, domain: &str) -> anyhow::Result<String>;
}
