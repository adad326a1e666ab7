use async_trait::async_trait;

/// Consumer of a finished shopping-list report
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver the rendered report
    async fn deliver(&self, report: &str) -> anyhow::Result<()>;
}
