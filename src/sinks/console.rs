use async_trait::async_trait;
use tracing::debug;

use crate::traits::report_sink::ReportSink;

/// Writes the shopping list verbatim to stdout
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSink for ConsoleSink {
    async fn deliver(&self, report: &str) -> anyhow::Result<()> {
        println!("{}", report);
        debug!("Shopping list written to stdout");
        Ok(())
    }
}
