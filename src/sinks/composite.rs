use std::sync::Arc;
use async_trait::async_trait;

use crate::traits::report_sink::ReportSink;

/// Composite sink that fans the report out to multiple destinations
pub struct CompositeSink {
    sinks: Vec<Arc<dyn ReportSink>>,
}

impl CompositeSink {
    /// Create a new composite sink
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink to the composite
    pub fn add_sink(&mut self, sink: Arc<dyn ReportSink>) {
        self.sinks.push(sink);
    }

    /// Check if there are any sinks
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Number of sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for CompositeSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSink for CompositeSink {
    async fn deliver(&self, report: &str) -> anyhow::Result<()> {
        for sink in &self.sinks {
            sink.deliver(report).await?;
        }
        Ok(())
    }
}
