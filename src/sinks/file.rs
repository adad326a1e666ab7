use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::traits::report_sink::ReportSink;
use crate::utils::helper::sanitize_filename;

/// Writes the shopping list to a text file
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Write to an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write to the default export name derived from the wallet input
    pub fn for_input(input: &str) -> Self {
        Self::new(format!("swap-shopping-list-{}.txt", sanitize_filename(input)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for FileSink {
    async fn deliver(&self, report: &str) -> anyhow::Result<()> {
        tokio::fs::write(&self.path, report).await?;
        info!("Wrote shopping list to {}", self.path.display());
        Ok(())
    }
}
