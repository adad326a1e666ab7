use thiserror::Error;

/// User-facing failures of the analysis pipeline
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("please enter a wallet address or domain")]
    EmptyInput,

    #[error("failed to resolve domain {domain}: {reason}")]
    UnresolvableDomain { domain: String, reason: String },

    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
