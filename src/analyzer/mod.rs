//! Analysis orchestration and session state

pub mod wallet_analyzer;
pub mod session;

// Re-export for convenience
pub use wallet_analyzer::WalletAnalyzer;
pub use session::AnalysisSession;
