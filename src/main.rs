use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use multisig_analyzer::analysis::allocator::LiquidationRequest;
use multisig_analyzer::analysis::sort::SortOrder;
use multisig_analyzer::providers::domain_resolver::{SnsDomainResolver, DEFAULT_RESOLVER_URL};
use multisig_analyzer::providers::price_provider::{JupiterPriceProvider, DEFAULT_PRICE_API_URL};
use multisig_analyzer::sinks::{CompositeSink, ConsoleSink, FileSink, TelegramSink};
use multisig_analyzer::utils::helper::parse_pubkey;
use multisig_analyzer::{AnalysisSession, ReportSink, RpcBalanceProvider, WalletAnalyzer};

/// Pro-rata swap shopping lists for Solana multisig wallets
#[derive(Parser, Debug)]
#[command(name = "multisig-analyzer", version, about)]
struct Cli {
    /// Wallet address or SNS domain (.sol, .bonk, ...) to analyze
    wallet: String,

    /// Liquidate this percentage of the selected value
    #[arg(long, conflicts_with = "amount")]
    percent: Option<f64>,

    /// Liquidate this dollar amount of the selected value
    #[arg(long)]
    amount: Option<f64>,

    /// Comma-separated mints to select (default: every valuable holding)
    #[arg(long, value_delimiter = ',')]
    select: Vec<String>,

    /// Sort order for the holdings table, e.g. value, balance:asc
    #[arg(long, default_value = "value:desc")]
    sort: SortOrder,

    /// Also write the list to a file; without a path the name is derived
    /// from the wallet input
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    output: Option<String>,

    /// Solana RPC endpoint (defaults to SOLANA_RPC_URL or mainnet-beta)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Price API endpoint
    #[arg(long, default_value = DEFAULT_PRICE_API_URL)]
    price_url: String,

    /// SNS resolver endpoint
    #[arg(long, default_value = DEFAULT_RESOLVER_URL)]
    resolver_url: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tokio::runtime::Runtime::new()?.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let rpc_url = cli
        .rpc_url
        .clone()
        .or_else(|| std::env::var("SOLANA_RPC_URL").ok())
        .unwrap_or_else(|| "https://api.mainnet-beta.solana.com".to_string());

    info!("RPC URL: {}", rpc_url);
    info!("Wallet input: {}", cli.wallet);

    let analyzer = WalletAnalyzer::new(
        Arc::new(RpcBalanceProvider::new(rpc_url)),
        Arc::new(JupiterPriceProvider::new(cli.price_url.clone())),
        Arc::new(SnsDomainResolver::new(cli.resolver_url.clone())),
    );

    let snapshot = analyzer.analyze(&cli.wallet).await?;

    let mut session = AnalysisSession::new(cli.wallet.clone(), snapshot);
    session.set_sort(cli.sort);

    if cli.select.is_empty() {
        session.select_all();
    } else {
        for raw in &cli.select {
            let mint = parse_pubkey(raw)?;
            if session.snapshot().find(&mint).is_none() {
                warn!("{} is not among the valuable holdings, skipping", mint);
                continue;
            }
            session.toggle_token(&mint);
        }
    }

    let request = cli
        .percent
        .map(LiquidationRequest::percentage)
        .or_else(|| cli.amount.map(LiquidationRequest::absolute));
    session.set_request(request);

    session.log_summary();

    let report = session.shopping_list();

    let mut sink = CompositeSink::new();
    sink.add_sink(Arc::new(ConsoleSink::new()));
    if let Some(path) = &cli.output {
        let file_sink = if path.is_empty() {
            FileSink::for_input(session.display_input())
        } else {
            FileSink::new(path)
        };
        sink.add_sink(Arc::new(file_sink));
    }
    if let Some(telegram) = TelegramSink::from_env() {
        info!("Telegram delivery enabled");
        sink.add_sink(Arc::new(telegram));
    }

    sink.deliver(&report).await?;

    Ok(())
}
