use solana_sdk::pubkey::Pubkey;
use tracing::info;

use crate::analysis::allocator::{Allocator, LiquidationPlan, LiquidationRequest};
use crate::analysis::report::render_shopping_list;
use crate::analysis::selection::{SelectAllState, SelectionSet};
use crate::analysis::sort::{sort_holdings, SortField, SortOrder};
use crate::models::portfolio::PortfolioSnapshot;
use crate::models::token::TokenHolding;

/// One analyzed portfolio plus the working state around it.
///
/// Derived values (sorted view, selected value, liquidation plan, report)
/// are recomputed from the snapshot and the current state on every call,
/// so they cannot drift out of sync.
pub struct AnalysisSession {
    input: String,
    snapshot: PortfolioSnapshot,
    selection: SelectionSet,
    sort: SortOrder,
    request: Option<LiquidationRequest>,
    allocator: Allocator,
}

impl AnalysisSession {
    /// Start a session over a fresh snapshot
    pub fn new(input: impl Into<String>, snapshot: PortfolioSnapshot) -> Self {
        Self {
            input: input.into(),
            snapshot,
            selection: SelectionSet::new(),
            sort: SortOrder::default(),
            request: None,
            allocator: Allocator::new(),
        }
    }

    /// The wallet input as the user entered it
    pub fn display_input(&self) -> &str {
        &self.input
    }

    pub fn snapshot(&self) -> &PortfolioSnapshot {
        &self.snapshot
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Swap in a fresh snapshot, dropping the selection and request
    pub fn replace_snapshot(&mut self, input: impl Into<String>, snapshot: PortfolioSnapshot) {
        self.input = input.into();
        self.snapshot = snapshot;
        self.selection.clear_all();
        self.request = None;
    }

    /// Holdings in the current sort order
    pub fn sorted_view(&self) -> Vec<TokenHolding> {
        sort_holdings(&self.snapshot.tokens, self.snapshot.total_value, self.sort)
    }

    /// Column-header click: the active field flips, a new field starts
    /// descending
    pub fn sort_by(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort = order;
    }

    /// Flip one token in or out of the liquidation selection
    pub fn toggle_token(&mut self, mint: &Pubkey) {
        self.selection.toggle(mint, &self.snapshot.tokens);
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.snapshot.tokens);
    }

    pub fn clear_all(&mut self) {
        self.selection.clear_all();
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Tri-state summary for a select-all control
    pub fn select_state(&self) -> SelectAllState {
        self.selection.state(self.snapshot.token_count())
    }

    /// Combined USD value of the selected holdings
    pub fn selected_value(&self) -> f64 {
        self.selection.selected_value(&self.snapshot.tokens)
    }

    /// Set or clear the liquidation request
    pub fn set_request(&mut self, request: Option<LiquidationRequest>) {
        self.request = request;
    }

    pub fn request(&self) -> Option<LiquidationRequest> {
        self.request
    }

    /// Run the allocator over the current selection and request
    pub fn plan(&self) -> LiquidationPlan {
        match &self.request {
            Some(request) => {
                self.allocator
                    .allocate(&self.snapshot.tokens, &self.selection, request)
            }
            None => LiquidationPlan {
                selected_value: self.selected_value(),
                ..LiquidationPlan::default()
            },
        }
    }

    /// Render the shopping list for the current state
    pub fn shopping_list(&self) -> String {
        let view = self.sorted_view();
        let plan = self.plan();
        render_shopping_list(&self.snapshot, &self.input, &self.selection, &view, &plan)
    }

    /// Log the analyzed portfolio as a readable table
    pub fn log_summary(&self) {
        info!("{}", "=".repeat(80));
        info!("PORTFOLIO ANALYSIS");
        info!("{}", "=".repeat(80));

        info!("Wallet Address: {}", self.snapshot.wallet_address);
        if self.snapshot.is_domain {
            info!("Resolved From: {}", self.input);
        }
        info!(
            "Analyzed At: {}",
            self.snapshot.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        info!("");
        info!("TOKEN HOLDINGS:");
        info!("{}", "-".repeat(80));

        for (i, token) in self.sorted_view().iter().enumerate() {
            info!(
                "{}. {} ({})",
                i + 1,
                token.symbol_or_unknown(),
                token.name.as_deref().unwrap_or("Unknown Token")
            );
            info!("   Mint: {}", token.mint);
            info!("   Balance: {:.8}", token.ui_amount);

            match token.price {
                Some(price) => {
                    info!("   Price: ${:.8}", price);
                    info!(
                        "   Value: ${:.4} ({:.1}% of portfolio)",
                        token.value_or_zero(),
                        token.portfolio_share(self.snapshot.total_value)
                    );
                }
                None => info!("   Price: Not available"),
            }
        }

        info!("{}", "-".repeat(80));
        info!("Total Tokens: {}", self.snapshot.token_count());
        info!("➤ Total Portfolio Value: ${:.2}", self.snapshot.total_value);
        if !self.selection.is_empty() {
            info!(
                "Selected: {}/{} (${:.2})",
                self.selection.len(),
                self.snapshot.token_count(),
                self.selected_value()
            );
        }
        info!("{}", "=".repeat(80));
    }
}
