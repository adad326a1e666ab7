use solana_sdk::pubkey::Pubkey;

use crate::models::token::TokenHolding;
use super::selection::SelectionSet;

/// Price assumed for tokens the price feed knows nothing about
pub const DEFAULT_PRICE_FALLBACK: f64 = 1.0;

/// How a liquidation target is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidationKind {
    /// Percent of the selected value
    Percentage,
    /// Dollar amount
    Absolute,
}

/// User-entered liquidation target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidationRequest {
    pub kind: LiquidationKind,
    pub amount: f64,
}

impl LiquidationRequest {
    /// Target a percentage of the selected value
    pub fn percentage(amount: f64) -> Self {
        Self { kind: LiquidationKind::Percentage, amount }
    }

    /// Target a dollar amount
    pub fn absolute(amount: f64) -> Self {
        Self { kind: LiquidationKind::Absolute, amount }
    }

    /// Resolve the target liquidation value against the selected value.
    ///
    /// Percentages are taken at face value, so more than 100% is allowed.
    /// Absolute amounts are capped at the selected value. A NaN amount
    /// resolves to zero.
    pub fn target_value(&self, selected_value: f64) -> f64 {
        if self.amount.is_nan() {
            return 0.0;
        }
        match self.kind {
            LiquidationKind::Percentage => selected_value * self.amount / 100.0,
            LiquidationKind::Absolute => self.amount.min(selected_value),
        }
    }
}

/// Per-token slice of a liquidation plan
#[derive(Debug, Clone)]
pub struct Allocation {
    pub mint: Pubkey,
    pub symbol: String,
    /// Balance available for the swap
    pub ui_amount: f64,
    /// Token amount to swap, never more than the balance
    pub swap_amount: f64,
    /// USD value this token contributes to the target
    pub liquidation_amount: f64,
    /// This token's share of the selected value, as a percentage
    pub percentage_of_selected: f64,
}

/// Result of one allocator run
#[derive(Debug, Clone, Default)]
pub struct LiquidationPlan {
    pub target_value: f64,
    pub selected_value: f64,
    pub allocations: Vec<Allocation>,
}

impl LiquidationPlan {
    /// Whether there is anything to liquidate
    pub fn has_liquidation(&self) -> bool {
        self.target_value > 0.0 && !self.allocations.is_empty()
    }

    /// Portfolio value left after the liquidation
    pub fn remaining_value(&self, total_value: f64) -> f64 {
        total_value - self.target_value
    }

    /// Share of the selected value being liquidated, as a percentage
    pub fn share_of_selected(&self) -> f64 {
        if self.selected_value > 0.0 {
            self.target_value / self.selected_value * 100.0
        } else {
            0.0
        }
    }
}

/// Distributes a liquidation target across the selected holdings in
/// proportion to each holding's share of the selected value.
#[derive(Debug, Clone, Copy)]
pub struct Allocator {
    missing_price_fallback: f64,
}

impl Default for Allocator {
    fn default() -> Self {
        Self { missing_price_fallback: DEFAULT_PRICE_FALLBACK }
    }
}

impl Allocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different assumed price for unpriced tokens
    pub fn with_price_fallback(fallback: f64) -> Self {
        Self { missing_price_fallback: fallback }
    }

    /// Compute the plan for the current selection and request.
    ///
    /// Returns an empty plan when nothing is selected, the selection has
    /// no value, or the resolved target is not positive. Swap amounts are
    /// sized at the token's price, or the fallback price when the price is
    /// missing or zero, and never exceed the available balance.
    pub fn allocate(
        &self,
        holdings: &[TokenHolding],
        selection: &SelectionSet,
        request: &LiquidationRequest,
    ) -> LiquidationPlan {
        let selected = selection.selected_holdings(holdings);
        let selected_value: f64 = selected.iter().map(|t| t.value_or_zero()).sum();
        let target_value = request.target_value(selected_value);

        let mut plan = LiquidationPlan {
            target_value,
            selected_value,
            allocations: Vec::new(),
        };
        if selected.is_empty() || selected_value <= 0.0 || target_value <= 0.0 {
            return plan;
        }

        plan.allocations = selected
            .iter()
            .map(|token| {
                let share = token.value_or_zero() / selected_value;
                let liquidation_amount = target_value * share;
                let price = token
                    .price
                    .filter(|p| *p > 0.0)
                    .unwrap_or(self.missing_price_fallback);
                let swap_amount = if price > 0.0 {
                    (liquidation_amount / price).min(token.ui_amount)
                } else {
                    0.0
                };

                Allocation {
                    mint: token.mint,
                    symbol: token.symbol_or_unknown().to_string(),
                    ui_amount: token.ui_amount,
                    swap_amount,
                    liquidation_amount,
                    percentage_of_selected: share * 100.0,
                }
            })
            .collect();

        plan
    }
}
