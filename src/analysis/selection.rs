use std::collections::HashSet;

use solana_sdk::pubkey::Pubkey;

use crate::models::token::TokenHolding;

/// State of a select-all control over the current holdings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    All,
    None,
    Indeterminate,
}

/// The set of mints currently marked for liquidation.
///
/// Membership stays a subset of the holdings the set is used with:
/// `toggle` refuses mints that are not in the list, and callers start a
/// fresh set whenever the holdings are replaced.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<Pubkey>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected mints
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check if a mint is selected
    pub fn contains(&self, mint: &Pubkey) -> bool {
        self.selected.contains(mint)
    }

    /// Flip one mint in or out of the selection.
    ///
    /// Selecting a mint that is not among the holdings is a no-op;
    /// deselecting always works.
    pub fn toggle(&mut self, mint: &Pubkey, holdings: &[TokenHolding]) {
        if self.selected.contains(mint) {
            self.selected.remove(mint);
        } else if holdings.iter().any(|t| t.mint == *mint) {
            self.selected.insert(*mint);
        }
    }

    /// Select every holding
    pub fn select_all(&mut self, holdings: &[TokenHolding]) {
        self.selected = holdings.iter().map(|t| t.mint).collect();
    }

    /// Deselect everything
    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Tri-state summary for a select-all control
    pub fn state(&self, holdings_len: usize) -> SelectAllState {
        if self.selected.is_empty() {
            SelectAllState::None
        } else if self.selected.len() == holdings_len {
            SelectAllState::All
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// Combined USD value of the selected holdings
    pub fn selected_value(&self, holdings: &[TokenHolding]) -> f64 {
        holdings
            .iter()
            .filter(|t| self.selected.contains(&t.mint))
            .map(|t| t.value_or_zero())
            .sum()
    }

    /// Selected holdings, in holdings order
    pub fn selected_holdings<'a>(&self, holdings: &'a [TokenHolding]) -> Vec<&'a TokenHolding> {
        holdings.iter().filter(|t| self.contains(&t.mint)).collect()
    }
}
