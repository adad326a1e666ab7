//! Deterministic portfolio computation: filtering, sorting, selection,
//! pro-rata allocation and report rendering.

pub mod holdings;
pub mod sort;
pub mod selection;
pub mod allocator;
pub mod report;

// Re-export for convenience
pub use holdings::filter_valuable;
pub use sort::{sort_holdings, SortDirection, SortField, SortOrder};
pub use selection::{SelectAllState, SelectionSet};
pub use allocator::{Allocation, Allocator, LiquidationKind, LiquidationPlan, LiquidationRequest};
pub use report::render_shopping_list;
