use crate::models::portfolio::PortfolioSnapshot;
use crate::models::token::TokenHolding;
use super::allocator::LiquidationPlan;
use super::selection::SelectionSet;

/// Format a USD value with two decimals
pub fn format_usd(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a token quantity: six decimals, switching to scientific
/// notation with a two-digit mantissa below 0.0001
pub fn format_token_amount(amount: f64) -> String {
    if amount != 0.0 && amount.abs() < 0.0001 {
        format!("{:.2e}", amount)
    } else {
        format!("{:.6}", amount)
    }
}

fn format_share(value: f64, selected_value: f64) -> String {
    if selected_value > 0.0 {
        format!("{:.1}", value / selected_value * 100.0)
    } else {
        "0".to_string()
    }
}

fn table_row(symbol: &str, amount: f64, value: f64, share: &str) -> String {
    format!(
        "{:<12} | {:>12} | ${:>10} | {}%",
        symbol,
        format_token_amount(amount),
        format_usd(value),
        share
    )
}

/// Render the swap shopping list for the current selection.
///
/// With an active liquidation plan the rows carry the computed swap
/// amounts and liquidation values, in selection order. Without one they
/// carry the raw balances and position values, following the order of
/// `view`. `plan` must have been computed against the same selection.
pub fn render_shopping_list(
    snapshot: &PortfolioSnapshot,
    display_input: &str,
    selection: &SelectionSet,
    view: &[TokenHolding],
    plan: &LiquidationPlan,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "💰 pro-rata swap shopping list for {}\n",
        display_input
    ));
    out.push_str(&format!(
        "total portfolio value: ${}\n",
        format_usd(snapshot.total_value)
    ));
    out.push_str(&format!(
        "selected tokens: {}/{}\n",
        selection.len(),
        snapshot.tokens.len()
    ));
    out.push_str(&format!(
        "selected value: ${}\n\n",
        format_usd(plan.selected_value)
    ));

    if plan.has_liquidation() {
        out.push_str(&format!(
            "\n💸 liquidation amount: ${} ({:.1}% of selected)\nremaining portfolio: ${}\n",
            format_usd(plan.target_value),
            plan.share_of_selected(),
            format_usd(plan.remaining_value(snapshot.total_value))
        ));
    }

    out.push_str(&format!(
        "{:<12} | {:>12} | {:>10} | share\n",
        "token", "amount", "value"
    ));
    out.push_str(&format!("{}\n", "-".repeat(50)));

    let rows: Vec<String> = if plan.has_liquidation() {
        plan.allocations
            .iter()
            .map(|a| {
                table_row(
                    &a.symbol,
                    a.swap_amount,
                    a.liquidation_amount,
                    &format!("{:.1}", a.percentage_of_selected),
                )
            })
            .collect()
    } else {
        view.iter()
            .filter(|t| selection.contains(&t.mint))
            .map(|t| {
                table_row(
                    t.symbol_or_unknown(),
                    t.ui_amount,
                    t.value_or_zero(),
                    &format_share(t.value_or_zero(), plan.selected_value),
                )
            })
            .collect()
    };
    out.push_str(&rows.join("\n"));

    out.push_str("\n💡 use this list with your multisig wallet for pro-rata swaps.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::allocator::{Allocator, LiquidationRequest};
    use solana_sdk::pubkey::Pubkey;

    fn holding(symbol: &str, ui_amount: f64, price: f64) -> TokenHolding {
        TokenHolding::new(Pubkey::new_unique(), ui_amount, 6)
            .with_metadata(symbol, symbol, None)
            .with_price(price)
    }

    fn snapshot(tokens: Vec<TokenHolding>) -> PortfolioSnapshot {
        let total = tokens.iter().map(|t| t.value_or_zero()).sum();
        PortfolioSnapshot::new(Pubkey::new_unique(), tokens, total, false)
    }

    fn plan_for(
        snapshot: &PortfolioSnapshot,
        selection: &SelectionSet,
        request: Option<LiquidationRequest>,
    ) -> LiquidationPlan {
        match request {
            Some(request) => Allocator::new().allocate(&snapshot.tokens, selection, &request),
            None => LiquidationPlan {
                selected_value: selection.selected_value(&snapshot.tokens),
                ..LiquidationPlan::default()
            },
        }
    }

    #[test]
    fn amounts_use_six_decimals_or_scientific_notation() {
        assert_eq!(format_token_amount(1000.0), "1000.000000");
        assert_eq!(format_token_amount(0.5), "0.500000");
        assert_eq!(format_token_amount(0.0001), "0.000100");
        assert_eq!(format_token_amount(0.00005), "5.00e-5");
        assert_eq!(format_token_amount(0.0), "0.000000");
    }

    #[test]
    fn lists_raw_balances_without_a_liquidation() {
        let snapshot = snapshot(vec![holding("SOL", 2.0, 150.0), holding("USDC", 100.0, 1.0)]);
        let mut selection = SelectionSet::new();
        selection.select_all(&snapshot.tokens);
        let plan = plan_for(&snapshot, &selection, None);

        let report =
            render_shopping_list(&snapshot, "wallet.sol", &selection, &snapshot.tokens, &plan);

        assert!(report.starts_with("💰 pro-rata swap shopping list for wallet.sol\n"));
        assert!(report.contains("total portfolio value: $400.00"));
        assert!(report.contains("selected tokens: 2/2"));
        assert!(report.contains("selected value: $400.00"));
        assert!(!report.contains("liquidation amount"));
        assert!(report.contains("2.000000"));
        assert!(report.contains("100.000000"));
        assert!(report.contains("75.0%"));
        assert!(report.contains("25.0%"));
        assert!(report.ends_with("💡 use this list with your multisig wallet for pro-rata swaps."));
    }

    #[test]
    fn lists_swap_amounts_with_a_liquidation() {
        let snapshot = snapshot(vec![holding("SOL", 2.0, 150.0), holding("USDC", 100.0, 1.0)]);
        let mut selection = SelectionSet::new();
        selection.select_all(&snapshot.tokens);
        let plan = plan_for(&snapshot, &selection, Some(LiquidationRequest::percentage(50.0)));

        let report =
            render_shopping_list(&snapshot, "wallet.sol", &selection, &snapshot.tokens, &plan);

        assert!(report.contains("💸 liquidation amount: $200.00 (50.0% of selected)"));
        assert!(report.contains("remaining portfolio: $200.00"));
        // SOL: 150 USD to liquidate at 150 USD/token = 1 token
        assert!(report.contains("1.000000"));
        // USDC: 50 USD at 1 USD/token
        assert!(report.contains("50.000000"));
    }

    #[test]
    fn row_count_matches_the_selection() {
        let snapshot = snapshot(vec![
            holding("AAA", 1.0, 10.0),
            holding("BBB", 1.0, 20.0),
            holding("CCC", 1.0, 30.0),
        ]);
        let mut selection = SelectionSet::new();
        selection.toggle(&snapshot.tokens[0].mint, &snapshot.tokens);
        selection.toggle(&snapshot.tokens[2].mint, &snapshot.tokens);

        for request in [None, Some(LiquidationRequest::percentage(25.0))] {
            let plan = plan_for(&snapshot, &selection, request);
            let report =
                render_shopping_list(&snapshot, "addr", &selection, &snapshot.tokens, &plan);
            let rows = report
                .lines()
                .filter(|line| line.contains(" | "))
                .filter(|line| !line.starts_with("token"))
                .count();
            assert_eq!(rows, 2);
        }
    }

    #[test]
    fn raw_rows_follow_the_view_order() {
        let sol = holding("SOL", 2.0, 150.0);
        let usdc = holding("USDC", 100.0, 1.0);
        let snapshot = snapshot(vec![sol.clone(), usdc.clone()]);
        let mut selection = SelectionSet::new();
        selection.select_all(&snapshot.tokens);
        let plan = plan_for(&snapshot, &selection, None);

        // View sorted the other way round than the snapshot
        let view = vec![usdc, sol];
        let report = render_shopping_list(&snapshot, "addr", &selection, &view, &plan);

        let usdc_at = report.find("USDC").unwrap();
        let sol_at = report.find("SOL").unwrap();
        assert!(usdc_at < sol_at);
    }

    #[test]
    fn column_header_is_fixed_width() {
        let snapshot = snapshot(vec![holding("SOL", 1.0, 100.0)]);
        let mut selection = SelectionSet::new();
        selection.select_all(&snapshot.tokens);
        let plan = plan_for(&snapshot, &selection, None);

        let report = render_shopping_list(&snapshot, "addr", &selection, &snapshot.tokens, &plan);

        assert!(report.contains("token        |       amount |      value | share"));
        assert!(report.contains(&"-".repeat(50)));
    }

    #[test]
    fn share_column_shows_zero_when_nothing_is_worth_anything() {
        assert_eq!(format_share(10.0, 0.0), "0");
        assert_eq!(format_share(10.0, 40.0), "25.0");
    }

    #[test]
    fn empty_selection_renders_an_empty_table() {
        let snapshot = snapshot(vec![holding("SOL", 1.0, 100.0)]);
        let selection = SelectionSet::new();
        let plan = plan_for(&snapshot, &selection, None);

        let report = render_shopping_list(&snapshot, "addr", &selection, &snapshot.tokens, &plan);

        assert!(report.contains("selected tokens: 0/1"));
        assert!(report.contains("selected value: $0.00"));
        assert!(!report.contains("SOL"));
    }
}
