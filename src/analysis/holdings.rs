use crate::models::token::TokenHolding;

/// Reduce raw priced balances to the holdings worth listing.
///
/// Keeps positions with a positive balance and more than dust value,
/// preserving input order, and returns the combined USD value of the
/// retained positions.
pub fn filter_valuable(raw: Vec<TokenHolding>) -> (Vec<TokenHolding>, f64) {
    let holdings: Vec<TokenHolding> = raw.into_iter().filter(|t| t.is_valuable()).collect();
    let total_value = holdings.iter().map(|t| t.value_or_zero()).sum();
    (holdings, total_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn priced(ui_amount: f64, price: f64) -> TokenHolding {
        TokenHolding::new(Pubkey::new_unique(), ui_amount, 6).with_price(price)
    }

    #[test]
    fn drops_dust_and_zero_balances() {
        let raw = vec![
            priced(100.0, 2.0),   // 200 USD, kept
            priced(5.0, 0.001),   // half a cent, dropped
            priced(0.0, 150.0),   // no balance, dropped
            TokenHolding::new(Pubkey::new_unique(), 42.0, 6), // unpriced, dropped
            priced(50.0, 1.0),    // 50 USD, kept
        ];

        let (holdings, total) = filter_valuable(raw);
        assert_eq!(holdings.len(), 2);
        assert!((total - 250.0).abs() < 1e-9);
    }

    #[test]
    fn preserves_input_order() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        let raw = vec![
            TokenHolding::new(mint_a, 1.0, 6).with_price(3.0),
            priced(1.0, 0.001),
            TokenHolding::new(mint_b, 1.0, 6).with_price(2.0),
        ];

        let (holdings, _) = filter_valuable(raw);
        assert_eq!(holdings[0].mint, mint_a);
        assert_eq!(holdings[1].mint, mint_b);
    }

    #[test]
    fn exactly_one_cent_is_dust() {
        let (holdings, total) = filter_valuable(vec![priced(1.0, 0.01)]);
        assert!(holdings.is_empty());
        assert_eq!(total, 0.0);
    }

    #[test]
    fn empty_input_yields_empty_portfolio() {
        let (holdings, total) = filter_valuable(Vec::new());
        assert!(holdings.is_empty());
        assert_eq!(total, 0.0);
    }
}
