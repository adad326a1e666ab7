use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::token::TokenHolding;

/// Sortable columns of the holdings table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Symbol,
    Balance,
    Value,
    Percentage,
}

/// Sort direction for the holdings table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort choice, with column-header toggle semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::Value,
            direction: SortDirection::Desc,
        }
    }
}

impl SortOrder {
    /// Selecting the active column flips direction; a new column starts
    /// descending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }
}

type Comparator = fn(&TokenHolding, &TokenHolding, f64) -> Ordering;

fn by_symbol(a: &TokenHolding, b: &TokenHolding, _total: f64) -> Ordering {
    let a_sym = a.symbol_or_unknown().to_lowercase();
    let b_sym = b.symbol_or_unknown().to_lowercase();
    a_sym.cmp(&b_sym)
}

fn by_balance(a: &TokenHolding, b: &TokenHolding, _total: f64) -> Ordering {
    a.ui_amount.partial_cmp(&b.ui_amount).unwrap_or(Ordering::Equal)
}

fn by_value(a: &TokenHolding, b: &TokenHolding, _total: f64) -> Ordering {
    a.value_or_zero()
        .partial_cmp(&b.value_or_zero())
        .unwrap_or(Ordering::Equal)
}

fn by_percentage(a: &TokenHolding, b: &TokenHolding, total: f64) -> Ordering {
    a.portfolio_share(total)
        .partial_cmp(&b.portfolio_share(total))
        .unwrap_or(Ordering::Equal)
}

impl SortField {
    fn comparator(self) -> Comparator {
        match self {
            SortField::Symbol => by_symbol,
            SortField::Balance => by_balance,
            SortField::Value => by_value,
            SortField::Percentage => by_percentage,
        }
    }
}

/// Produce a freshly ordered copy of the holdings.
///
/// The sort is stable: entries that compare equal keep their input order
/// in either direction.
pub fn sort_holdings(holdings: &[TokenHolding], total_value: f64, order: SortOrder) -> Vec<TokenHolding> {
    let cmp = order.field.comparator();
    let mut sorted = holdings.to_vec();
    sorted.sort_by(|a, b| {
        let ord = cmp(a, b, total_value);
        match order.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "symbol" => Ok(SortField::Symbol),
            "balance" => Ok(SortField::Balance),
            "value" => Ok(SortField::Value),
            "percentage" | "share" => Ok(SortField::Percentage),
            other => anyhow::bail!("unknown sort field: {}", other),
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => anyhow::bail!("unknown sort direction: {}", other),
        }
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    /// Parse `field` or `field:direction`, e.g. `value` or `balance:asc`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((field, direction)) => Ok(Self {
                field: field.parse()?,
                direction: direction.parse()?,
            }),
            None => Ok(Self {
                field: s.parse()?,
                direction: SortDirection::Desc,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn holding(symbol: &str, ui_amount: f64, price: f64) -> TokenHolding {
        TokenHolding::new(Pubkey::new_unique(), ui_amount, 6)
            .with_metadata(symbol, symbol, None)
            .with_price(price)
    }

    fn symbols(holdings: &[TokenHolding]) -> Vec<&str> {
        holdings.iter().map(|t| t.symbol_or_unknown()).collect()
    }

    #[test]
    fn value_desc_is_the_default() {
        let order = SortOrder::default();
        assert_eq!(order.field, SortField::Value);
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn sorts_by_value_in_both_directions() {
        let holdings = vec![
            holding("MID", 1.0, 50.0),
            holding("BIG", 1.0, 200.0),
            holding("SMALL", 1.0, 10.0),
        ];

        let desc = sort_holdings(&holdings, 260.0, SortOrder::default());
        assert_eq!(symbols(&desc), vec!["BIG", "MID", "SMALL"]);

        let asc = sort_holdings(
            &holdings,
            260.0,
            SortOrder { field: SortField::Value, direction: SortDirection::Asc },
        );
        assert_eq!(symbols(&asc), vec!["SMALL", "MID", "BIG"]);
    }

    #[test]
    fn symbol_sort_ignores_case() {
        let holdings = vec![
            holding("usdc", 1.0, 1.0),
            holding("BONK", 1.0, 1.0),
            holding("Sol", 1.0, 1.0),
        ];

        let asc = sort_holdings(
            &holdings,
            3.0,
            SortOrder { field: SortField::Symbol, direction: SortDirection::Asc },
        );
        assert_eq!(symbols(&asc), vec!["BONK", "Sol", "usdc"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let first = holding("AAA", 5.0, 2.0);
        let second = holding("BBB", 5.0, 2.0);
        let third = holding("CCC", 5.0, 2.0);
        let holdings = vec![first.clone(), second.clone(), third.clone()];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_holdings(
                &holdings,
                30.0,
                SortOrder { field: SortField::Value, direction },
            );
            assert_eq!(symbols(&sorted), vec!["AAA", "BBB", "CCC"]);
        }
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let holdings = vec![
            holding("B", 2.0, 10.0),
            holding("A", 9.0, 1.0),
            holding("C", 1.0, 30.0),
        ];
        let order = SortOrder { field: SortField::Balance, direction: SortDirection::Asc };

        let once = sort_holdings(&holdings, 59.0, order);
        let twice = sort_holdings(&once, 59.0, order);
        assert_eq!(symbols(&once), symbols(&twice));
    }

    #[test]
    fn percentage_with_zero_total_keeps_input_order() {
        let mut first = holding("A", 1.0, 0.0);
        let mut second = holding("B", 1.0, 0.0);
        first.value = None;
        second.value = None;
        let holdings = vec![first, second];

        let sorted = sort_holdings(
            &holdings,
            0.0,
            SortOrder { field: SortField::Percentage, direction: SortDirection::Desc },
        );
        assert_eq!(symbols(&sorted), vec!["A", "B"]);
    }

    #[test]
    fn toggle_flips_and_switches() {
        let mut order = SortOrder::default();

        order.toggle(SortField::Value);
        assert_eq!(order.direction, SortDirection::Asc);

        order.toggle(SortField::Value);
        assert_eq!(order.direction, SortDirection::Desc);

        order.toggle(SortField::Symbol);
        assert_eq!(order.field, SortField::Symbol);
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn parses_field_and_direction() {
        let order: SortOrder = "balance:asc".parse().unwrap();
        assert_eq!(order.field, SortField::Balance);
        assert_eq!(order.direction, SortDirection::Asc);

        let order: SortOrder = "symbol".parse().unwrap();
        assert_eq!(order.field, SortField::Symbol);
        assert_eq!(order.direction, SortDirection::Desc);

        assert!("balanced".parse::<SortOrder>().is_err());
        assert!("value:sideways".parse::<SortOrder>().is_err());
    }
}
