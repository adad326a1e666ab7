use solana_sdk::pubkey::Pubkey;

/// Positions worth less than this many USD are treated as dust
pub const DUST_VALUE_USD: f64 = 0.01;

/// A single token position, with market data once prices are attached
#[derive(Debug, Clone)]
pub struct TokenHolding {
    /// Token mint address
    pub mint: Pubkey,
    /// Human-readable balance, adjusted for decimals
    pub ui_amount: f64,
    /// Number of decimals for the token
    pub decimals: u8,
    /// Token symbol (if known)
    pub symbol: Option<String>,
    /// Token name (if known)
    pub name: Option<String>,
    /// USD price per token (if known)
    pub price: Option<f64>,
    /// USD value of the position (if priced)
    pub value: Option<f64>,
    /// Token logo URL (if known)
    pub logo_uri: Option<String>,
}

impl TokenHolding {
    /// Create a new holding without metadata or market data
    pub fn new(mint: Pubkey, ui_amount: f64, decimals: u8) -> Self {
        Self {
            mint,
            ui_amount,
            decimals,
            symbol: None,
            name: None,
            price: None,
            value: None,
            logo_uri: None,
        }
    }

    /// Attach symbol, name and logo metadata
    pub fn with_metadata(
        mut self,
        symbol: impl Into<String>,
        name: impl Into<String>,
        logo_uri: Option<String>,
    ) -> Self {
        self.symbol = Some(symbol.into());
        self.name = Some(name.into());
        self.logo_uri = logo_uri;
        self
    }

    /// Attach a USD price and derive the position value from it
    pub fn with_price(mut self, price: f64) -> Self {
        self.value = Some(self.ui_amount * price);
        self.price = Some(price);
        self
    }

    /// USD value of the position, zero when no price is known
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Symbol for display, falling back to a placeholder
    pub fn symbol_or_unknown(&self) -> &str {
        self.symbol.as_deref().unwrap_or("UNKNOWN")
    }

    /// Whether the position has a positive balance and more than dust value
    pub fn is_valuable(&self) -> bool {
        self.value_or_zero() > DUST_VALUE_USD && self.ui_amount > 0.0
    }

    /// Share of a portfolio total, as a percentage
    pub fn portfolio_share(&self, total_value: f64) -> f64 {
        if total_value > 0.0 {
            self.value_or_zero() / total_value * 100.0
        } else {
            0.0
        }
    }
}
