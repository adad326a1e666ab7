use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// SNS domain suffixes recognized as wallet-domain input
pub const SNS_DOMAIN_SUFFIXES: &[&str] = &[
    ".sol", ".bonk", ".poor", ".ser", ".abc", ".backpack", ".crown", ".gogo",
    ".hodl", ".meme", ".monke", ".oon", ".ponke", ".pump", ".shark", ".snipe",
    ".turtle", ".wallet", ".whale", ".worker", ".00", ".inv", ".ux", ".ray",
    ".luv",
];

/// Parse a pubkey from string, with better error messages
pub fn parse_pubkey(s: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(s).map_err(|e| anyhow::anyhow!("Invalid pubkey {}: {}", s, e))
}

/// Check that a string is a well-formed wallet address
pub fn validate_address(address: &str) -> bool {
    parse_pubkey(address).is_ok()
}

/// Whether the input looks like an SNS domain rather than an address.
///
/// Leading `@` and surrounding whitespace are ignored, matching is
/// case-insensitive.
pub fn is_sns_domain(input: &str) -> bool {
    let clean = input.trim().trim_start_matches('@').to_lowercase();
    SNS_DOMAIN_SUFFIXES.iter().any(|suffix| clean.ends_with(suffix))
}

/// Format lamports as SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / 1e9
}

/// Reduce a wallet input to a safe file-name fragment
pub fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
