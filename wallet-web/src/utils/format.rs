//! # Formatting Utilities for the Dashboard
//!
//! Display glue on top of [`shared::utils`]: token amounts with the symbol
//! attached, calendar dates for vesting timestamps, and explorer links for
//! confirmed transactions.

use shared::chains::chain_info;
use shared::utils::{format_address, format_units};

use crate::utils::constants::{DISPLAY_PRECISION, TARGET_CHAIN_ID, TOKEN_DECIMALS, TOKEN_SYMBOL};

/// Render a smallest-unit amount with the token symbol, e.g. `"1234.5678 VVT"`.
pub fn format_token_amount(smallest: &str) -> String {
    format!("{} {}", format_units(smallest, TOKEN_DECIMALS, DISPLAY_PRECISION), TOKEN_SYMBOL)
}

/// Calendar date for a unix-second timestamp, e.g. `"November 14, 2023"`.
pub fn format_start_date(unix_seconds: u64) -> String {
    match chrono::DateTime::from_timestamp(unix_seconds as i64, 0) {
        Some(moment) => moment.format("%B %-d, %Y").to_string(),
        None => format!("t+{unix_seconds}"),
    }
}

/// Explorer link for a transaction hash on the target chain, when the
/// registry knows an explorer for it.
pub fn explorer_tx_url(hash: &str) -> Option<String> {
    chain_info(TARGET_CHAIN_ID)
        .and_then(|chain| chain.explorer_url)
        .map(|base| format!("{base}/tx/{hash}"))
}

/// Shorten a 66-character transaction hash for display.
pub fn truncate_hash(hash: &str) -> String {
    format_address(hash, 10, 8)
}

/// Percentage with two decimals, e.g. `"25.00%"`.
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_amount_carries_symbol() {
        assert_eq!(format_token_amount("1500000000000000000"), "1.5000 VVT");
        assert_eq!(format_token_amount("0"), "0.0000 VVT");
    }

    #[test]
    fn start_date_renders_as_calendar_day() {
        // 2023-11-14T22:13:20Z
        assert_eq!(format_start_date(1_700_000_000), "November 14, 2023");
    }

    #[test]
    fn explorer_link_targets_the_deployment_chain() {
        let url = explorer_tx_url("0xabc").expect("target chain has an explorer");
        assert_eq!(url, "https://seitrace.com/tx/0xabc");
    }

    #[test]
    fn hash_truncation_keeps_both_ends() {
        let hash = "0x9e1f0ab32c4d56e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f";
        assert_eq!(truncate_hash(hash), "0x9e1f0ab3...3c4d5e6f");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(25.0), "25.00%");
        assert_eq!(format_percent(0.126), "0.13%");
    }
}
