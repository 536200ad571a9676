//! Bulk-row parsing for batch allocations and airdrops.
//!
//! Two input shapes feed the same validation: comma-separated address and
//! amount lists typed into the owner panel, and spreadsheet rows with
//! `address`/`amount` columns. Either way, every row must pass before a
//! single remote call is issued; a failure here is a local, pre-flight
//! error attached to the offending input.

use thiserror::Error;

use crate::types::BulkRow;
use crate::utils::parse_address;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BulkParseError {
    #[error("enter at least one beneficiary row")]
    Empty,
    #[error("addresses and amounts count must match ({addresses} addresses, {amounts} amounts)")]
    CountMismatch { addresses: usize, amounts: usize },
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Validate one beneficiary/amount pair.
///
/// Amounts are whole tokens: they must be finite, strictly positive, and
/// are floored to an integer before submission (the contract expects a
/// whole-token count).
pub fn validate_row(address: &str, amount: f64) -> Result<BulkRow, BulkParseError> {
    let address = parse_address(address)
        .map_err(|_| BulkParseError::InvalidAddress(address.trim().to_string()))?;
    if !amount.is_finite() || amount <= 0.0 || amount >= u64::MAX as f64 {
        return Err(BulkParseError::InvalidAmount(amount.to_string()));
    }
    Ok(BulkRow { address, amount: amount.floor() as u64 })
}

/// Parse the manual owner-panel input: one comma-separated address list and
/// one comma-separated amount list of equal length.
pub fn parse_bulk_text(raw_addresses: &str, raw_amounts: &str) -> Result<Vec<BulkRow>, BulkParseError> {
    let addresses: Vec<&str> = split_csv(raw_addresses);
    let amounts: Vec<&str> = split_csv(raw_amounts);

    if addresses.len() != amounts.len() {
        return Err(BulkParseError::CountMismatch {
            addresses: addresses.len(),
            amounts: amounts.len(),
        });
    }
    if addresses.is_empty() {
        return Err(BulkParseError::Empty);
    }

    addresses
        .into_iter()
        .zip(amounts)
        .map(|(address, amount)| {
            let amount: f64 = amount
                .parse()
                .map_err(|_| BulkParseError::InvalidAmount(amount.to_string()))?;
            validate_row(address, amount)
        })
        .collect()
}

fn split_csv(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|part| !part.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    const ALICE: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const BOB: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[test]
    fn parses_matching_lists_in_order() {
        let rows = parse_bulk_text(&format!("{ALICE}, {BOB}"), "100, 250").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, Address::repeat_byte(0xaa));
        assert_eq!(rows[0].amount, 100);
        assert_eq!(rows[1].address, Address::repeat_byte(0xbb));
        assert_eq!(rows[1].amount, 250);
    }

    #[test]
    fn count_mismatch_is_rejected_before_row_validation() {
        let err = parse_bulk_text(&format!("{ALICE}, {BOB}"), "100").unwrap_err();
        assert_eq!(err, BulkParseError::CountMismatch { addresses: 2, amounts: 1 });
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_bulk_text("", "").unwrap_err(), BulkParseError::Empty);
        assert_eq!(parse_bulk_text(" , ", ",").unwrap_err(), BulkParseError::Empty);
    }

    #[test]
    fn malformed_address_names_the_offender() {
        let err = parse_bulk_text("0x1234", "100").unwrap_err();
        assert_eq!(err, BulkParseError::InvalidAddress("0x1234".to_string()));
    }

    #[test]
    fn non_positive_and_non_numeric_amounts_are_rejected() {
        assert!(matches!(
            parse_bulk_text(ALICE, "0").unwrap_err(),
            BulkParseError::InvalidAmount(_)
        ));
        assert!(matches!(
            parse_bulk_text(ALICE, "-5").unwrap_err(),
            BulkParseError::InvalidAmount(_)
        ));
        assert!(matches!(
            parse_bulk_text(ALICE, "lots").unwrap_err(),
            BulkParseError::InvalidAmount(_)
        ));
    }

    #[test]
    fn fractional_amounts_floor_to_whole_tokens() {
        let rows = parse_bulk_text(ALICE, "99.9").unwrap();
        assert_eq!(rows[0].amount, 99);
    }

    #[test]
    fn trailing_commas_and_spacing_are_tolerated() {
        let rows = parse_bulk_text(&format!("{ALICE},"), "42,").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 42);
    }
}
