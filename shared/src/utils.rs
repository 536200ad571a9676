//! # Shared Utility Functions
//!
//! Address validation and display helpers used across the workspace.
//!
//! ## Address handling
//!
//! - [`parse_address`] - Validate the `0x` + 40-hex-digit wire format
//! - [`format_address`] - Format an address with ellipsis for display
//! - [`truncate_address`] - Alias for `format_address` with default lengths
//!
//! ## Amount formatting
//!
//! - [`format_units`] - Render a smallest-unit integer string as a decimal
//!   token amount

use std::str::FromStr;

use alloy_primitives::Address;
use thiserror::Error;

/// The input was not `0x` followed by exactly 40 hex digits.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid address: expected 0x followed by 40 hex digits")]
pub struct AddressParseError;

/// Validate and parse an EVM address from user input.
///
/// The check is deliberately strict about shape (`0x` prefix, exact length,
/// hex digits only) and deliberately loose about case: wallets emit both
/// checksummed and lowercased forms.
///
/// ```rust
/// use shared::utils::parse_address;
///
/// assert!(parse_address("0x52908400098527886E0F7030069857D2E4169EE7").is_ok());
/// assert!(parse_address("0x5290840009852788").is_err());
/// assert!(parse_address("not-an-address").is_err());
/// ```
pub fn parse_address(input: &str) -> Result<Address, AddressParseError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").ok_or(AddressParseError)?;
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressParseError);
    }
    Address::from_str(trimmed).map_err(|_| AddressParseError)
}

/// Format an address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// Inputs shorter than the two lengths combined are returned as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Addresses are ASCII, byte slicing is safe here.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];
    format!("{}...{}", prefix, suffix)
}

/// Format an address with the default 6-character prefix (keeping the `0x`)
/// and 4-character suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0xEFD337AC87EDf41A740AedD386d7f650D29D6e90";
/// assert_eq!(truncate_address(addr), "0xEFD3...6e90");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Render a smallest-unit integer string as a decimal token amount.
///
/// `decimals` is the token's fixed-point scale, `precision` the number of
/// fractional digits kept in the output. Pure string manipulation: amounts
/// can exceed every primitive integer width.
///
/// ```rust
/// use shared::utils::format_units;
///
/// assert_eq!(format_units("1500000000000000000", 18, 4), "1.5000");
/// assert_eq!(format_units("999", 18, 4), "0.0000");
/// assert_eq!(format_units("0", 18, 4), "0.0000");
/// ```
pub fn format_units(smallest: &str, decimals: usize, precision: usize) -> String {
    let digits: String = if smallest.bytes().all(|b| b.is_ascii_digit()) && !smallest.is_empty() {
        smallest.to_string()
    } else {
        // Defensive: a gateway bug handing us a non-numeric string renders
        // as zero rather than garbage.
        "0".to_string()
    };

    let len = digits.len();
    let (integer, fraction) = if len <= decimals {
        let mut fraction = "0".repeat(decimals - len);
        fraction.push_str(&digits);
        ("0".to_string(), fraction)
    } else {
        (digits[..len - decimals].to_string(), digits[len - decimals..].to_string())
    };

    if precision == 0 {
        return integer;
    }
    let mut fraction = fraction;
    fraction.truncate(precision);
    while fraction.len() < precision {
        fraction.push('0');
    }
    format!("{}.{}", integer, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_any_case() {
        let lower = parse_address("0xefd337ac87edf41a740aedd386d7f650d29d6e90").unwrap();
        let upper = parse_address("0xEFD337AC87EDF41A740AEDD386D7F650D29D6E90").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for input in [
            "",
            "0x",
            "0x123",
            "EFD337AC87EDf41A740AedD386d7f650D29D6e90",      // missing prefix
            "0xEFD337AC87EDf41A740AedD386d7f650D29D6e9",      // 39 digits
            "0xEFD337AC87EDf41A740AedD386d7f650D29D6e901",    // 41 digits
            "0xEFD337AC87EDf41A740AedD386d7f650D29D6eZZ",     // non-hex
            "0x EFD337AC87EDf41A740AedD386d7f650D29D6e9",     // embedded space
        ] {
            assert!(parse_address(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert!(parse_address("  0xEFD337AC87EDf41A740AedD386d7f650D29D6e90 ").is_ok());
    }

    #[test]
    fn truncation_keeps_both_ends() {
        let addr = "0xEFD337AC87EDf41A740AedD386d7f650D29D6e90";
        assert_eq!(truncate_address(addr), "0xEFD3...6e90");
        assert_eq!(format_address(addr, 4, 4), "0xEF...6e90");
        assert_eq!(format_address("short", 6, 4), "short");
    }

    #[test]
    fn units_pad_small_amounts() {
        assert_eq!(format_units("1", 18, 4), "0.0000");
        assert_eq!(format_units("100000000000000", 18, 4), "0.0001");
    }

    #[test]
    fn units_split_large_amounts() {
        assert_eq!(format_units("1234567890000000000000", 18, 4), "1234.5678");
        assert_eq!(format_units("1000000000000000000", 18, 0), "1");
    }

    #[test]
    fn units_render_garbage_as_zero() {
        assert_eq!(format_units("", 18, 4), "0.0000");
        assert_eq!(format_units("12ab", 18, 4), "0.0000");
    }
}
