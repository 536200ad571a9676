//! Read-only projections of on-chain vesting state.
//!
//! Everything here is a snapshot of state the vesting contract owns. The
//! dashboard never mutates these locally; after a confirmed transaction the
//! owning view re-fetches.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A beneficiary's vesting record as reported by the vesting contract.
///
/// Fixed-point token amounts (18 decimals on chain) arrive normalized to
/// decimal strings so views render them without carrying 256-bit words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Index of the vesting category the grant was made from.
    pub category: u32,
    /// Total granted amount, in the token's smallest unit.
    pub total: String,
    /// Amount released at the token generation event.
    pub tge_unlock: String,
    pub cliff_months: u32,
    pub vesting_months: u32,
    /// Linear release rate once the cliff has passed.
    pub claim_per_second: String,
    /// Amount the beneficiary has already claimed.
    pub claimed: String,
    /// Vesting start, unix seconds.
    pub start_timestamp: u64,
}

impl Allocation {
    /// A zero-total record means the contract holds no grant for the
    /// queried address; views render the "no allocation" state instead of
    /// the card.
    pub fn exists(&self) -> bool {
        self.total != "0"
    }
}

/// Aggregate metadata for one vesting category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub total_amount: String,
    pub tge_percent: u32,
    pub cliff_months: u32,
    pub vesting_months: u32,
    /// Amount already granted out of `total_amount`.
    pub allocated: String,
    pub uses_per_mille: bool,
}

impl CategoryInfo {
    /// Share of the category already allocated, as a percentage with two
    /// decimals of precision. Integer math (basis points over the category
    /// total) so 18-decimal amounts don't lose precision in a float.
    pub fn percent_used(&self) -> f64 {
        let total: U256 = self.total_amount.parse().unwrap_or(U256::ZERO);
        if total.is_zero() {
            return 0.0;
        }
        let allocated: U256 = self.allocated.parse().unwrap_or(U256::ZERO);
        let bps = allocated.saturating_mul(U256::from(10_000u64)) / total;
        bps.saturating_to::<u64>() as f64 / 100.0
    }
}

/// One beneficiary/amount pair from a bulk submission.
///
/// Transient: rows exist only for the duration of a submit action and are
/// rebuilt from the raw input on every attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkRow {
    pub address: Address,
    /// Whole-token amount; the contract scales to the smallest unit.
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation_with_total(total: &str) -> Allocation {
        Allocation {
            category: 0,
            total: total.to_string(),
            tge_unlock: "0".to_string(),
            cliff_months: 0,
            vesting_months: 12,
            claim_per_second: "0".to_string(),
            claimed: "0".to_string(),
            start_timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn zero_total_means_no_allocation() {
        assert!(!allocation_with_total("0").exists());
        assert!(allocation_with_total("1").exists());
        assert!(allocation_with_total("250000000000000000000").exists());
    }

    #[test]
    fn percent_used_is_exact_on_large_amounts() {
        let info = CategoryInfo {
            total_amount: "1000000000000000000000000".to_string(), // 1M tokens
            tge_percent: 10,
            cliff_months: 3,
            vesting_months: 18,
            allocated: "250000000000000000000000".to_string(), // 250k tokens
            uses_per_mille: false,
        };
        assert_eq!(info.percent_used(), 25.0);
    }

    #[test]
    fn allocation_serializes_with_snake_case_fields() {
        let allocation = allocation_with_total("42");
        let json = serde_json::to_value(&allocation).unwrap();
        assert_eq!(json["total"], "42");
        assert_eq!(json["tge_unlock"], "0");
        assert_eq!(json["start_timestamp"], 1_700_000_000u64);
    }

    #[test]
    fn percent_used_handles_empty_category() {
        let info = CategoryInfo {
            total_amount: "0".to_string(),
            tge_percent: 0,
            cliff_months: 0,
            vesting_months: 0,
            allocated: "0".to_string(),
            uses_per_mille: false,
        };
        assert_eq!(info.percent_used(), 0.0);
    }
}
