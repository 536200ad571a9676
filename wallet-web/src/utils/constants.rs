//! Application constants
//!
//! One deployed contract pair per build; redeployments ship a new build
//! with these constants updated.

use alloy_primitives::{address, Address};

/// Deployed vesting vault contract.
pub const VESTING_CONTRACT: Address = address!("4c1f8e0ddd02b4a2aaa68dd7c40e09db370eab71");

/// Companion airdropper used by the owner panel's batch transfer.
pub const AIRDROP_CONTRACT: Address = address!("93d5fe12d08f1a2be05e4e0bf1bf9c2a2fe57e6c");

/// The single chain this deployment targets (Sei mainnet).
pub const TARGET_CHAIN_ID: u64 = shared::chains::SEI.id;

// Token display
pub const TOKEN_SYMBOL: &str = "VVT";
pub const TOKEN_DECIMALS: usize = 18;
/// Fractional digits shown for token amounts.
pub const DISPLAY_PRECISION: usize = 4;

/// Deadline for data-loading reads; expiry tells the user to refresh.
pub const REQUEST_TIMEOUT_MS: u32 = 60_000;

/// Poll cadence while waiting for a transaction's first confirmation.
pub const RECEIPT_POLL_MS: u64 = 2_000;

/// Vesting categories, indexed as the contract indexes them.
pub const CATEGORY_LABELS: &[&str] = &[
    "Seed",
    "Private",
    "Strategic",
    "Public",
    "Team",
    "Advisors",
    "Marketing",
    "Airdrop",
    "Reserve",
    "Liquidity",
    "Rewards",
    "Development",
];
