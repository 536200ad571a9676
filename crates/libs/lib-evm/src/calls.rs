//! Calldata construction and return-data decoding.
//!
//! Every encoder is a pure function from typed arguments to ABI bytes, and
//! every decoder a pure function from reply bytes to a [`shared`]
//! projection. Amount fields come back as decimal strings; month counters
//! and timestamps narrow to the machine integers the views use, failing
//! loudly if the contract ever reports something out of range.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use shared::{Allocation, BulkRow, CategoryInfo};
use thiserror::Error;

use crate::abi::{IAirdropper, IVestingVault};

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("return data decoding failed: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("on-chain value out of range for {0}")]
    Range(&'static str),
}

fn to_u32(value: U256, field: &'static str) -> Result<u32, AbiError> {
    u32::try_from(value).map_err(|_| AbiError::Range(field))
}

fn to_u64(value: U256, field: &'static str) -> Result<u64, AbiError> {
    u64::try_from(value).map_err(|_| AbiError::Range(field))
}

// ---------------------------------------------------------------------------
// Read calls
// ---------------------------------------------------------------------------

pub fn allocation_of(beneficiary: Address) -> Vec<u8> {
    IVestingVault::allocationsCall { beneficiary }.abi_encode()
}

pub fn decode_allocation(data: &[u8]) -> Result<Allocation, AbiError> {
    let ret = IVestingVault::allocationsCall::abi_decode_returns(data)?;
    Ok(Allocation {
        category: to_u32(ret.category, "category")?,
        total: ret.total.to_string(),
        tge_unlock: ret.tgeUnlock.to_string(),
        cliff_months: to_u32(ret.cliffMonths, "cliffMonths")?,
        vesting_months: to_u32(ret.vestingMonths, "vestingMonths")?,
        claim_per_second: ret.claimPerSecond.to_string(),
        claimed: ret.claimed.to_string(),
        start_timestamp: to_u64(ret.startTimestamp, "startTimestamp")?,
    })
}

pub fn owner() -> Vec<u8> {
    IVestingVault::ownerCall {}.abi_encode()
}

pub fn decode_owner(data: &[u8]) -> Result<Address, AbiError> {
    Ok(IVestingVault::ownerCall::abi_decode_returns(data)?)
}

pub fn balance_of(holder: Address) -> Vec<u8> {
    IVestingVault::balanceOfCall { holder }.abi_encode()
}

/// Balance in the token's smallest unit, as a decimal string.
pub fn decode_balance(data: &[u8]) -> Result<String, AbiError> {
    Ok(IVestingVault::balanceOfCall::abi_decode_returns(data)?.to_string())
}

pub fn category(index: u32) -> Vec<u8> {
    IVestingVault::categoriesCall { index: U256::from(index) }.abi_encode()
}

pub fn decode_category(data: &[u8]) -> Result<CategoryInfo, AbiError> {
    let ret = IVestingVault::categoriesCall::abi_decode_returns(data)?;
    Ok(CategoryInfo {
        total_amount: ret.totalAmount.to_string(),
        tge_percent: to_u32(ret.tgePercent, "tgePercent")?,
        cliff_months: to_u32(ret.cliffMonths, "cliffMonths")?,
        vesting_months: to_u32(ret.vestingMonths, "vestingMonths")?,
        allocated: ret.allocated.to_string(),
        uses_per_mille: ret.usesPerMille,
    })
}

pub fn address_change_approved(beneficiary: Address) -> Vec<u8> {
    IVestingVault::addressChangeApprovedCall { beneficiary }.abi_encode()
}

pub fn decode_address_change_approved(data: &[u8]) -> Result<bool, AbiError> {
    Ok(IVestingVault::addressChangeApprovedCall::abi_decode_returns(data)?)
}

pub fn airdrop_owner() -> Vec<u8> {
    IAirdropper::ownerCall {}.abi_encode()
}

pub fn decode_airdrop_owner(data: &[u8]) -> Result<Address, AbiError> {
    Ok(IAirdropper::ownerCall::abi_decode_returns(data)?)
}

// ---------------------------------------------------------------------------
// Write calls
// ---------------------------------------------------------------------------

pub fn claim() -> Vec<u8> {
    IVestingVault::claimCall {}.abi_encode()
}

pub fn allocate_batch(category: u32, rows: &[BulkRow]) -> Vec<u8> {
    IVestingVault::allocateBatchCall {
        category: U256::from(category),
        beneficiaries: rows.iter().map(|row| row.address).collect(),
        amounts: rows.iter().map(|row| U256::from(row.amount)).collect(),
    }
    .abi_encode()
}

pub fn revoke_allocation(beneficiary: Address) -> Vec<u8> {
    IVestingVault::revokeAllocationCall { beneficiary }.abi_encode()
}

pub fn change_address(old_address: Address, new_address: Address) -> Vec<u8> {
    IVestingVault::changeAddressCall { oldAddress: old_address, newAddress: new_address }
        .abi_encode()
}

pub fn approve_address_change() -> Vec<u8> {
    IVestingVault::approveAddressChangeCall {}.abi_encode()
}

pub fn revoke_address_change_approval() -> Vec<u8> {
    IVestingVault::revokeAddressChangeApprovalCall {}.abi_encode()
}

pub fn emergency_withdraw(to: Address) -> Vec<u8> {
    IVestingVault::emergencyWithdrawCall { to }.abi_encode()
}

pub fn batch_transfer(token: Address, rows: &[BulkRow]) -> Vec<u8> {
    IAirdropper::batchTransferCall {
        token,
        recipients: rows.iter().map(|row| row.address).collect(),
        amounts: rows.iter().map(|row| U256::from(row.amount)).collect(),
    }
    .abi_encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolValue;
    use std::collections::HashSet;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn read_calldata_carries_selector_and_argument() {
        let data = allocation_of(addr(0x11));
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], IVestingVault::allocationsCall::SELECTOR);
        // the address is right-aligned in its 32-byte slot
        assert_eq!(&data[16..36], addr(0x11).as_slice());
    }

    #[test]
    fn every_operation_has_a_distinct_selector() {
        let selectors: HashSet<[u8; 4]> = [
            IVestingVault::allocationsCall::SELECTOR,
            IVestingVault::ownerCall::SELECTOR,
            IVestingVault::balanceOfCall::SELECTOR,
            IVestingVault::categoriesCall::SELECTOR,
            IVestingVault::addressChangeApprovedCall::SELECTOR,
            IVestingVault::claimCall::SELECTOR,
            IVestingVault::allocateBatchCall::SELECTOR,
            IVestingVault::revokeAllocationCall::SELECTOR,
            IVestingVault::changeAddressCall::SELECTOR,
            IVestingVault::approveAddressChangeCall::SELECTOR,
            IVestingVault::revokeAddressChangeApprovalCall::SELECTOR,
            IVestingVault::emergencyWithdrawCall::SELECTOR,
            IAirdropper::batchTransferCall::SELECTOR,
        ]
        .into_iter()
        .collect();
        assert_eq!(selectors.len(), 13);
    }

    #[test]
    fn no_argument_calls_are_bare_selectors() {
        assert_eq!(claim().len(), 4);
        assert_eq!(owner().len(), 4);
        assert_eq!(approve_address_change().len(), 4);
        assert_eq!(revoke_address_change_approval().len(), 4);
    }

    #[test]
    fn allocation_reply_normalizes_to_decimal_strings() {
        let reply = (
            U256::from(2u64),                                   // category
            U256::from(1_000u64) * U256::from(10u64).pow(U256::from(18u64)), // total
            U256::from(100u64) * U256::from(10u64).pow(U256::from(18u64)),   // tgeUnlock
            U256::from(3u64),                                   // cliffMonths
            U256::from(18u64),                                  // vestingMonths
            U256::from(385_802u64),                             // claimPerSecond
            U256::ZERO,                                         // claimed
            U256::from(1_700_000_000u64),                       // startTimestamp
        )
            .abi_encode_params();

        let allocation = decode_allocation(&reply).unwrap();
        assert_eq!(allocation.category, 2);
        assert_eq!(allocation.total, "1000000000000000000000");
        assert_eq!(allocation.tge_unlock, "100000000000000000000");
        assert_eq!(allocation.cliff_months, 3);
        assert_eq!(allocation.vesting_months, 18);
        assert_eq!(allocation.claimed, "0");
        assert_eq!(allocation.start_timestamp, 1_700_000_000);
        assert!(allocation.exists());
    }

    #[test]
    fn zero_total_reply_projects_to_no_allocation() {
        let reply = (
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
        )
            .abi_encode_params();
        let allocation = decode_allocation(&reply).unwrap();
        assert!(!allocation.exists());
    }

    #[test]
    fn month_counter_overflow_is_a_range_error() {
        let reply = (
            U256::ZERO,
            U256::from(1u64),
            U256::ZERO,
            U256::MAX, // cliffMonths far beyond u32
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
            U256::ZERO,
        )
            .abi_encode_params();
        assert!(matches!(decode_allocation(&reply), Err(AbiError::Range("cliffMonths"))));
    }

    #[test]
    fn balance_reply_decodes_to_decimal_string() {
        let reply = U256::from(42u64).abi_encode();
        assert_eq!(decode_balance(&reply).unwrap(), "42");
    }

    #[test]
    fn owner_reply_decodes_to_address() {
        let reply = addr(0x77).abi_encode();
        assert_eq!(decode_owner(&reply).unwrap(), addr(0x77));
        assert_eq!(decode_airdrop_owner(&reply).unwrap(), addr(0x77));
    }

    #[test]
    fn category_reply_roundtrips_including_flag() {
        let reply = (
            U256::from(5_000u64),
            U256::from(10u64),
            U256::from(6u64),
            U256::from(24u64),
            U256::from(1_250u64),
            true,
        )
            .abi_encode_params();
        let info = decode_category(&reply).unwrap();
        assert_eq!(info.total_amount, "5000");
        assert_eq!(info.tge_percent, 10);
        assert_eq!(info.cliff_months, 6);
        assert_eq!(info.vesting_months, 24);
        assert_eq!(info.allocated, "1250");
        assert!(info.uses_per_mille);
        assert_eq!(info.percent_used(), 25.0);
    }

    #[test]
    fn truncated_reply_is_a_decode_error() {
        let mut reply = U256::from(1u64).abi_encode();
        reply.truncate(16);
        assert!(matches!(decode_balance(&reply), Err(AbiError::Decode(_))));
    }

    #[test]
    fn batch_calldata_roundtrips_through_the_abi() {
        let rows = vec![
            BulkRow { address: addr(0xaa), amount: 100 },
            BulkRow { address: addr(0xbb), amount: 250 },
        ];
        let data = allocate_batch(4, &rows);
        assert_eq!(&data[..4], IVestingVault::allocateBatchCall::SELECTOR);

        let call = IVestingVault::allocateBatchCall::abi_decode(&data).unwrap();
        assert_eq!(call.category, U256::from(4u64));
        assert_eq!(call.beneficiaries, vec![addr(0xaa), addr(0xbb)]);
        assert_eq!(call.amounts, vec![U256::from(100u64), U256::from(250u64)]);
    }

    #[test]
    fn change_address_keeps_argument_order() {
        let data = change_address(addr(0x01), addr(0x02));
        let call = IVestingVault::changeAddressCall::abi_decode(&data).unwrap();
        assert_eq!(call.oldAddress, addr(0x01));
        assert_eq!(call.newAddress, addr(0x02));
    }

    #[test]
    fn airdrop_calldata_targets_the_token() {
        let rows = vec![BulkRow { address: addr(0xcc), amount: 7 }];
        let data = batch_transfer(addr(0xee), &rows);
        let call = IAirdropper::batchTransferCall::abi_decode(&data).unwrap();
        assert_eq!(call.token, addr(0xee));
        assert_eq!(call.recipients, vec![addr(0xcc)]);
        assert_eq!(call.amounts, vec![U256::from(7u64)]);
    }
}
