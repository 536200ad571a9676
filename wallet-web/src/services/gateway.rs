//! Contract Gateway
//!
//! Typed read/write surface over the wallet transport. Reads decode and
//! normalize through [`lib_evm`] and collapse every failure into `None`, so
//! views render one uniform "no data" state. Writes submit through the
//! wallet, block until the first confirmation, and report outcomes through
//! the [`GatewayError`] enumeration - call sites branch on its finite set
//! of kinds, never on transport error shapes.

use std::time::Duration;

use alloy_primitives::{hex, Address};
use futures_util::future::{select, Either};
use lib_evm::calls;
use shared::{Allocation, BulkRow, CategoryInfo};
use thiserror::Error;

use crate::services::transport::{self, CallRequest, ProviderError};
use crate::utils::constants::{
    AIRDROP_CONTRACT, RECEIPT_POLL_MS, REQUEST_TIMEOUT_MS, VESTING_CONTRACT,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("no browser wallet detected - install MetaMask to continue")]
    TransportMissing,
    #[error("transaction rejected")]
    Rejected,
    #[error("request timeout - please refresh")]
    Timeout,
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("{0}")]
    Call(String),
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Missing => Self::TransportMissing,
            ProviderError::Rejected => Self::Rejected,
            ProviderError::UnrecognizedChain | ProviderError::Rpc(_) => Self::Call(err.to_string()),
        }
    }
}

impl GatewayError {
    /// User rejection is an expected outcome, surfaced as a lightweight
    /// notice rather than an application error.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Validate an address-shaped form field before anything leaves the page.
pub fn parse_address_field(input: &str) -> Result<Address, GatewayError> {
    shared::utils::parse_address(input)
        .map_err(|_| GatewayError::InvalidAddress(input.trim().to_string()))
}

/// Race a data-loading future against the configured deadline. The pending
/// request is not aborted on expiry; its result is simply never applied.
pub async fn with_deadline<T>(fut: impl core::future::Future<Output = T>) -> Result<T, GatewayError> {
    let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match select(Box::pin(fut), Box::pin(deadline)).await {
        Either::Left((value, _)) => Ok(value),
        Either::Right(_) => Err(GatewayError::Timeout),
    }
}

/// Resolve the signing account, prompting for authorization if the wallet
/// has not granted it yet. Prefers `preferred` when the wallet still holds
/// it; otherwise falls back to the wallet's default account.
pub async fn signer(preferred: Option<Address>) -> Result<Address, GatewayError> {
    if !transport::is_available() {
        return Err(GatewayError::TransportMissing);
    }
    let accounts = transport::request_accounts().await?;
    match preferred {
        Some(wanted) if accounts.contains(&wanted) => Ok(wanted),
        _ => accounts
            .first()
            .copied()
            .ok_or_else(|| GatewayError::Call("wallet returned no accounts".to_string())),
    }
}

/// A call handle bound to one signer and one deployed contract.
///
/// Handles are rebuilt for every call and never cached, so a handle can
/// never outlive an account switch and go stale.
pub struct BoundContract {
    from: Option<Address>,
    to: Address,
}

pub fn bound_contract(from: Option<Address>) -> BoundContract {
    BoundContract { from, to: VESTING_CONTRACT }
}

pub fn bound_airdropper(from: Option<Address>) -> BoundContract {
    BoundContract { from, to: AIRDROP_CONTRACT }
}

impl BoundContract {
    fn request_for(&self, data: Vec<u8>) -> CallRequest {
        CallRequest {
            from: self.from.map(|address| address.to_string()),
            to: self.to.to_string(),
            data: format!("0x{}", hex::encode(data)),
        }
    }

    async fn call(&self, data: Vec<u8>) -> Result<Vec<u8>, GatewayError> {
        Ok(transport::eth_call(&self.request_for(data)).await?)
    }

    /// Submit a transaction and block until its first confirmation.
    async fn send(&self, data: Vec<u8>) -> Result<String, GatewayError> {
        if self.from.is_none() {
            return Err(GatewayError::Call("no signing account bound".to_string()));
        }
        let hash = transport::send_transaction(&self.request_for(data)).await?;
        log::info!("submitted transaction {hash}, awaiting confirmation");

        loop {
            gloo_timers::future::sleep(Duration::from_millis(RECEIPT_POLL_MS)).await;
            match transport::transaction_receipt(&hash).await? {
                Some(receipt) => {
                    if receipt.status.as_deref() == Some("0x0") {
                        return Err(GatewayError::Call("transaction reverted".to_string()));
                    }
                    return Ok(receipt.transaction_hash);
                }
                None => continue,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Reads: every failure collapses to None so callers render one uniform
// empty state. The underlying reason still goes to the log.
// ---------------------------------------------------------------------------

async fn read(handle: BoundContract, data: Vec<u8>) -> Option<Vec<u8>> {
    match handle.call(data).await {
        Ok(reply) => Some(reply),
        Err(err) => {
            log::warn!("contract read failed: {err}");
            None
        }
    }
}

pub async fn fetch_allocation(beneficiary: Address) -> Option<Allocation> {
    let reply = read(bound_contract(None), calls::allocation_of(beneficiary)).await?;
    decode_or_warn(calls::decode_allocation(&reply))
}

/// Balance in the token's smallest unit, as a decimal string.
pub async fn fetch_balance(holder: Address) -> Option<String> {
    let reply = read(bound_contract(None), calls::balance_of(holder)).await?;
    decode_or_warn(calls::decode_balance(&reply))
}

pub async fn fetch_owner() -> Option<Address> {
    let reply = read(bound_contract(None), calls::owner()).await?;
    decode_or_warn(calls::decode_owner(&reply))
}

pub async fn fetch_airdrop_owner() -> Option<Address> {
    let reply = read(bound_airdropper(None), calls::airdrop_owner()).await?;
    decode_or_warn(calls::decode_airdrop_owner(&reply))
}

pub async fn fetch_category(index: u32) -> Option<CategoryInfo> {
    let reply = read(bound_contract(None), calls::category(index)).await?;
    decode_or_warn(calls::decode_category(&reply))
}

pub async fn fetch_address_change_approved(beneficiary: Address) -> Option<bool> {
    let reply = read(bound_contract(None), calls::address_change_approved(beneficiary)).await?;
    decode_or_warn(calls::decode_address_change_approved(&reply))
}

pub async fn is_owner(account: Address) -> bool {
    fetch_owner().await == Some(account)
}

pub async fn is_airdrop_owner(account: Address) -> bool {
    fetch_airdrop_owner().await == Some(account)
}

fn decode_or_warn<T>(decoded: Result<T, lib_evm::AbiError>) -> Option<T> {
    match decoded {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("reply decoding failed: {err}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Writes: each resolves the signer fresh, submits, and waits for the first
// confirmation. The confirmed transaction hash comes back for display.
// ---------------------------------------------------------------------------

pub async fn claim(from: Address) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::claim()).await
}

pub async fn allocate_batch(
    from: Address,
    category: u32,
    rows: &[BulkRow],
) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::allocate_batch(category, rows)).await
}

pub async fn revoke_allocation(from: Address, beneficiary: Address) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::revoke_allocation(beneficiary)).await
}

pub async fn change_address(
    from: Address,
    old_address: Address,
    new_address: Address,
) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::change_address(old_address, new_address)).await
}

pub async fn approve_address_change(from: Address) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::approve_address_change()).await
}

pub async fn revoke_address_change_approval(from: Address) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::revoke_address_change_approval()).await
}

pub async fn emergency_withdraw(from: Address, to: Address) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_contract(Some(from)).send(calls::emergency_withdraw(to)).await
}

pub async fn airdrop_transfer(
    from: Address,
    token: Address,
    rows: &[BulkRow],
) -> Result<String, GatewayError> {
    let from = signer(Some(from)).await?;
    bound_airdropper(Some(from)).send(calls::batch_transfer(token, rows)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_onto_gateway_kinds() {
        assert_eq!(GatewayError::from(ProviderError::Missing), GatewayError::TransportMissing);
        assert_eq!(GatewayError::from(ProviderError::Rejected), GatewayError::Rejected);
        assert!(matches!(
            GatewayError::from(ProviderError::Rpc("execution reverted: no allocation".into())),
            GatewayError::Call(_)
        ));
    }

    #[test]
    fn rejection_is_the_only_non_alarming_kind() {
        assert!(GatewayError::Rejected.is_rejection());
        assert!(!GatewayError::Timeout.is_rejection());
        assert!(!GatewayError::TransportMissing.is_rejection());
    }

    #[test]
    fn malformed_field_input_short_circuits_locally() {
        for input in ["", "0x12", "hello", "0xZZD337AC87EDf41A740AedD386d7f650D29D6e90"] {
            assert!(matches!(
                parse_address_field(input),
                Err(GatewayError::InvalidAddress(_))
            ));
        }
        assert!(parse_address_field("0x4c1f8e0ddd02b4a2aaa68dd7c40e09db370eab71").is_ok());
    }

    #[test]
    fn call_failures_keep_the_underlying_reason() {
        let err = GatewayError::from(ProviderError::Rpc("execution reverted: not owner".into()));
        assert_eq!(err.to_string(), "execution reverted: not owner");
    }
}
