//! Browser Wallet Transport via wasm-bindgen
//!
//! JavaScript interop for the injected EIP-1193 provider (`window.ethereum`,
//! as exposed by MetaMask and compatible wallets). This module owns the raw
//! wire: request payloads go out as `{ method, params }` objects, replies
//! and provider errors come back as `JsValue`s and are normalized into
//! typed Rust values here. Nothing above this layer inspects
//! transport-specific error shapes.

use alloy_primitives::{hex, Address};
use serde::{Deserialize, Serialize};
use shared::chains::ChainDescriptor;
use shared::utils::parse_address;
use thiserror::Error;
use wasm_bindgen::prelude::*;

// EIP-1193 provider error codes.
const CODE_USER_REJECTED: i64 = 4001;
// EIP-3085/3326: the wallet has never seen the requested chain.
const CODE_UNRECOGNIZED_CHAIN: i64 = 4902;

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && typeof window.ethereum !== 'undefined';
}

export async function ethereumRequest(payload) {
    return await window.ethereum.request(payload);
}

export function onAccountsChanged(callback) {
    if (typeof window.ethereum !== 'undefined' && window.ethereum.on) {
        window.ethereum.on('accountsChanged', callback);
    }
}

export function onChainChanged(callback) {
    if (typeof window.ethereum !== 'undefined' && window.ethereum.on) {
        window.ethereum.on('chainChanged', callback);
    }
}
")]
extern "C" {
    /// True when an EIP-1193 provider is injected into the page.
    fn hasEthereum() -> bool;

    /// Forward a `{ method, params }` payload to the provider.
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(payload: JsValue) -> Result<JsValue, JsValue>;

    /// Subscribe to wallet-side account list changes.
    fn onAccountsChanged(callback: &js_sys::Function);

    /// Subscribe to wallet-side chain switches.
    fn onChainChanged(callback: &js_sys::Function);
}

/// Transport failures, tagged by the provider's error codes so call sites
/// branch on a finite enumeration instead of JS error shapes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("no browser wallet detected")]
    Missing,
    #[error("request rejected in the wallet")]
    Rejected,
    #[error("the wallet does not know the requested chain")]
    UnrecognizedChain,
    #[error("{0}")]
    Rpc(String),
}

impl ProviderError {
    fn from_js(value: JsValue) -> Self {
        let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64())
            .map(|code| code as i64);
        match code {
            Some(CODE_USER_REJECTED) => Self::Rejected,
            Some(CODE_UNRECOGNIZED_CHAIN) => Self::UnrecognizedChain,
            _ => Self::Rpc(js_error_message(&value)),
        }
    }
}

fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "wallet request failed".to_string())
}

#[derive(Serialize)]
struct RequestPayload<'a, P: Serialize> {
    method: &'a str,
    params: P,
}

/// Call parameters for `eth_call` / `eth_sendTransaction`. Addresses travel
/// as checksummed strings, calldata as `0x`-prefixed hex.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    pub data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParam<'a> {
    chain_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddChainParam {
    chain_id: String,
    chain_name: String,
    rpc_urls: Vec<String>,
    native_currency: NativeCurrency,
    block_explorer_urls: Vec<String>,
}

#[derive(Serialize)]
struct NativeCurrency {
    name: String,
    symbol: String,
    decimals: u8,
}

/// The subset of a transaction receipt the dashboard looks at.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub transaction_hash: String,
    /// `"0x1"` success, `"0x0"` reverted; absent on pre-Byzantium nodes.
    pub status: Option<String>,
}

pub fn is_available() -> bool {
    hasEthereum()
}

/// Send one JSON-RPC request through the wallet.
pub async fn request<P: Serialize>(method: &str, params: P) -> Result<JsValue, ProviderError> {
    if !is_available() {
        return Err(ProviderError::Missing);
    }
    let payload = serde_wasm_bindgen::to_value(&RequestPayload { method, params })
        .map_err(|err| ProviderError::Rpc(err.to_string()))?;
    ethereumRequest(payload).await.map_err(ProviderError::from_js)
}

/// Prompt the user for account access (or return the grant already held).
pub async fn request_accounts() -> Result<Vec<Address>, ProviderError> {
    let reply = request("eth_requestAccounts", Vec::<String>::new()).await?;
    Ok(parse_accounts(reply))
}

/// Accounts the wallet has already authorized, without prompting.
pub async fn authorized_accounts() -> Result<Vec<Address>, ProviderError> {
    let reply = request("eth_accounts", Vec::<String>::new()).await?;
    Ok(parse_accounts(reply))
}

pub async fn chain_id() -> Result<u64, ProviderError> {
    let reply = request("eth_chainId", Vec::<String>::new()).await?;
    reply
        .as_string()
        .as_deref()
        .and_then(parse_chain_hex)
        .ok_or_else(|| ProviderError::Rpc("malformed chain id reply".to_string()))
}

pub async fn switch_chain(hex_id: &str) -> Result<(), ProviderError> {
    request("wallet_switchEthereumChain", [SwitchChainParam { chain_id: hex_id }])
        .await
        .map(|_| ())
}

/// Register a chain the wallet does not know yet. Acceptance usually also
/// switches to it.
pub async fn add_chain(chain: &ChainDescriptor) -> Result<(), ProviderError> {
    let param = AddChainParam {
        chain_id: chain.hex_id.to_string(),
        chain_name: chain.name.to_string(),
        rpc_urls: chain.rpc_urls.iter().map(|url| url.to_string()).collect(),
        native_currency: NativeCurrency {
            name: chain.currency_symbol.to_string(),
            symbol: chain.currency_symbol.to_string(),
            decimals: 18,
        },
        block_explorer_urls: chain.explorer_url.iter().map(|url| url.to_string()).collect(),
    };
    request("wallet_addEthereumChain", [param]).await.map(|_| ())
}

/// Execute a read-only contract call against the latest block.
pub async fn eth_call(call: &CallRequest) -> Result<Vec<u8>, ProviderError> {
    let reply = request("eth_call", (call, "latest")).await?;
    let hex_reply = reply
        .as_string()
        .ok_or_else(|| ProviderError::Rpc("non-string call reply".to_string()))?;
    hex::decode(hex_reply.trim_start_matches("0x"))
        .map_err(|err| ProviderError::Rpc(format!("malformed call reply: {err}")))
}

/// Submit a transaction; resolves to its hash once the wallet signs and
/// broadcasts it.
pub async fn send_transaction(tx: &CallRequest) -> Result<String, ProviderError> {
    let reply = request("eth_sendTransaction", (tx,)).await?;
    reply
        .as_string()
        .ok_or_else(|| ProviderError::Rpc("non-string transaction hash".to_string()))
}

/// Receipt for a transaction, or `None` while it is still pending.
pub async fn transaction_receipt(hash: &str) -> Result<Option<ReceiptSummary>, ProviderError> {
    let reply = request("eth_getTransactionReceipt", [hash]).await?;
    if reply.is_null() || reply.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(reply)
        .map(Some)
        .map_err(|err| ProviderError::Rpc(format!("malformed receipt: {err}")))
}

pub fn on_accounts_changed(callback: &js_sys::Function) {
    onAccountsChanged(callback);
}

pub fn on_chain_changed(callback: &js_sys::Function) {
    onChainChanged(callback);
}

/// Decode a wallet-reported account array, dropping anything that is not a
/// well-formed address.
pub fn parse_accounts(value: JsValue) -> Vec<Address> {
    let raw: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap_or_default();
    raw.iter()
        .filter_map(|account| match parse_address(account) {
            Ok(address) => Some(address),
            Err(_) => {
                log::warn!("wallet reported a malformed account: {account}");
                None
            }
        })
        .collect()
}

/// Parse the `0x`-prefixed hex chain id used by `eth_chainId` and the
/// `chainChanged` notification.
pub fn parse_chain_hex(hex_id: &str) -> Option<u64> {
    u64::from_str_radix(hex_id.trim_start_matches("0x"), 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_hex_parses_wallet_notation() {
        assert_eq!(parse_chain_hex("0x531"), Some(1329));
        assert_eq!(parse_chain_hex("0x1"), Some(1));
        assert_eq!(parse_chain_hex("0xaa36a7"), Some(11155111));
        assert_eq!(parse_chain_hex("mainnet"), None);
        assert_eq!(parse_chain_hex(""), None);
    }

    #[test]
    fn call_request_serializes_to_the_rpc_shape() {
        let call = CallRequest {
            from: None,
            to: "0x4c1f8e0ddd02b4a2aaa68dd7c40e09db370eab71".to_string(),
            data: "0x4e71d92d".to_string(),
        };
        let json = serde_json::to_value(&call).unwrap();
        // `from` must be absent, not null, and keys stay camelCase.
        assert!(json.get("from").is_none());
        assert_eq!(json["to"], "0x4c1f8e0ddd02b4a2aaa68dd7c40e09db370eab71");
        assert_eq!(json["data"], "0x4e71d92d");
    }

    #[test]
    fn request_payload_carries_method_and_params() {
        let payload = RequestPayload { method: "eth_chainId", params: Vec::<String>::new() };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["method"], "eth_chainId");
        assert_eq!(json["params"], serde_json::json!([]));
    }
}
