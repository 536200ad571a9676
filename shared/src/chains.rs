//! Static registry of EVM networks the wallet may report.
//!
//! The dashboard itself targets a single network (Sei), but the wallet can
//! be pointed anywhere; the registry gives mismatch banners a display name
//! for whatever the wallet is currently on, and carries the metadata needed
//! to register the target chain with a wallet that does not know it yet.

/// Display and connection metadata for one network, keyed by numeric
/// chain id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainDescriptor {
    pub id: u64,
    pub name: &'static str,
    /// Chain id as the `0x`-prefixed hex string used on the wallet wire.
    pub hex_id: &'static str,
    pub network_key: &'static str,
    pub address_prefix: &'static str,
    /// Full printable address length, prefix included.
    pub address_length: usize,
    pub currency_symbol: &'static str,
    pub rpc_urls: &'static [&'static str],
    pub explorer_url: Option<&'static str>,
}

pub const ETHEREUM: ChainDescriptor = ChainDescriptor {
    id: 1,
    name: "Ethereum",
    hex_id: "0x1",
    network_key: "ethereum",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "ETH",
    rpc_urls: &[],
    explorer_url: None,
};

pub const BSC: ChainDescriptor = ChainDescriptor {
    id: 56,
    name: "Binance Smart Chain",
    hex_id: "0x38",
    network_key: "bsc",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "BNB",
    rpc_urls: &[],
    explorer_url: None,
};

pub const POLYGON: ChainDescriptor = ChainDescriptor {
    id: 137,
    name: "Polygon",
    hex_id: "0x89",
    network_key: "polygon",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "POL",
    rpc_urls: &[],
    explorer_url: None,
};

pub const POLYGON_AMOY: ChainDescriptor = ChainDescriptor {
    id: 80002,
    name: "Polygon Testnet (Amoy)",
    hex_id: "0x13882",
    network_key: "matic_amoy",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "POL",
    rpc_urls: &[],
    explorer_url: None,
};

pub const SEPOLIA: ChainDescriptor = ChainDescriptor {
    id: 11155111,
    name: "Sepolia",
    hex_id: "0xaa36a7",
    network_key: "eth_sepolia",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "ETH",
    rpc_urls: &[],
    explorer_url: None,
};

pub const BASE_SEPOLIA: ChainDescriptor = ChainDescriptor {
    id: 84532,
    name: "Base Sepolia",
    hex_id: "0x14a34",
    network_key: "base_sepolia",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "ETH",
    rpc_urls: &[],
    explorer_url: None,
};

pub const BASE: ChainDescriptor = ChainDescriptor {
    id: 8453,
    name: "Base",
    hex_id: "0x2105",
    network_key: "base",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "ETH",
    rpc_urls: &[],
    explorer_url: None,
};

pub const SEI: ChainDescriptor = ChainDescriptor {
    id: 1329,
    name: "Sei Network",
    hex_id: "0x531",
    network_key: "sei_mainnet",
    address_prefix: "0x",
    address_length: 42,
    currency_symbol: "SEI",
    rpc_urls: &["https://evm-rpc.sei-apis.com"],
    explorer_url: Some("https://seitrace.com"),
};

/// Networks the dashboard can name. Only the target chain carries RPC and
/// explorer entries; the rest exist so the mismatch banner can say where
/// the wallet actually is.
pub const CHAINS: &[ChainDescriptor] =
    &[ETHEREUM, BSC, POLYGON, POLYGON_AMOY, SEPOLIA, BASE_SEPOLIA, BASE, SEI];

/// Look up a network by numeric chain id.
pub fn chain_info(id: u64) -> Option<&'static ChainDescriptor> {
    CHAINS.iter().find(|chain| chain.id == id)
}

/// Human-readable name for a chain id, falling back to `chain <id>` for
/// networks outside the registry.
pub fn chain_display_name(id: u64) -> String {
    match chain_info(id) {
        Some(chain) => chain.name.to_string(),
        None => format!("chain {id}"),
    }
}

/// Where the wallet's active chain stands relative to the dashboard's
/// single target chain.
///
/// Transitions are driven solely by chain-change notifications flowing
/// through the session; a guided switch is an *attempted* transition from
/// `Mismatched` toward `Matched` with no guaranteed success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkStatus {
    /// The wallet has not reported a chain yet.
    Unknown,
    /// The wallet is on the target chain.
    Matched,
    /// The wallet is somewhere else; both names are ready for the banner.
    Mismatched { current: String, target: String },
}

impl NetworkStatus {
    pub fn evaluate(chain_id: Option<u64>, target_id: u64) -> Self {
        match chain_id {
            None => Self::Unknown,
            Some(id) if id == target_id => Self::Matched,
            Some(id) => Self::Mismatched {
                current: chain_display_name(id),
                target: chain_display_name(target_id),
            },
        }
    }

    pub fn is_mismatched(&self) -> bool {
        matches!(self, Self::Mismatched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_the_target_chain() {
        let sei = chain_info(1329).expect("Sei is registered");
        assert_eq!(sei.hex_id, "0x531");
        assert_eq!(sei.rpc_urls, &["https://evm-rpc.sei-apis.com"]);
        assert_eq!(sei.explorer_url, Some("https://seitrace.com"));
    }

    #[test]
    fn display_name_falls_back_for_unknown_ids() {
        assert_eq!(chain_display_name(1), "Ethereum");
        assert_eq!(chain_display_name(424242), "chain 424242");
    }

    #[test]
    fn ethereum_against_sei_reports_both_names() {
        let status = NetworkStatus::evaluate(Some(1), 1329);
        assert_eq!(
            status,
            NetworkStatus::Mismatched {
                current: "Ethereum".to_string(),
                target: "Sei Network".to_string(),
            }
        );
        assert!(status.is_mismatched());
    }

    #[test]
    fn matched_and_unknown_states() {
        assert_eq!(NetworkStatus::evaluate(Some(1329), 1329), NetworkStatus::Matched);
        assert_eq!(NetworkStatus::evaluate(None, 1329), NetworkStatus::Unknown);
    }

    #[test]
    fn unregistered_current_chain_still_gets_a_name() {
        let status = NetworkStatus::evaluate(Some(99999), 1329);
        assert_eq!(
            status,
            NetworkStatus::Mismatched {
                current: "chain 99999".to_string(),
                target: "Sei Network".to_string(),
            }
        );
    }
}
