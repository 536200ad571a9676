//! Network guard: keeps the dashboard pinned to its target chain.
//!
//! Status is derived purely from the session's chain id; transitions happen
//! only when the wallet pushes a chain change through the session. The
//! guided switch is an attempt, not a guarantee - the banner stays until
//! the wallet actually reports the target chain.

use shared::chains::{ChainDescriptor, NetworkStatus, SEI};

use crate::services::transport::{self, ProviderError};
use crate::state::session::SessionContext;

/// The chain this deployment is wired against.
pub const TARGET_CHAIN: &ChainDescriptor = &SEI;

#[derive(Clone, Copy)]
pub struct NetworkGuard {
    session: SessionContext,
}

impl NetworkGuard {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Reactive: tracks the session's chain id.
    pub fn status(&self) -> NetworkStatus {
        NetworkStatus::evaluate(self.session.chain_id(), TARGET_CHAIN.id)
    }

    /// Ask the wallet to move to the target chain. A wallet that has never
    /// seen the chain reports it unrecognized; the follow-up registration
    /// request carries the chain metadata and, when accepted, usually also
    /// performs the switch. Failures are logged and non-fatal.
    pub async fn switch_to_target(&self) {
        match transport::switch_chain(TARGET_CHAIN.hex_id).await {
            Ok(()) => {}
            Err(ProviderError::UnrecognizedChain) => {
                if let Err(err) = transport::add_chain(TARGET_CHAIN).await {
                    log::warn!("chain registration declined: {err}");
                }
            }
            Err(err) => log::warn!("network switch failed: {err}"),
        }
    }
}
