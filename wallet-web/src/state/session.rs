//! Reactive wallet session context.
//!
//! Wraps the [`shared::Session`] state machine in a single `RwSignal` owned
//! by the application root and injected into every consumer. No other
//! component holds provider, signer, or account state; earlier revisions
//! that duplicated connection logic per view kept drifting out of sync
//! after account switches.

use alloy_primitives::Address;
use leptos::prelude::*;
use shared::session::Session;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::transport::{self, ProviderError};

pub const WALLET_MISSING_NOTICE: &str = "No browser wallet detected. Please install MetaMask.";

/// Global session context. `Copy` so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(Session::new()) }
    }

    pub fn account(&self) -> Option<Address> {
        self.state.with(|session| session.active_account())
    }

    /// Untracked read for use inside async continuations, where the caller
    /// wants the current value without subscribing.
    pub fn account_untracked(&self) -> Option<Address> {
        self.state.with_untracked(|session| session.active_account())
    }

    pub fn accounts(&self) -> Vec<Address> {
        self.state.with(|session| session.accounts().to_vec())
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.state.with(|session| session.chain_id())
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|session| session.is_connected())
    }

    pub fn connecting(&self) -> bool {
        self.state.with(|session| session.connecting)
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.with(|session| session.last_error.clone())
    }

    /// Explicit connect: prompts the wallet for account access. Re-entrant
    /// calls while a prompt is open are no-ops.
    pub fn connect(&self) {
        if self.state.with_untracked(|session| session.connecting) {
            return;
        }
        let state = self.state;
        state.update(|session| {
            session.connecting = true;
            session.last_error = None;
        });
        leptos::task::spawn_local(async move {
            match establish(true).await {
                Ok((accounts, chain_id)) => {
                    state.update(|session| session.established(accounts, chain_id));
                }
                Err(ProviderError::Missing) => {
                    state.update(|session| session.fail(WALLET_MISSING_NOTICE));
                }
                Err(err) => state.update(|session| session.fail(err.to_string())),
            }
            state.update(|session| session.connecting = false);
        });
    }

    /// Startup path: silently pick up accounts the wallet already
    /// authorized (no prompt) and wire the wallet's push notifications for
    /// the lifetime of the application.
    pub fn init(&self) {
        let state = self.state;
        leptos::task::spawn_local(async move {
            match establish(false).await {
                Ok((accounts, chain_id)) => {
                    log::info!("silent reconnect found {} authorized account(s)", accounts.len());
                    state.update(|session| session.established(accounts, chain_id));
                }
                Err(ProviderError::Missing) => {
                    state.update(|session| session.fail(WALLET_MISSING_NOTICE));
                }
                Err(err) => state.update(|session| session.fail(err.to_string())),
            }
        });
        self.subscribe();
    }

    /// Register the wallet's push notifications. The closures are handed to
    /// the wallet for the rest of the page's life and intentionally leaked.
    fn subscribe(&self) {
        let state = self.state;

        let on_accounts = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let accounts = transport::parse_accounts(value);
            log::info!("wallet pushed an account change: {} account(s)", accounts.len());
            state.update(|session| session.accounts_changed(accounts));
        });
        transport::on_accounts_changed(on_accounts.as_ref().unchecked_ref());
        on_accounts.forget();

        let on_chain = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            match value.as_string().as_deref().and_then(transport::parse_chain_hex) {
                Some(chain_id) => {
                    log::info!("wallet switched to chain {chain_id}");
                    state.update(|session| session.chain_changed(chain_id));
                }
                None => log::warn!("wallet pushed a malformed chain id"),
            }
        });
        transport::on_chain_changed(on_chain.as_ref().unchecked_ref());
        on_chain.forget();
    }

    /// Switch the active account; ignored unless the wallet reported the
    /// address in its account list.
    pub fn select_account(&self, address: Address) {
        self.state.update(|session| {
            session.select_account(address);
        });
    }

    /// Local reset only; the wallet keeps its authorization.
    pub fn disconnect(&self) {
        self.state.update(|session| session.disconnect());
    }
}

async fn establish(prompt: bool) -> Result<(Vec<Address>, u64), ProviderError> {
    let accounts = if prompt {
        transport::request_accounts().await?
    } else {
        transport::authorized_accounts().await?
    };
    let chain_id = transport::chain_id().await?;
    Ok((accounts, chain_id))
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
