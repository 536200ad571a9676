//! Wallet connect button with account picker.
//!
//! Renders one of four shapes: an error chip when the transport failed, a
//! connecting chip while the wallet prompt is open, the connected account
//! (a picker when the wallet exposes several), or the connect call to
//! action.

use leptos::prelude::*;
use shared::utils::{parse_address, truncate_address};

use crate::state::session::use_session;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if let Some(error) = session.last_error() {
                // Clicking retries; a missing wallet will just error again.
                view! {
                    <button
                        class="wallet-chip wallet-chip-error"
                        title=error
                        on:click=move |_| session.connect()
                    >
                        "Wallet unavailable"
                    </button>
                }
                .into_any()
            } else if session.connecting() {
                view! { <span class="wallet-chip">"Connecting..."</span> }.into_any()
            } else if let Some(account) = session.account() {
                let accounts = session.accounts();
                if accounts.len() > 1 {
                    view! {
                        <select
                            class="wallet-chip wallet-chip-connected"
                            on:change=move |ev| {
                                if let Ok(address) = parse_address(&event_target_value(&ev)) {
                                    session.select_account(address);
                                }
                            }
                        >
                            {accounts
                                .into_iter()
                                .map(|address| {
                                    let value = address.to_string();
                                    let label = truncate_address(&value);
                                    view! {
                                        <option value=value selected=Some(address) == session.account()>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            class="wallet-chip wallet-chip-connected"
                            title="Disconnect"
                            on:click=move |_| session.disconnect()
                        >
                            {truncate_address(&account.to_string())}
                        </button>
                    }
                    .into_any()
                }
            } else {
                view! {
                    <button class="btn btn-connect" on:click=move |_| session.connect()>
                        "Connect Wallet"
                    </button>
                }
                .into_any()
            }
        }}
    }
}
