//! Beneficiary address migration, restricted to the vesting contract
//! owner.
//!
//! Both fields validate locally; the call only goes out once the two
//! addresses are well-formed. The contract still enforces its own rules
//! (approval by the old address, no allocation at the new one) and its
//! revert reason is surfaced verbatim.

use leptos::prelude::*;

use crate::components::ConnectButton;
use crate::services::gateway;
use crate::state::session::use_session;
use crate::utils::format::{explorer_tx_url, truncate_hash};

#[component]
pub fn ChangeAddressPage() -> impl IntoView {
    let session = use_session();
    let allowed = RwSignal::new(Some(false));

    let old_input = RwSignal::new(String::new());
    let new_input = RwSignal::new(String::new());
    let old_error = RwSignal::new(None::<String>);
    let new_error = RwSignal::new(None::<String>);
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let working = RwSignal::new(false);

    Effect::new(move || {
        let Some(account) = session.account() else {
            allowed.set(Some(false));
            return;
        };
        allowed.set(None);
        leptos::task::spawn_local(async move {
            let is_owner = gateway::is_owner(account).await;
            if session.account_untracked() == Some(account) {
                allowed.set(Some(is_owner));
            }
        });
    });

    let submit = move |_| {
        old_error.set(None);
        new_error.set(None);
        outcome.set(None);

        let Some(account) = session.account_untracked() else {
            outcome.set(Some(Err("Wallet not connected".to_string())));
            return;
        };
        let old_address = match gateway::parse_address_field(&old_input.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                old_error.set(Some(err.to_string()));
                return;
            }
        };
        let new_address = match gateway::parse_address_field(&new_input.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                new_error.set(Some(err.to_string()));
                return;
            }
        };

        working.set(true);
        leptos::task::spawn_local(async move {
            match gateway::change_address(account, old_address, new_address).await {
                Ok(hash) => {
                    outcome.set(Some(Ok(hash)));
                    old_input.set(String::new());
                    new_input.set(String::new());
                }
                Err(err) if err.is_rejection() => {
                    outcome.set(Some(Err("Transaction rejected".to_string())));
                }
                Err(err) => outcome.set(Some(Err(err.to_string()))),
            }
            working.set(false);
        });
    };

    view! {
        <div class="page">
            {move || {
                if session.connecting() {
                    view! { <p class="page-notice">"Connecting wallet..."</p> }.into_any()
                } else if !session.is_connected() {
                    view! {
                        <div class="page-notice">
                            <p>"Please connect your wallet first."</p>
                            <ConnectButton/>
                        </div>
                    }
                    .into_any()
                } else {
                    match allowed.get() {
                        None => {
                            view! { <p class="page-notice">"Checking permissions..."</p> }
                                .into_any()
                        }
                        Some(false) => view! {
                            <p class="page-notice error-text">
                                "Access denied. Only the contract owner can view this page."
                            </p>
                        }
                        .into_any(),
                        Some(true) => view! {
                            <div class="card form-card change-address-card">
                                <h3 class="card-title">"Change Allocation Address"</h3>

                                <label class="field-label">"Old Address"</label>
                                <input
                                    class="field-input"
                                    type="text"
                                    placeholder="0xOldAddress"
                                    prop:value=move || old_input.get()
                                    on:input=move |ev| old_input.set(event_target_value(&ev))
                                />
                                {move || {
                                    old_error.get().map(|err| view! { <p class="error-text">{err}</p> })
                                }}

                                <label class="field-label">"New Address"</label>
                                <input
                                    class="field-input"
                                    type="text"
                                    placeholder="0xNewAddress"
                                    prop:value=move || new_input.get()
                                    on:input=move |ev| new_input.set(event_target_value(&ev))
                                />
                                {move || {
                                    new_error.get().map(|err| view! { <p class="error-text">{err}</p> })
                                }}

                                <button
                                    class="btn"
                                    disabled=move || working.get()
                                    on:click=submit
                                >
                                    {move || {
                                        if working.get() { "Updating..." } else { "Change Address" }
                                    }}
                                </button>

                                {move || {
                                    outcome
                                        .get()
                                        .map(|outcome| match outcome {
                                            Ok(hash) => {
                                                let short = truncate_hash(&hash);
                                                match explorer_tx_url(&hash) {
                                                    Some(url) => view! {
                                                        <p class="notice notice-success">
                                                            "Address updated! Tx: "
                                                            <a
                                                                href=url
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                            >
                                                                {short}
                                                            </a>
                                                        </p>
                                                    }
                                                    .into_any(),
                                                    None => view! {
                                                        <p class="notice notice-success">
                                                            "Address updated! Tx: " {short}
                                                        </p>
                                                    }
                                                    .into_any(),
                                                }
                                            }
                                            Err(message) => {
                                                view! { <p class="error-text">{message}</p> }
                                                    .into_any()
                                            }
                                        })
                                }}
                            </div>
                        }
                        .into_any(),
                    }
                }
            }}
        </div>
    }
}
