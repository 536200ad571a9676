//! Owner panel: category allocation, lookup, revocation, emergency
//! withdraw, and airdrop batch transfer.
//!
//! Every form validates locally before the gateway is touched; a malformed
//! address or a count mismatch never costs a network round-trip.

use leptos::prelude::*;
use shared::bulk::parse_bulk_text;
use shared::types::{Allocation, CategoryInfo};
use shared::utils::format_units;
use wasm_bindgen::JsCast;

use crate::components::AllocationModal;
use crate::services::gateway;
use crate::services::spreadsheet;
use crate::state::session::use_session;
use crate::utils::constants::{CATEGORY_LABELS, DISPLAY_PRECISION, TOKEN_DECIMALS, TOKEN_SYMBOL};
use crate::utils::format::{explorer_tx_url, format_percent, truncate_hash};

#[component]
pub fn OwnerDashboard() -> impl IntoView {
    view! {
        <div class="owner-panel">
            <h2 class="page-title">"Owner Panel"</h2>
            <AllocateSection/>
            <LookupSection/>
            <RevokeSection/>
            <EmergencySection/>
            <AirdropSection/>
        </div>
    }
}

fn tx_link(hash: &str) -> AnyView {
    let short = truncate_hash(hash);
    match explorer_tx_url(hash) {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer">{short}</a>
        }
        .into_any(),
        None => view! { <span>{short}</span> }.into_any(),
    }
}

/// Category-based allocation: manual comma-separated entry or a spreadsheet
/// upload, both funneling into the same batch call.
#[component]
fn AllocateSection() -> impl IntoView {
    let session = use_session();

    let category = RwSignal::new(0u32);
    let category_info = RwSignal::new(None::<CategoryInfo>);
    let addresses_raw = RwSignal::new(String::new());
    let amounts_raw = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let upload_error = RwSignal::new(None::<String>);
    let tx_hash = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Reload the usage meter whenever the selection changes.
    Effect::new(move || {
        let index = category.get();
        leptos::task::spawn_local(async move {
            let info = gateway::fetch_category(index).await;
            if category.get_untracked() == index {
                category_info.set(info);
            }
        });
    });

    let submit_manual = move |_| {
        form_error.set(None);
        tx_hash.set(None);
        let Some(account) = session.account_untracked() else {
            form_error.set(Some("Wallet not connected".to_string()));
            return;
        };
        let rows = match parse_bulk_text(
            &addresses_raw.get_untracked(),
            &amounts_raw.get_untracked(),
        ) {
            Ok(rows) => rows,
            Err(err) => {
                form_error.set(Some(err.to_string()));
                return;
            }
        };
        submitting.set(true);
        leptos::task::spawn_local(async move {
            match gateway::allocate_batch(account, category.get_untracked(), &rows).await {
                Ok(hash) => {
                    tx_hash.set(Some(hash));
                    addresses_raw.set(String::new());
                    amounts_raw.set(String::new());
                }
                Err(err) if err.is_rejection() => {
                    form_error.set(Some("Transaction rejected".to_string()));
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let on_file = move |ev: web_sys::Event| {
        upload_error.set(None);
        tx_hash.set(None);
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            upload_error.set(Some("No file chosen".to_string()));
            return;
        };
        let Some(account) = session.account_untracked() else {
            upload_error.set(Some("Wallet not connected".to_string()));
            return;
        };
        leptos::task::spawn_local(async move {
            let bytes = match spreadsheet::read_file_bytes(&file).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    upload_error.set(Some(err.to_string()));
                    return;
                }
            };
            let rows = match spreadsheet::parse_workbook(&bytes) {
                Ok(rows) => rows,
                Err(err) => {
                    upload_error.set(Some(err.to_string()));
                    return;
                }
            };
            match gateway::allocate_batch(account, category.get_untracked(), &rows).await {
                Ok(hash) => {
                    tx_hash.set(Some(hash));
                    input.set_value("");
                }
                Err(err) if err.is_rejection() => {
                    upload_error.set(Some("Transaction rejected".to_string()));
                }
                Err(err) => upload_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="card form-card">
            <h3 class="card-title">"Allocate from a Category"</h3>

            <label class="field-label">"Select Category"</label>
            <select
                class="field-input"
                on:change=move |ev| {
                    if let Ok(index) = event_target_value(&ev).parse::<u32>() {
                        category.set(index);
                    }
                }
            >
                {CATEGORY_LABELS
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <option
                                value=index.to_string()
                                selected=move || category.get() == index as u32
                            >
                                {*label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            {move || {
                category_info
                    .get()
                    .map(|info| {
                        let label = CATEGORY_LABELS
                            .get(category.get() as usize)
                            .copied()
                            .unwrap_or("?");
                        view! {
                            <p class="category-usage">
                                {format!(
                                    "Category \"{}\" usage: {} ({} / {} {})",
                                    label,
                                    format_percent(info.percent_used()),
                                    format_units(&info.allocated, TOKEN_DECIMALS, DISPLAY_PRECISION),
                                    format_units(&info.total_amount, TOKEN_DECIMALS, DISPLAY_PRECISION),
                                    TOKEN_SYMBOL,
                                )}
                            </p>
                        }
                    })
            }}

            <label class="field-label">"Beneficiary Addresses (comma-separated)"</label>
            <input
                class="field-input"
                type="text"
                placeholder="0x123..., 0x456..., 0x789..."
                prop:value=move || addresses_raw.get()
                on:input=move |ev| addresses_raw.set(event_target_value(&ev))
            />

            <label class="field-label">
                {format!("Amounts (comma-separated, in whole {TOKEN_SYMBOL})")}
            </label>
            <input
                class="field-input"
                type="text"
                placeholder="100, 250, 50"
                prop:value=move || amounts_raw.get()
                on:input=move |ev| amounts_raw.set(event_target_value(&ev))
            />

            <button class="btn" disabled=move || submitting.get() on:click=submit_manual>
                {move || if submitting.get() { "Submitting..." } else { "Submit Allocation" }}
            </button>
            {move || form_error.get().map(|err| view! { <p class="error-text">{err}</p> })}

            <div class="upload-block">
                <label class="field-label">
                    "Or upload a spreadsheet with columns \"address\" and \"amount\""
                </label>
                <input type="file" accept=".xls,.xlsx" on:change=on_file/>
                {move || upload_error.get().map(|err| view! { <p class="error-text">{err}</p> })}
            </div>

            {move || {
                tx_hash
                    .get()
                    .map(|hash| view! { <p class="notice notice-success">"Allocated! Tx: " {tx_link(&hash)}</p> })
            }}
        </div>
    }
}

/// Look up any beneficiary's allocation; results open in a modal.
#[component]
fn LookupSection() -> impl IntoView {
    let lookup_input = RwSignal::new(String::new());
    let lookup_error = RwSignal::new(None::<String>);
    let looking = RwSignal::new(false);
    let result = RwSignal::new(None::<(String, Allocation)>);

    let run_lookup = move |_| {
        lookup_error.set(None);
        let address = match gateway::parse_address_field(&lookup_input.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                lookup_error.set(Some(err.to_string()));
                return;
            }
        };
        looking.set(true);
        leptos::task::spawn_local(async move {
            match gateway::fetch_allocation(address).await {
                Some(allocation) if allocation.exists() => {
                    result.set(Some((address.to_string(), allocation)));
                }
                Some(_) | None => lookup_error.set(Some("No allocation found".to_string())),
            }
            looking.set(false);
        });
    };

    view! {
        <div class="card form-card">
            <h3 class="card-title">"Lookup Allocation"</h3>
            <div class="field-row">
                <input
                    class="field-input"
                    type="text"
                    placeholder="0xAddressToLookup"
                    prop:value=move || lookup_input.get()
                    on:input=move |ev| lookup_input.set(event_target_value(&ev))
                />
                <button class="btn" disabled=move || looking.get() on:click=run_lookup>
                    "Lookup"
                </button>
            </div>
            {move || lookup_error.get().map(|err| view! { <p class="error-text">{err}</p> })}
            {move || {
                result
                    .get()
                    .map(|(address, allocation)| {
                        view! {
                            <AllocationModal
                                address=address
                                allocation=allocation
                                on_close=Callback::new(move |_| result.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Revoke a beneficiary's remaining (unclaimed) allocation.
#[component]
fn RevokeSection() -> impl IntoView {
    let session = use_session();
    let address_input = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let working = RwSignal::new(false);

    let run_revoke = move |_| {
        outcome.set(None);
        let Some(account) = session.account_untracked() else {
            outcome.set(Some(Err("Wallet not connected".to_string())));
            return;
        };
        let beneficiary = match gateway::parse_address_field(&address_input.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                outcome.set(Some(Err(err.to_string())));
                return;
            }
        };
        working.set(true);
        leptos::task::spawn_local(async move {
            match gateway::revoke_allocation(account, beneficiary).await {
                Ok(hash) => {
                    outcome.set(Some(Ok(hash)));
                    address_input.set(String::new());
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
        <div class="card form-card">
            <h3 class="card-title">"Revoke Allocation"</h3>
            <p class="card-hint">"Returns the unclaimed remainder to the category pool."</p>
            <div class="field-row">
                <input
                    class="field-input"
                    type="text"
                    placeholder="0xBeneficiary"
                    prop:value=move || address_input.get()
                    on:input=move |ev| address_input.set(event_target_value(&ev))
                />
                <button class="btn btn-danger" disabled=move || working.get() on:click=run_revoke>
                    {move || if working.get() { "Revoking..." } else { "Revoke" }}
                </button>
            </div>
            {move || outcome.get().map(|outcome| render_outcome(outcome, "Revoked! Tx: "))}
        </div>
    }
}

/// Pull the contract's remaining token balance to a recovery address.
#[component]
fn EmergencySection() -> impl IntoView {
    let session = use_session();
    let recipient_input = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let working = RwSignal::new(false);

    let run_withdraw = move |_| {
        outcome.set(None);
        let Some(account) = session.account_untracked() else {
            outcome.set(Some(Err("Wallet not connected".to_string())));
            return;
        };
        let recipient = match gateway::parse_address_field(&recipient_input.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                outcome.set(Some(Err(err.to_string())));
                return;
            }
        };
        working.set(true);
        leptos::task::spawn_local(async move {
            match gateway::emergency_withdraw(account, recipient).await {
                Ok(hash) => outcome.set(Some(Ok(hash))),
                Err(err) if err.is_rejection() => {
                    outcome.set(Some(Err("Transaction rejected".to_string())));
                }
                Err(err) => outcome.set(Some(Err(err.to_string()))),
            }
            working.set(false);
        });
    };

    view! {
        <div class="card form-card">
            <h3 class="card-title">"Emergency Withdraw"</h3>
            <p class="card-hint">"Moves the contract's token balance to the given address."</p>
            <div class="field-row">
                <input
                    class="field-input"
                    type="text"
                    placeholder="0xRecoveryAddress"
                    prop:value=move || recipient_input.get()
                    on:input=move |ev| recipient_input.set(event_target_value(&ev))
                />
                <button class="btn btn-danger" disabled=move || working.get() on:click=run_withdraw>
                    {move || if working.get() { "Withdrawing..." } else { "Withdraw" }}
                </button>
            </div>
            {move || outcome.get().map(|outcome| render_outcome(outcome, "Withdrawn! Tx: "))}
        </div>
    }
}

/// Straight batch transfer through the airdropper contract.
#[component]
fn AirdropSection() -> impl IntoView {
    let session = use_session();
    let token_input = RwSignal::new(String::new());
    let addresses_raw = RwSignal::new(String::new());
    let amounts_raw = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Result<String, String>>);
    let working = RwSignal::new(false);

    let run_airdrop = move |_| {
        outcome.set(None);
        let Some(account) = session.account_untracked() else {
            outcome.set(Some(Err("Wallet not connected".to_string())));
            return;
        };
        let token = match gateway::parse_address_field(&token_input.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                outcome.set(Some(Err(err.to_string())));
                return;
            }
        };
        let rows = match parse_bulk_text(
            &addresses_raw.get_untracked(),
            &amounts_raw.get_untracked(),
        ) {
            Ok(rows) => rows,
            Err(err) => {
                outcome.set(Some(Err(err.to_string())));
                return;
            }
        };
        working.set(true);
        leptos::task::spawn_local(async move {
            match gateway::airdrop_transfer(account, token, &rows).await {
                Ok(hash) => {
                    outcome.set(Some(Ok(hash)));
                    addresses_raw.set(String::new());
                    amounts_raw.set(String::new());
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
        <div class="card form-card">
            <h3 class="card-title">"Airdrop Batch Transfer"</h3>

            <label class="field-label">"Token Address"</label>
            <input
                class="field-input"
                type="text"
                placeholder="0xTokenContract"
                prop:value=move || token_input.get()
                on:input=move |ev| token_input.set(event_target_value(&ev))
            />

            <label class="field-label">"Recipient Addresses (comma-separated)"</label>
            <input
                class="field-input"
                type="text"
                placeholder="0x123..., 0x456..."
                prop:value=move || addresses_raw.get()
                on:input=move |ev| addresses_raw.set(event_target_value(&ev))
            />

            <label class="field-label">"Amounts (comma-separated, whole tokens)"</label>
            <input
                class="field-input"
                type="text"
                placeholder="100, 250"
                prop:value=move || amounts_raw.get()
                on:input=move |ev| amounts_raw.set(event_target_value(&ev))
            />

            <button class="btn" disabled=move || working.get() on:click=run_airdrop>
                {move || if working.get() { "Transferring..." } else { "Send Airdrop" }}
            </button>
            {move || outcome.get().map(|outcome| render_outcome(outcome, "Sent! Tx: "))}
        </div>
    }
}

fn render_outcome(outcome: Result<String, String>, success_prefix: &'static str) -> AnyView {
    match outcome {
        Ok(hash) => view! {
            <p class="notice notice-success">{success_prefix} {tx_link(&hash)}</p>
        }
        .into_any(),
        Err(message) => view! { <p class="error-text">{message}</p> }.into_any(),
    }
}
