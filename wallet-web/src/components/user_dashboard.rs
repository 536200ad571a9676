//! Beneficiary dashboard: allocation, balance, claim, migration approval.
//!
//! All remote loads race the configured deadline and carry a generation
//! counter; a result that arrives after the view moved on (new account, new
//! chain, unmount, timeout) is dropped instead of applied.

use leptos::prelude::*;
use shared::types::Allocation;

use crate::components::{AllocationCard, NetworkBanner};
use crate::services::gateway;
use crate::state::session::use_session;
use crate::utils::constants::TARGET_CHAIN_ID;
use crate::utils::format::{explorer_tx_url, format_token_amount, truncate_hash};

#[derive(Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    WrongNetwork,
    Failed(String),
}

#[derive(Clone, PartialEq, Eq)]
enum TxNotice {
    Pending,
    Confirmed(String),
    Rejected,
    Failed(String),
}

#[component]
pub fn UserDashboard() -> impl IntoView {
    let session = use_session();

    let allocation = RwSignal::new(None::<Allocation>);
    let balance = RwSignal::new(String::from("0"));
    let approved = RwSignal::new(false);
    let load = RwSignal::new(LoadState::Loading);
    let notice = RwSignal::new(None::<TxNotice>);
    let toggling = RwSignal::new(false);

    // Bumped on every (account, chain, refresh) change and on unmount;
    // in-flight loads compare against it before touching state.
    let generation = RwSignal::new(0u64);
    let refresh = RwSignal::new(0u32);
    on_cleanup(move || generation.update(|gen| *gen += 1));

    Effect::new(move || {
        let account = session.account();
        let chain = session.chain_id();
        refresh.get();

        generation.update(|gen| *gen += 1);
        let my_generation = generation.get_untracked();

        let Some(account) = account else {
            allocation.set(None);
            balance.set("0".to_string());
            approved.set(false);
            load.set(LoadState::Ready);
            return;
        };
        if chain != Some(TARGET_CHAIN_ID) {
            load.set(LoadState::WrongNetwork);
            return;
        }

        load.set(LoadState::Loading);
        leptos::task::spawn_local(async move {
            let result = gateway::with_deadline(async {
                let alloc = gateway::fetch_allocation(account).await;
                let bal = gateway::fetch_balance(account).await;
                let approval = gateway::fetch_address_change_approved(account).await;
                (alloc, bal, approval)
            })
            .await;

            if generation.get_untracked() != my_generation {
                return; // the view moved on, drop this result
            }
            match result {
                Ok((alloc, bal, approval)) => {
                    allocation.set(alloc);
                    balance.set(bal.unwrap_or_else(|| "0".to_string()));
                    approved.set(approval.unwrap_or(false));
                    load.set(LoadState::Ready);
                }
                Err(err) => load.set(LoadState::Failed(err.to_string())),
            }
        });
    });

    let on_claim = Callback::new(move |_| {
        let Some(account) = session.account_untracked() else {
            return;
        };
        notice.set(Some(TxNotice::Pending));
        leptos::task::spawn_local(async move {
            match gateway::claim(account).await {
                Ok(hash) => {
                    notice.set(Some(TxNotice::Confirmed(hash)));
                    refresh.update(|count| *count += 1);
                }
                Err(err) if err.is_rejection() => notice.set(Some(TxNotice::Rejected)),
                Err(err) => notice.set(Some(TxNotice::Failed(err.to_string()))),
            }
        });
    });

    let toggle_approval = move |_| {
        if toggling.get_untracked() {
            return;
        }
        let Some(account) = session.account_untracked() else {
            return;
        };
        let currently = approved.get_untracked();
        toggling.set(true);
        leptos::task::spawn_local(async move {
            let result = if currently {
                gateway::revoke_address_change_approval(account).await
            } else {
                gateway::approve_address_change(account).await
            };
            match result {
                Ok(_) => approved.set(!currently),
                Err(err) if err.is_rejection() => notice.set(Some(TxNotice::Rejected)),
                Err(err) => notice.set(Some(TxNotice::Failed(err.to_string()))),
            }
            toggling.set(false);
        });
    };

    view! {
        <div class="dashboard">
            <NetworkBanner/>
            {move || match load.get() {
                LoadState::Loading => {
                    view! { <p class="page-notice">"Loading your data..."</p> }.into_any()
                }
                LoadState::WrongNetwork => {
                    view! {
                        <p class="page-notice">
                            "Please switch networks above to view your allocation."
                        </p>
                    }
                    .into_any()
                }
                LoadState::Failed(message) => view! {
                    <div class="page-notice">
                        <p class="error-text">{message}</p>
                        <button
                            class="btn"
                            on:click=|_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Refresh"
                        </button>
                    </div>
                }
                .into_any(),
                LoadState::Ready => {
                    match allocation.get() {
                        Some(alloc) if alloc.exists() => view! {
                            <div class="dashboard-grid">
                                <AllocationCard allocation=alloc on_claim=on_claim/>
                                <div class="card balance-card">
                                    <h3 class="card-title">"Token Balance"</h3>
                                    <p class="balance-figure">
                                        {move || format_token_amount(&balance.get())}
                                    </p>
                                    <button
                                        class="btn btn-secondary"
                                        disabled=move || toggling.get()
                                        on:click=toggle_approval
                                    >
                                        {move || {
                                            if toggling.get() {
                                                "Processing...".to_string()
                                            } else if approved.get() {
                                                "Revoke address migration permission".to_string()
                                            } else {
                                                "Grant address migration permission".to_string()
                                            }
                                        }}
                                    </button>
                                </div>
                                {move || notice.get().map(|notice| render_notice(notice))}
                            </div>
                        }
                        .into_any(),
                        _ => view! {
                            <div class="page-notice no-allocation">
                                <p>"No allocation found for this account."</p>
                            </div>
                        }
                        .into_any(),
                    }
                }
            }}
        </div>
    }
}

fn render_notice(notice: TxNotice) -> impl IntoView {
    match notice {
        TxNotice::Pending => {
            view! { <p class="notice">"Waiting for the wallet and confirmation..."</p> }.into_any()
        }
        TxNotice::Confirmed(hash) => {
            let short = truncate_hash(&hash);
            match explorer_tx_url(&hash) {
                Some(url) => view! {
                    <p class="notice notice-success">
                        "Confirmed: "
                        <a href=url target="_blank" rel="noopener noreferrer">{short}</a>
                    </p>
                }
                .into_any(),
                None => {
                    view! { <p class="notice notice-success">"Confirmed: " {short}</p> }.into_any()
                }
            }
        }
        TxNotice::Rejected => {
            view! { <p class="notice notice-muted">"Transaction rejected"</p> }.into_any()
        }
        TxNotice::Failed(message) => {
            view! { <p class="notice notice-error">{message}</p> }.into_any()
        }
    }
}
