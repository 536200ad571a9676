//! Owner panel gate.
//!
//! The panel is reachable by the vesting contract owner or the airdropper
//! owner; both checks run against the chain, not local state, so a wallet
//! switch re-gates immediately.

use leptos::prelude::*;

use crate::components::{ConnectButton, OwnerDashboard};
use crate::services::gateway;
use crate::state::session::use_session;

#[component]
pub fn OwnerPage() -> impl IntoView {
    let session = use_session();
    // None while permissions are being verified.
    let allowed = RwSignal::new(Some(false));

    Effect::new(move || {
        let Some(account) = session.account() else {
            allowed.set(Some(false));
            return;
        };
        allowed.set(None);
        leptos::task::spawn_local(async move {
            let vesting = gateway::is_owner(account).await;
            let airdrop = gateway::is_airdrop_owner(account).await;
            if session.account_untracked() == Some(account) {
                allowed.set(Some(vesting || airdrop));
            }
        });
    });

    view! {
        <div class="page">
            {move || {
                if session.connecting() {
                    view! { <p class="page-notice">"Connecting wallet..."</p> }.into_any()
                } else if !session.is_connected() {
                    view! {
                        <div class="page-notice">
                            <p>"Please connect your wallet to access the Owner Panel."</p>
                            <ConnectButton/>
                        </div>
                    }
                    .into_any()
                } else {
                    match allowed.get() {
                        None => {
                            view! { <p class="page-notice">"Verifying permissions..."</p> }
                                .into_any()
                        }
                        Some(false) => {
                            view! { <p class="page-notice error-text">"Access denied"</p> }
                                .into_any()
                        }
                        Some(true) => view! { <OwnerDashboard/> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
