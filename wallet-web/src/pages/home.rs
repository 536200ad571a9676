//! Landing page: connect prompt, owner redirect notice, or the user
//! dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::UserDashboard;
use crate::services::gateway;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    // None while the owner check is in flight.
    let owner_status = RwSignal::new(Some(false));

    Effect::new(move || {
        let Some(account) = session.account() else {
            owner_status.set(Some(false));
            return;
        };
        owner_status.set(None);
        leptos::task::spawn_local(async move {
            let is_owner = gateway::is_owner(account).await;
            // Apply only if the account did not change underneath us.
            if session.account_untracked() == Some(account) {
                owner_status.set(Some(is_owner));
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
                        <p class="page-notice">
                            "Please connect your wallet to see your allocation."
                        </p>
                    }
                    .into_any()
                } else {
                    match owner_status.get() {
                        None => {
                            view! { <p class="page-notice">"Checking permissions..."</p> }
                                .into_any()
                        }
                        Some(true) => view! {
                            <p class="page-notice">
                                "This is the owner account. Head over to the "
                                <A href="/owner">"Owner Panel"</A>
                                "."
                            </p>
                        }
                        .into_any(),
                        Some(false) => view! { <UserDashboard/> }.into_any(),
                    }
                }
            }}
        </div>
    }
}
