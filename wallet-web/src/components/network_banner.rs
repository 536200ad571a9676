//! Wrong-network banner with guided switch.

use leptos::prelude::*;
use shared::chains::NetworkStatus;

use crate::state::network::NetworkGuard;
use crate::state::session::use_session;

#[component]
pub fn NetworkBanner() -> impl IntoView {
    let session = use_session();
    let guard = NetworkGuard::new(session);
    let (switching, set_switching) = signal(false);

    view! {
        {move || match guard.status() {
            NetworkStatus::Mismatched { current, target } => view! {
                <div class="banner banner-warning">
                    <span>
                        {format!("Your wallet is on {current}; this dashboard requires {target}.")}
                    </span>
                    <button
                        class="btn btn-small"
                        disabled=move || switching.get()
                        on:click=move |_| {
                            set_switching.set(true);
                            leptos::task::spawn_local(async move {
                                guard.switch_to_target().await;
                                set_switching.set(false);
                            });
                        }
                    >
                        {move || if switching.get() { "Switching..." } else { "Switch network" }}
                    </button>
                </div>
            }
            .into_any(),
            NetworkStatus::Matched | NetworkStatus::Unknown => ().into_any(),
        }}
    }
}
