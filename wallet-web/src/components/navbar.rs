//! Top Navigation Bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::ConnectButton;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <span class="nav-title">
                        <span class="brand-gold">"Vest"</span>
                        <span class="brand-white">"Vault"</span>
                    </span>
                </A>
                <div class="nav-links">
                    <A href="/" attr:class="nav-link">"Home"</A>
                    <A href="/owner" attr:class="nav-link">"Owner Panel"</A>
                    <A href="/change-address" attr:class="nav-link">"Change Address"</A>
                    <ConnectButton/>
                </div>
            </div>
        </nav>
    }
}
