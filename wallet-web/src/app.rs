//! Application shell and routes.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{ChangeAddressPage, HomePage, OwnerPage};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let session = provide_session_context();

    // One silent reconnect per page load; from here on the wallet's push
    // notifications keep the session current.
    session.init();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/owner") view=OwnerPage/>
                        <Route path=path!("/change-address") view=ChangeAddressPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
