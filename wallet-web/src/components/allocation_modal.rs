//! Modal presenting a looked-up allocation on the owner panel.

use leptos::prelude::*;
use shared::types::Allocation;
use shared::utils::truncate_address;

use crate::utils::format::{format_start_date, format_token_amount};

#[component]
pub fn AllocationModal(
    address: String,
    allocation: Allocation,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>"x"</button>
                <h3 class="modal-title">{truncate_address(&address)}</h3>
                <div class="card-rows">
                    <div class="card-row">
                        <span class="card-label">"Total Allocation"</span>
                        <span>{format_token_amount(&allocation.total)}</span>
                    </div>
                    <div class="card-row">
                        <span class="card-label">"TGE Unlock"</span>
                        <span>{format_token_amount(&allocation.tge_unlock)}</span>
                    </div>
                    <div class="card-row">
                        <span class="card-label">"Cliff Period"</span>
                        <span>{format!("{} month(s)", allocation.cliff_months)}</span>
                    </div>
                    <div class="card-row">
                        <span class="card-label">"Vesting Period"</span>
                        <span>{format!("{} month(s)", allocation.vesting_months)}</span>
                    </div>
                    <div class="card-row">
                        <span class="card-label">"Claimed"</span>
                        <span>{format_token_amount(&allocation.claimed)}</span>
                    </div>
                    <div class="card-row">
                        <span class="card-label">"Start Date"</span>
                        <span>{format_start_date(allocation.start_timestamp)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
