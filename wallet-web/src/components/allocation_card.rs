//! Allocation summary card.

use leptos::prelude::*;
use shared::types::Allocation;

use crate::utils::format::{format_start_date, format_token_amount};

/// The beneficiary-facing allocation card. The claim button only renders
/// when a handler is supplied; the owner panel reuses the card read-only.
#[component]
pub fn AllocationCard(
    allocation: Allocation,
    #[prop(optional)] on_claim: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="card allocation-card">
            <h3 class="card-title">"Your Allocation"</h3>
            <div class="card-rows">
                <div class="card-row">
                    <span class="card-label">"Total Allocated"</span>
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
            {on_claim.map(|claim| {
                view! {
                    <button class="btn btn-claim" on:click=move |_| claim.run(())>
                        "Claim Tokens"
                    </button>
                }
            })}
        </div>
    }
}
