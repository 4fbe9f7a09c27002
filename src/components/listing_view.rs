//! Listing View Component
//!
//! Table of every QR code with stub row actions.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::context::use_app_context;
use crate::navigation::Tab;
use crate::sample_data::{format_count, records};

#[component]
pub fn ListingView() -> impl IntoView {
    let ctx = use_app_context();
    let strings = move || ctx.strings();

    view! {
        <div class="listing-view">
            <div class="row-between">
                <h2>{move || strings().my_qr_codes}</h2>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Tab::CreateQr)>
                    "+ Create New QR"
                </button>
            </div>

            <div class=format!("{} flush", ctx.theme.card_class())>
                <div class="table-scroll">
                    <table class="qr-table">
                        <thead>
                            <tr>
                                <th>{move || strings().name}</th>
                                <th>{move || strings().kind}</th>
                                <th>{move || strings().scans}</th>
                                <th>{move || strings().status}</th>
                                <th>{move || strings().actions}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || records().iter()
                                key=|record| record.id.clone()
                                children=move |record| view! {
                                    <tr>
                                        <td>
                                            <div class="activity-main">
                                                <div class="qr-thumb small">"▦"</div>
                                                <div>
                                                    <p class="strong">
                                                        {record.name.clone()}
                                                        {record.is_dynamic.then(|| view! {
                                                            <span class="badge outline tiny">"Dynamic"</span>
                                                        })}
                                                    </p>
                                                    <p class="muted small">{format!("Created {}", record.created)}</p>
                                                </div>
                                            </div>
                                        </td>
                                        <td><span class="badge outline">{record.kind.badge()}</span></td>
                                        <td class="strong">{format_count(record.scans)}</td>
                                        <td><StatusBadge status=record.status /></td>
                                        <td>
                                            <div class="row-actions">
                                                <button class="btn-ghost" title="View">"👁"</button>
                                                <button class="btn-ghost" title="Edit">"✎"</button>
                                                <button class="btn-ghost" title="Download">"⬇"</button>
                                                <button class="btn-ghost" title="Delete">"🗑"</button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
