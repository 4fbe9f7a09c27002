//! Header Component
//!
//! Brand mark, language toggle and account buttons.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Top bar of the dashboard
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <div class="brand">
                <div class="brand-mark">"▦"</div>
                <h1 class="brand-title">"QR Khata"</h1>
            </div>

            <div class="header-controls">
                <button
                    class="header-btn lang-toggle"
                    on:click=move |_| ctx.toggle_language()
                >
                    {move || ctx.language().toggle_label()}
                </button>
                <button class="header-btn" title="Notifications">"🔔"</button>
                <button class="header-btn" title="Profile">"👤"</button>
            </div>
        </header>
    }
}
