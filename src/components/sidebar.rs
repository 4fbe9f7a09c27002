//! Sidebar Component
//!
//! Navigation between the dashboard views.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::navigation::Tab;

/// Sidebar navigation
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside class="sidebar">
            <nav class="sidebar-nav">
                {Tab::ALL.into_iter().map(|tab| {
                    let is_active = move || ctx.active_tab() == tab;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(tab)
                        >
                            <span class="nav-icon">{tab.icon()}</span>
                            {move || tab.label(ctx.strings())}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
