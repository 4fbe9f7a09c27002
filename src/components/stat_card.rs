//! Stat Card Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// One headline figure on the summary view
#[component]
pub fn StatCard(
    #[prop(into)] title: Signal<&'static str>,
    value: String,
    icon: &'static str,
    /// Accent class for value and icon
    #[prop(default = "accent-primary")]
    accent: &'static str,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class=format!("{} stat-card", ctx.theme.card_class())>
            <div class="stat-text">
                <p class="muted small">{move || title.get()}</p>
                <p class=format!("stat-value {}", accent)>{value}</p>
            </div>
            <span class=format!("stat-icon {}", accent)>{icon}</span>
        </div>
    }
}
