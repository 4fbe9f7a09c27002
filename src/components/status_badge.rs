//! Status Badge Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::QrStatus;

/// Localized active/paused badge
#[component]
pub fn StatusBadge(status: QrStatus) -> impl IntoView {
    let ctx = use_app_context();
    let active = status.is_active();

    view! {
        <span class=if active { "badge" } else { "badge secondary" }>
            {move || if active { ctx.strings().active } else { ctx.strings().paused }}
        </span>
    }
}
