//! Type Selector Component
//!
//! Grid of payload type cards.

use leptos::prelude::*;

use crate::models::{PayloadKind, PAYLOAD_TYPES};

/// Payload type selector; the selected card is highlighted
#[component]
pub fn TypeSelector(
    #[prop(into)] current_kind: Signal<PayloadKind>,
    #[prop(into)] on_change: Callback<PayloadKind>,
) -> impl IntoView {
    view! {
        <div class="type-grid">
            {PAYLOAD_TYPES.iter().map(|option| {
                let kind = option.kind;
                let is_selected = move || current_kind.get() == kind;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-card active" } else { "type-card" }
                        on:click=move |_| on_change.run(kind)
                    >
                        <span class="type-icon">{option.icon}</span>
                        <h3>{option.label}</h3>
                        <p class="muted tiny">{option.description}</p>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
