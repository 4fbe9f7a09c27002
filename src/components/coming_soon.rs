//! Placeholder for views that are not built yet

use leptos::prelude::*;

#[component]
pub fn ComingSoon() -> impl IntoView {
    view! {
        <div class="coming-soon">
            <div class="coming-soon-icon">"⚙"</div>
            <h2>"Coming Soon"</h2>
            <p class="muted">"This feature is under development"</p>
        </div>
    }
}
