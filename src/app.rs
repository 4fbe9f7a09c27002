//! QR Khata App
//!
//! Dashboard shell: header, sidebar and the view for the active tab.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ComingSoon, Header, ListingView, QrCreationForm, Sidebar, SummaryView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation::View;
use crate::sample_data::records;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.default_language));
    let ctx = AppContext::new(store, config.theme);

    // Provide context to all children
    provide_context(ctx);
    provide_context(config);

    log::info!("[APP] Mounted with {} sample records", records().len());

    view! {
        <div class=ctx.theme.root_class()>
            <Header />

            <div class="app-body">
                <Sidebar />

                <main class="main-content">
                    {move || match ctx.active_tab().view() {
                        View::Summary => view! { <SummaryView /> }.into_any(),
                        View::Listing => view! { <ListingView /> }.into_any(),
                        View::CreateForm => view! { <QrCreationForm /> }.into_any(),
                        View::ComingSoon => view! { <ComingSoon /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
