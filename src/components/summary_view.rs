//! Summary View Component
//!
//! Landing view: headline figures, recent activity, quick actions and the
//! subscription card.

use leptos::prelude::*;

use crate::components::{StatCard, StatusBadge};
use crate::context::{use_app_config, use_app_context};
use crate::navigation::Tab;
use crate::sample_data::{format_count, records, DashboardStats};

/// Records listed under recent activity
const RECENT_LIMIT: usize = 3;

#[component]
pub fn SummaryView() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_app_config();
    let card = ctx.theme.card_class();
    let stats = DashboardStats::from_records(records());
    let quota_percent = stats.quota_percent(config.qr_quota);

    view! {
        <div class="summary-view">
            <div class="stats-grid">
                <StatCard
                    title=Signal::derive(move || ctx.strings().total_qr_codes)
                    value=stats.total_codes.to_string()
                    icon="▦"
                    accent="accent-green"
                />
                <StatCard
                    title=Signal::derive(move || ctx.strings().total_scans)
                    value=format_count(stats.total_scans)
                    icon="👁"
                    accent="accent-blue"
                />
                <StatCard
                    title=Signal::derive(move || ctx.strings().active_qrs)
                    value=stats.active_codes.to_string()
                    icon="📊"
                    accent="accent-green"
                />
                <StatCard
                    title=Signal::derive(|| "Growth Rate")
                    value="+12%".to_string()
                    icon="📈"
                    accent="accent-purple"
                />
            </div>

            <div class="summary-grid">
                <div class=format!("{} span-2", card)>
                    <h3 class="card-title">"📊 " {move || ctx.strings().recent_activity}</h3>
                    <div class="activity-list">
                        {records().iter().take(RECENT_LIMIT).map(|record| view! {
                            <div class="activity-row">
                                <div class="activity-main">
                                    <div class="qr-thumb">"▦"</div>
                                    <div>
                                        <p class="strong">{record.name.clone()}</p>
                                        <p class="muted small">
                                            {format!("{} • {} scans", record.kind.badge(), record.scans)}
                                        </p>
                                    </div>
                                </div>
                                <StatusBadge status=record.status />
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="side-cards">
                    <div class=card>
                        <h3 class="card-title">{move || ctx.strings().quick_create}</h3>
                        <button class="btn btn-primary full" on:click=move |_| ctx.navigate(Tab::CreateQr)>
                            "+ " {move || ctx.strings().create_qr}
                        </button>
                        <button class="btn btn-outline full">"🔍 Browse Templates"</button>
                    </div>

                    <div class=card>
                        <h3 class="card-title">{move || ctx.strings().subscription_status}</h3>
                        <div class="row-between">
                            <span class="small">"Plan"</span>
                            <span class="badge">{config.plan_name.clone()}</span>
                        </div>
                        <div class="row-between">
                            <span class="small">"QR Codes"</span>
                            <span class="small strong">{format!("{}/{}", stats.total_codes, config.qr_quota)}</span>
                        </div>
                        <div class="progress">
                            <div class="progress-fill" style=format!("width: {}%", quota_percent)></div>
                        </div>
                        <button class="btn btn-outline btn-sm full">"Upgrade Plan"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
