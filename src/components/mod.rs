//! UI Components
//!
//! Leptos components for the dashboard shell and the QR creation form.

mod header;
mod sidebar;
mod stat_card;
mod status_badge;
mod summary_view;
mod listing_view;
mod coming_soon;
mod type_selector;
mod payload_fields;
mod color_panel;
mod preview_panel;
mod qr_creation_form;

pub use header::Header;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use summary_view::SummaryView;
pub use listing_view::ListingView;
pub use coming_soon::ComingSoon;
pub use type_selector::TypeSelector;
pub use payload_fields::PayloadFields;
pub use color_panel::ColorPanel;
pub use preview_panel::PreviewPanel;
pub use qr_creation_form::QrCreationForm;
