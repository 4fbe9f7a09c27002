//! Preview Panel Component
//!
//! Decorative dot grid in the chosen colours, redrawn on every change.

use leptos::prelude::*;

use crate::form::QrForm;
use crate::preview::{cell_color, sample_cells};

#[component]
pub fn PreviewPanel(form: ReadSignal<QrForm>) -> impl IntoView {
    let background = move || format!("background-color: {}", form.with(|f| f.colors.background.clone()));

    view! {
        <div class="preview-frame">
            <div class="preview-code" style=background>
                <div class="preview-grid">
                    {move || {
                        let foreground = form.with(|f| f.colors.foreground.clone());
                        sample_cells(js_sys::Math::random)
                            .into_iter()
                            .map(|filled| {
                                let style = format!("background-color: {}", cell_color(filled, &foreground));
                                view! { <div class="preview-cell" style=style></div> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            <p class="muted small">"QR Code Preview"</p>
        </div>
        <div class="preview-actions">
            <button class="btn btn-primary full">"⬇ Download QR"</button>
            <button class="btn btn-outline full">"👁 Preview"</button>
        </div>
    }
}
