//! QR Creation Form Component
//!
//! Type selection, type-specific inputs, colour customization and preview.
//! State lives in a local signal and is dropped when the form unmounts.

use leptos::prelude::*;

use crate::components::{ColorPanel, PayloadFields, PreviewPanel, TypeSelector};
use crate::context::use_app_context;
use crate::form::QrForm;
use crate::models::PayloadKind;

#[component]
pub fn QrCreationForm() -> impl IntoView {
    let ctx = use_app_context();
    let card = ctx.theme.card_class();

    let (form, set_form) = signal(QrForm::default());
    let current_kind = Signal::derive(move || form.with(|f| f.kind()));

    let on_kind = Callback::new(move |kind: PayloadKind| {
        log::debug!("[FORM] type -> {}", kind.id());
        set_form.update(|f| f.select_kind(kind));
    });

    view! {
        <div class="creation-form">
            <div class="form-heading">
                <h1>"Create QR Code"</h1>
                <p class="muted">"Generate custom QR codes for various purposes"</p>
            </div>

            <div class="form-grid">
                <div class=format!("{} span-2", card)>
                    <h3 class="card-title">"1. Choose QR Code Type"</h3>
                    <TypeSelector current_kind=current_kind on_change=on_kind />
                </div>

                <div class=card>
                    <h3 class="card-title">"Preview"</h3>
                    <PreviewPanel form=form />
                </div>

                <div class=format!("{} span-2", card)>
                    <h3 class="card-title">
                        "2. Enter Information"
                        <span class="muted small">{move || format!(" · {}", current_kind.get().option().label)}</span>
                    </h3>
                    <PayloadFields form=form set_form=set_form />
                </div>

                <div class=card>
                    <h3 class="card-title">"3. Customize Design"</h3>
                    <ColorPanel form=form set_form=set_form />
                </div>
            </div>

            <div class="form-footer">
                <button class="btn btn-primary btn-lg">"▦ Generate QR Code"</button>
            </div>
        </div>
    }
}
