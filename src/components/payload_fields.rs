//! Payload Fields Component
//!
//! Inputs for the selected payload type, built from its field set.

use leptos::prelude::*;

use crate::form::{FieldId, FieldInput, FieldSpec, QrForm};
use crate::models::PaymentProvider;

/// Type-specific inputs, or a prompt for types without a form
#[component]
pub fn PayloadFields(form: ReadSignal<QrForm>, set_form: WriteSignal<QrForm>) -> impl IntoView {
    // Rebuild inputs only when the type changes, not on every keystroke
    let fields = Memo::new(move |_| form.with(|f| f.fields()));

    let write_field = move |field: FieldId, value: String| {
        set_form.update(|f| {
            if let Err(err) = f.set_field(field, value) {
                log::warn!("[FORM] {}", err);
            }
        });
    };

    view! {
        {move || {
            let fields = fields.get();
            if fields.is_empty() {
                view! {
                    <div class="field-placeholder">
                        <p class="muted">"Select a QR type to continue"</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="field-set">
                        {fields.iter().map(|spec| field_view(*spec, form, write_field)).collect_view()}
                    </div>
                }.into_any()
            }
        }}
    }
}

fn field_view(
    spec: FieldSpec,
    form: ReadSignal<QrForm>,
    write_field: impl Fn(FieldId, String) + Copy + Send + Sync + 'static,
) -> AnyView {
    let id = spec.id;
    let value = move || form.with(|f| f.value(id).unwrap_or_default().to_string());

    let input = match spec.input {
        FieldInput::MultiLine { rows } => view! {
            <textarea
                id=spec.html_id
                rows=rows.to_string()
                placeholder=spec.placeholder
                prop:value=value
                on:input=move |ev| write_field(id, event_target_value(&ev))
            ></textarea>
        }.into_any(),
        FieldInput::Provider => view! {
            <select
                id=spec.html_id
                prop:value=value
                on:change=move |ev| write_field(id, event_target_value(&ev))
            >
                {PaymentProvider::ALL.into_iter().map(|provider| view! {
                    <option value=provider.id()>{provider.label()}</option>
                }).collect_view()}
            </select>
        }.into_any(),
        FieldInput::Line | FieldInput::Email | FieldInput::Number => {
            let input_type = match spec.input {
                FieldInput::Email => "email",
                FieldInput::Number => "number",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=spec.html_id
                    placeholder=spec.placeholder
                    prop:value=value
                    on:input=move |ev| write_field(id, event_target_value(&ev))
                />
            }.into_any()
        }
    };

    view! {
        <div class=if spec.half_width { "field half" } else { "field" }>
            <label for=spec.html_id>{spec.label}</label>
            {input}
        </div>
    }.into_any()
}
