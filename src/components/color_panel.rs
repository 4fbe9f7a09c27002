//! Color Panel Component
//!
//! Foreground and background pickers plus the preset pairs.

use leptos::prelude::*;

use crate::form::{QrForm, COLOR_PRESETS};

#[component]
pub fn ColorPanel(form: ReadSignal<QrForm>, set_form: WriteSignal<QrForm>) -> impl IntoView {
    let foreground = move || form.with(|f| f.colors.foreground.clone());
    let background = move || form.with(|f| f.colors.background.clone());
    let set_foreground = move |ev: web_sys::Event| set_form.update(|f| f.set_foreground(event_target_value(&ev)));
    let set_background = move |ev: web_sys::Event| set_form.update(|f| f.set_background(event_target_value(&ev)));

    view! {
        <div class="color-panel">
            <div class="field">
                <label for="qrColor">"QR Code Color"</label>
                <div class="color-row">
                    <input type="color" id="qrColor" class="color-swatch" prop:value=foreground on:input=set_foreground />
                    <input type="text" class="color-text" prop:value=foreground on:input=set_foreground />
                </div>
            </div>

            <div class="field">
                <label for="bgColor">"Background Color"</label>
                <div class="color-row">
                    <input type="color" id="bgColor" class="color-swatch" prop:value=background on:input=set_background />
                    <input type="text" class="color-text" prop:value=background on:input=set_background />
                </div>
            </div>

            <div class="field presets">
                <label>"Quick Color Presets"</label>
                <div class="preset-grid">
                    {COLOR_PRESETS.into_iter().map(|preset| view! {
                        <button
                            type="button"
                            class="preset-btn"
                            title=format!("{} on {}", preset.foreground, preset.background)
                            on:click=move |_| {
                                log::debug!("[FORM] preset {} / {}", preset.foreground, preset.background);
                                set_form.update(|f| f.apply_preset(&preset));
                            }
                        >
                            <span class="preset-half left" style=format!("background-color: {}", preset.foreground)></span>
                            <span class="preset-half right" style=format!("background-color: {}", preset.background)></span>
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
