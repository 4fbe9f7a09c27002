//! QR Creation Form State
//!
//! The draft is a sum type with one variant per payload kind, so text typed
//! for one kind never shows up under another. Switching kinds starts a fresh
//! draft; colours are kept across switches.

use crate::error::{UiError, UiResult};
use crate::models::{PayloadKind, PaymentProvider};

/// Every input the form can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Url,
    Message,
    FirstName,
    LastName,
    Phone,
    Email,
    Company,
    Provider,
    PaymentPhone,
    Amount,
}

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Line,
    MultiLine { rows: u32 },
    Email,
    Number,
    Provider,
}

/// Rendering descriptor for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub html_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: FieldInput,
    /// Rendered two per row
    pub half_width: bool,
}

const fn field(
    id: FieldId,
    html_id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    input: FieldInput,
) -> FieldSpec {
    FieldSpec { id, html_id, label, placeholder, input, half_width: false }
}

const URL_FIELDS: &[FieldSpec] = &[
    field(FieldId::Url, "url", "Website URL", "https://example.com", FieldInput::Line),
];

const TEXT_FIELDS: &[FieldSpec] = &[
    field(FieldId::Message, "text", "Text Message", "Enter your text message here...", FieldInput::MultiLine { rows: 4 }),
];

const VCARD_FIELDS: &[FieldSpec] = &[
    FieldSpec { half_width: true, ..field(FieldId::FirstName, "firstName", "First Name", "John", FieldInput::Line) },
    FieldSpec { half_width: true, ..field(FieldId::LastName, "lastName", "Last Name", "Doe", FieldInput::Line) },
    field(FieldId::Phone, "phone", "Phone Number", "+880 1234567890", FieldInput::Line),
    field(FieldId::Email, "email", "Email", "john@example.com", FieldInput::Email),
    field(FieldId::Company, "company", "Company", "Company Name", FieldInput::Line),
];

const PAYMENT_FIELDS: &[FieldSpec] = &[
    field(FieldId::Provider, "paymentMethod", "Payment Method", "", FieldInput::Provider),
    field(FieldId::PaymentPhone, "phoneNumber", "Phone Number", "01712345678", FieldInput::Line),
    field(FieldId::Amount, "amount", "Amount (Optional)", "0", FieldInput::Number),
];

/// Fields rendered for a payload kind; empty for kinds without a form
pub fn field_set(kind: PayloadKind) -> &'static [FieldSpec] {
    match kind {
        PayloadKind::Url => URL_FIELDS,
        PayloadKind::Text => TEXT_FIELDS,
        PayloadKind::VCard => VCARD_FIELDS,
        PayloadKind::Payment => PAYMENT_FIELDS,
        PayloadKind::Image | PayloadKind::File => &[],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCardDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    pub provider: PaymentProvider,
    pub phone: String,
    /// Free-form; not parsed
    pub amount: String,
}

/// In-progress payload for the selected kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDraft {
    Url { url: String },
    Text { message: String },
    VCard(VCardDraft),
    Image,
    File,
    Payment(PaymentDraft),
}

impl Default for FormDraft {
    fn default() -> Self {
        FormDraft::empty(PayloadKind::default())
    }
}

impl FormDraft {
    pub fn empty(kind: PayloadKind) -> Self {
        match kind {
            PayloadKind::Url => FormDraft::Url { url: String::new() },
            PayloadKind::Text => FormDraft::Text { message: String::new() },
            PayloadKind::VCard => FormDraft::VCard(VCardDraft::default()),
            PayloadKind::Image => FormDraft::Image,
            PayloadKind::File => FormDraft::File,
            PayloadKind::Payment => FormDraft::Payment(PaymentDraft::default()),
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            FormDraft::Url { .. } => PayloadKind::Url,
            FormDraft::Text { .. } => PayloadKind::Text,
            FormDraft::VCard(_) => PayloadKind::VCard,
            FormDraft::Image => PayloadKind::Image,
            FormDraft::File => PayloadKind::File,
            FormDraft::Payment(_) => PayloadKind::Payment,
        }
    }

    /// Current value of a field, `None` if this draft has no such field
    pub fn value(&self, field: FieldId) -> Option<&str> {
        let value = match (self, field) {
            (FormDraft::Url { url }, FieldId::Url) => url,
            (FormDraft::Text { message }, FieldId::Message) => message,
            (FormDraft::VCard(v), FieldId::FirstName) => &v.first_name,
            (FormDraft::VCard(v), FieldId::LastName) => &v.last_name,
            (FormDraft::VCard(v), FieldId::Phone) => &v.phone,
            (FormDraft::VCard(v), FieldId::Email) => &v.email,
            (FormDraft::VCard(v), FieldId::Company) => &v.company,
            (FormDraft::Payment(p), FieldId::Provider) => return Some(p.provider.id()),
            (FormDraft::Payment(p), FieldId::PaymentPhone) => &p.phone,
            (FormDraft::Payment(p), FieldId::Amount) => &p.amount,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Store a field value. Values are accepted as typed; only the provider
    /// id has to name a known provider.
    pub fn set(&mut self, field: FieldId, value: String) -> UiResult<()> {
        let slot = match (&mut *self, field) {
            (FormDraft::Url { url }, FieldId::Url) => url,
            (FormDraft::Text { message }, FieldId::Message) => message,
            (FormDraft::VCard(v), FieldId::FirstName) => &mut v.first_name,
            (FormDraft::VCard(v), FieldId::LastName) => &mut v.last_name,
            (FormDraft::VCard(v), FieldId::Phone) => &mut v.phone,
            (FormDraft::VCard(v), FieldId::Email) => &mut v.email,
            (FormDraft::VCard(v), FieldId::Company) => &mut v.company,
            (FormDraft::Payment(p), FieldId::Provider) => {
                p.provider = value.parse()?;
                return Ok(());
            }
            (FormDraft::Payment(p), FieldId::PaymentPhone) => &mut p.phone,
            (FormDraft::Payment(p), FieldId::Amount) => &mut p.amount,
            (draft, field) => {
                return Err(UiError::FieldNotInDraft { field, kind: draft.kind() });
            }
        };
        *slot = value;
        Ok(())
    }
}

/// Foreground / background pair for the code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub foreground: String,
    pub background: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub foreground: &'static str,
    pub background: &'static str,
}

pub const COLOR_PRESETS: [ColorPreset; 4] = [
    ColorPreset { foreground: "#000000", background: "#ffffff" },
    ColorPreset { foreground: "#006747", background: "#ffffff" },
    ColorPreset { foreground: "#ffffff", background: "#000000" },
    ColorPreset { foreground: "#DC143C", background: "#ffffff" },
];

/// Complete local state of the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrForm {
    pub draft: FormDraft,
    pub colors: ColorScheme,
}

impl QrForm {
    pub fn kind(&self) -> PayloadKind {
        self.draft.kind()
    }

    /// Switch payload kind. Re-selecting the current kind keeps the draft.
    pub fn select_kind(&mut self, kind: PayloadKind) {
        if self.draft.kind() != kind {
            self.draft = FormDraft::empty(kind);
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        field_set(self.kind())
    }

    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.draft.value(field)
    }

    pub fn set_field(&mut self, field: FieldId, value: String) -> UiResult<()> {
        self.draft.set(field, value)
    }

    pub fn set_foreground(&mut self, color: String) {
        self.colors.foreground = color;
    }

    pub fn set_background(&mut self, color: String) {
        self.colors.background = color;
    }

    pub fn apply_preset(&mut self, preset: &ColorPreset) {
        self.colors = ColorScheme {
            foreground: preset.foreground.to_string(),
            background: preset.background.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_kind_is_url() {
        let form = QrForm::default();
        assert_eq!(form.kind(), PayloadKind::Url);
        assert_eq!(form.value(FieldId::Url), Some(""));
        assert_eq!(form.colors, ColorScheme::default());
    }

    #[test]
    fn test_select_kind_renders_its_field_set() {
        let mut form = QrForm::default();
        for kind in PayloadKind::ALL {
            form.select_kind(kind);
            assert_eq!(form.kind(), kind);
            assert_eq!(form.fields(), field_set(kind));
        }
    }

    #[test]
    fn test_image_and_file_have_no_fields() {
        assert!(field_set(PayloadKind::Image).is_empty());
        assert!(field_set(PayloadKind::File).is_empty());
    }

    #[test]
    fn test_field_ids_are_owned_by_their_draft() {
        for kind in PayloadKind::ALL {
            let draft = FormDraft::empty(kind);
            for spec in field_set(kind) {
                assert!(draft.value(spec.id).is_some(), "{:?} missing on {:?}", spec.id, kind);
            }
        }
    }

    #[test]
    fn test_vcard_fields_are_bound() {
        let mut form = QrForm::default();
        form.select_kind(PayloadKind::VCard);
        form.set_field(FieldId::FirstName, "John".to_string()).unwrap();
        form.set_field(FieldId::Company, "Acme".to_string()).unwrap();

        assert_eq!(form.value(FieldId::FirstName), Some("John"));
        assert_eq!(form.value(FieldId::Company), Some("Acme"));
        assert_eq!(form.value(FieldId::LastName), Some(""));
    }

    #[test]
    fn test_text_does_not_leak_across_kinds() {
        let mut form = QrForm::default();
        form.select_kind(PayloadKind::Text);
        form.set_field(FieldId::Message, "hello".to_string()).unwrap();
        assert_eq!(form.value(FieldId::Message), Some("hello"));

        form.select_kind(PayloadKind::Url);
        assert_eq!(form.value(FieldId::Url), Some(""));
        assert_eq!(form.value(FieldId::Message), None);

        form.select_kind(PayloadKind::Text);
        assert_eq!(form.value(FieldId::Message), Some(""));
    }

    #[test]
    fn test_reselecting_kind_keeps_draft() {
        let mut form = QrForm::default();
        form.set_field(FieldId::Url, "https://example.com".to_string()).unwrap();
        form.select_kind(PayloadKind::Url);
        assert_eq!(form.value(FieldId::Url), Some("https://example.com"));
    }

    #[test]
    fn test_foreign_field_is_rejected() {
        let mut form = QrForm::default();
        let err = form.set_field(FieldId::Email, "a@b.c".to_string()).unwrap_err();
        assert_eq!(err, UiError::FieldNotInDraft { field: FieldId::Email, kind: PayloadKind::Url });
        assert_eq!(form.draft, FormDraft::empty(PayloadKind::Url));
    }

    #[test]
    fn test_payment_provider_and_amount() {
        let mut form = QrForm::default();
        form.select_kind(PayloadKind::Payment);
        assert_eq!(form.value(FieldId::Provider), Some("bkash"));

        form.set_field(FieldId::Provider, "nagad".to_string()).unwrap();
        form.set_field(FieldId::Amount, "not a number".to_string()).unwrap();
        assert_eq!(form.value(FieldId::Provider), Some("nagad"));
        assert_eq!(form.value(FieldId::Amount), Some("not a number"));

        assert!(form.set_field(FieldId::Provider, "paypal".to_string()).is_err());
        assert_eq!(form.value(FieldId::Provider), Some("nagad"));
    }

    #[test]
    fn test_preset_sets_both_colors() {
        let mut form = QrForm::default();
        form.set_foreground("not-a-color".to_string());
        for preset in &COLOR_PRESETS {
            form.apply_preset(preset);
            assert_eq!(form.colors.foreground, preset.foreground);
            assert_eq!(form.colors.background, preset.background);
        }
    }

    #[test]
    fn test_colors_survive_kind_switch() {
        let mut form = QrForm::default();
        form.set_background("#123456".to_string());
        form.select_kind(PayloadKind::Payment);
        assert_eq!(form.colors.background, "#123456");
    }
}
