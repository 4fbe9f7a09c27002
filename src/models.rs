//! Frontend Models
//!
//! QR records shown on the dashboard and the fixed payload type catalogue.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UiError;

/// Category of data a QR code carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    #[default]
    Url,
    Text,
    VCard,
    Image,
    File,
    Payment,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 6] = [
        PayloadKind::Url,
        PayloadKind::Text,
        PayloadKind::VCard,
        PayloadKind::Image,
        PayloadKind::File,
        PayloadKind::Payment,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PayloadKind::Url => "url",
            PayloadKind::Text => "text",
            PayloadKind::VCard => "vcard",
            PayloadKind::Image => "image",
            PayloadKind::File => "file",
            PayloadKind::Payment => "payment",
        }
    }

    /// Short name used in badges and tables
    pub fn badge(&self) -> &'static str {
        match self {
            PayloadKind::Url => "URL",
            PayloadKind::Text => "Text",
            PayloadKind::VCard => "vCard",
            PayloadKind::Image => "Image",
            PayloadKind::File => "File",
            PayloadKind::Payment => "Payment",
        }
    }

    pub fn option(&self) -> &'static PayloadTypeOption {
        // Catalogue order matches ALL
        &PAYLOAD_TYPES[*self as usize]
    }
}

/// Entry in the type selector grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadTypeOption {
    pub kind: PayloadKind,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Payload type catalogue
pub static PAYLOAD_TYPES: [PayloadTypeOption; 6] = [
    PayloadTypeOption { kind: PayloadKind::Url, label: "URL/Website", description: "Link to website or URL", icon: "🔗" },
    PayloadTypeOption { kind: PayloadKind::Text, label: "Plain Text", description: "Simple text message", icon: "📝" },
    PayloadTypeOption { kind: PayloadKind::VCard, label: "vCard/Contact", description: "Contact information", icon: "👤" },
    PayloadTypeOption { kind: PayloadKind::Image, label: "Image", description: "Upload and share image", icon: "🖼" },
    PayloadTypeOption { kind: PayloadKind::File, label: "File", description: "Share any file", icon: "📄" },
    PayloadTypeOption { kind: PayloadKind::Payment, label: "Payment", description: "Payment QR for bKash/Nagad", icon: "💳" },
];

/// Whether a QR code currently resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrStatus {
    Active,
    Paused,
}

impl QrStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, QrStatus::Active)
    }
}

/// A generated QR code as listed on the dashboard (read-only sample data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrRecord {
    pub id: String,
    pub name: String,
    pub kind: PayloadKind,
    pub scans: u64,
    pub status: QrStatus,
    /// Creation date, `YYYY-MM-DD`
    pub created: String,
    #[serde(default)]
    pub is_dynamic: bool,
}

/// Mobile wallet providers offered by the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentProvider {
    #[default]
    Bkash,
    Rocket,
    Nagad,
    Upay,
}

impl PaymentProvider {
    pub const ALL: [PaymentProvider; 4] = [
        PaymentProvider::Bkash,
        PaymentProvider::Rocket,
        PaymentProvider::Nagad,
        PaymentProvider::Upay,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PaymentProvider::Bkash => "bkash",
            PaymentProvider::Rocket => "rocket",
            PaymentProvider::Nagad => "nagad",
            PaymentProvider::Upay => "upay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentProvider::Bkash => "bKash",
            PaymentProvider::Rocket => "Rocket",
            PaymentProvider::Nagad => "Nagad",
            PaymentProvider::Upay => "Upay",
        }
    }
}

impl FromStr for PaymentProvider {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentProvider::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UiError::UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_matches_kinds() {
        for kind in PayloadKind::ALL {
            assert_eq!(kind.option().kind, kind);
        }
    }

    #[test]
    fn test_parse_provider() {
        assert_eq!("nagad".parse::<PaymentProvider>(), Ok(PaymentProvider::Nagad));
        assert!("paypal".parse::<PaymentProvider>().is_err());
    }

    #[test]
    fn test_record_deserializes() {
        let json = r#"{"id":"9","name":"Menu","kind":"vcard","scans":12,"status":"paused","created":"2024-02-01"}"#;
        let record: QrRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, PayloadKind::VCard);
        assert_eq!(record.status, QrStatus::Paused);
        assert!(!record.is_dynamic);
    }
}
