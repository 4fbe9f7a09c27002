//! Navigation
//!
//! Sidebar tabs and the view each one shows.

use crate::i18n::Strings;

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    MyQrCodes,
    Analytics,
    CreateQr,
    Templates,
    Settings,
}

/// What the main content area renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Summary,
    Listing,
    CreateForm,
    ComingSoon,
}

impl Tab {
    /// Sidebar order
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::MyQrCodes,
        Tab::Analytics,
        Tab::CreateQr,
        Tab::Templates,
        Tab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::MyQrCodes => "myQRCodes",
            Tab::Analytics => "analytics",
            Tab::CreateQr => "createQR",
            Tab::Templates => "templates",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self, strings: &Strings) -> &'static str {
        match self {
            Tab::Dashboard => strings.dashboard,
            Tab::MyQrCodes => strings.my_qr_codes,
            Tab::Analytics => strings.analytics,
            Tab::CreateQr => strings.create_qr,
            Tab::Templates => strings.templates,
            Tab::Settings => strings.settings,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard | Tab::Analytics => "📊",
            Tab::MyQrCodes => "▦",
            Tab::CreateQr => "+",
            Tab::Templates | Tab::Settings => "⚙",
        }
    }

    pub fn view(&self) -> View {
        match self {
            Tab::Dashboard => View::Summary,
            Tab::MyQrCodes => View::Listing,
            Tab::CreateQr => View::CreateForm,
            Tab::Analytics | Tab::Templates | Tab::Settings => View::ComingSoon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_tab_views() {
        assert_eq!(Tab::Dashboard.view(), View::Summary);
        assert_eq!(Tab::MyQrCodes.view(), View::Listing);
        assert_eq!(Tab::CreateQr.view(), View::CreateForm);
        for tab in [Tab::Analytics, Tab::Templates, Tab::Settings] {
            assert_eq!(tab.view(), View::ComingSoon);
        }
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(Tab::CreateQr.label(Language::En.strings()), "Create QR Code");
        assert_eq!(Tab::CreateQr.label(Language::Bn.strings()), "QR কোড তৈরি করুন");
    }
}
