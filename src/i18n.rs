//! Localization
//!
//! English and Bengali string tables for the dashboard shell.

use serde::{Deserialize, Serialize};

/// Display language of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub fn id(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        }
    }

    /// Label on the toggle button: names the language a press switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "বাং",
            Language::Bn => "EN",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Bn => &BN,
        }
    }
}

/// Translated shell strings
#[derive(Debug)]
pub struct Strings {
    pub dashboard: &'static str,
    pub my_qr_codes: &'static str,
    pub analytics: &'static str,
    pub create_qr: &'static str,
    pub templates: &'static str,
    pub settings: &'static str,
    pub total_qr_codes: &'static str,
    pub total_scans: &'static str,
    pub active_qrs: &'static str,
    pub recent_activity: &'static str,
    pub quick_create: &'static str,
    pub subscription_status: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub scans: &'static str,
    pub status: &'static str,
    pub actions: &'static str,
    pub active: &'static str,
    pub paused: &'static str,
}

pub static EN: Strings = Strings {
    dashboard: "Dashboard",
    my_qr_codes: "My QR Codes",
    analytics: "Analytics",
    create_qr: "Create QR Code",
    templates: "Templates",
    settings: "Settings",
    total_qr_codes: "Total QR Codes",
    total_scans: "Total Scans",
    active_qrs: "Active QRs",
    recent_activity: "Recent Activity",
    quick_create: "Quick Create QR",
    subscription_status: "Subscription Status",
    name: "Name",
    kind: "Type",
    scans: "Scans",
    status: "Status",
    actions: "Actions",
    active: "Active",
    paused: "Paused",
};

pub static BN: Strings = Strings {
    dashboard: "ড্যাশবোর্ড",
    my_qr_codes: "আমার QR কোড",
    analytics: "অ্যানালিটিক্স",
    create_qr: "QR কোড তৈরি করুন",
    templates: "টেমপ্লেট",
    settings: "সেটিংস",
    total_qr_codes: "মোট QR কোড",
    total_scans: "মোট স্ক্যান",
    active_qrs: "সক্রিয় QR",
    recent_activity: "সাম্প্রতিক কার্যকলাপ",
    quick_create: "দ্রুত QR তৈরি করুন",
    subscription_status: "সাবস্ক্রিপশন স্ট্যাটাস",
    name: "নাম",
    kind: "ধরন",
    scans: "স্ক্যান",
    status: "অবস্থা",
    actions: "কার্যক্রম",
    active: "সক্রিয়",
    paused: "বিরতি",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_language() {
        for start in [Language::En, Language::Bn] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn test_each_press_flips_once() {
        let mut lang = Language::En;
        for press in 1..=5 {
            lang = lang.toggled();
            let expected = if press % 2 == 1 { Language::Bn } else { Language::En };
            assert_eq!(lang, expected);
        }
    }

    #[test]
    fn test_toggle_label_names_other_language() {
        assert_eq!(Language::En.toggle_label(), "বাং");
        assert_eq!(Language::Bn.toggle_label(), "EN");
    }

    #[test]
    fn test_tables_differ() {
        assert_eq!(Language::En.strings().dashboard, "Dashboard");
        assert_eq!(Language::Bn.strings().dashboard, "ড্যাশবোর্ড");
    }
}
