//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::i18n::Language;
use crate::navigation::Tab;

/// Dashboard shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Sidebar entry currently shown
    pub active_tab: Tab,
    /// Display language of the shell
    pub language: Language,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Language::En);
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert_eq!(state.language, Language::En);
    }

    #[test]
    fn test_configured_language() {
        assert_eq!(AppState::new(Language::Bn).language, Language::Bn);
    }
}
