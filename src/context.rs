//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{AppConfig, Theme};
use crate::i18n::{Language, Strings};
use crate::navigation::Tab;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    /// Visual variant for cards and panels
    pub theme: Theme,
}

impl AppContext {
    pub fn new(store: AppStore, theme: Theme) -> Self {
        Self { store, theme }
    }

    pub fn active_tab(&self) -> Tab {
        self.store.active_tab().get()
    }

    pub fn language(&self) -> Language {
        self.store.language().get()
    }

    /// Strings for the current language (tracks the language field)
    pub fn strings(&self) -> &'static Strings {
        self.language().strings()
    }

    /// Show a sidebar entry
    pub fn navigate(&self, tab: Tab) {
        log::debug!("[NAV] {} -> {}", self.store.active_tab().get_untracked().id(), tab.id());
        self.store.active_tab().set(tab);
    }

    /// Flip between English and Bengali
    pub fn toggle_language(&self) {
        self.store.language().update(|lang| *lang = lang.toggled());
        log::debug!("[I18N] language is now {}", self.store.language().get_untracked().id());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Get the app configuration
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::form::QrForm;
    use crate::models::PayloadKind;
    use crate::navigation::View;
    use crate::store::AppState;

    fn new_context(language: Language) -> AppContext {
        AppContext::new(Store::new(AppState::new(language)), Theme::Glass)
    }

    #[test]
    fn test_starts_on_dashboard() {
        let owner = Owner::new();
        owner.set();
        let ctx = new_context(Language::En);

        assert_eq!(ctx.active_tab(), Tab::Dashboard);
        assert_eq!(ctx.active_tab().view(), View::Summary);
        assert_eq!(ctx.language(), Language::En);
    }

    #[test]
    fn test_navigate_to_every_tab() {
        let owner = Owner::new();
        owner.set();
        let ctx = new_context(Language::En);

        for tab in Tab::ALL {
            ctx.navigate(tab);
            assert_eq!(ctx.active_tab(), tab);
        }
    }

    #[test]
    fn test_create_tab_opens_url_form() {
        let owner = Owner::new();
        owner.set();
        let ctx = new_context(Language::En);

        ctx.navigate(Tab::CreateQr);
        assert_eq!(ctx.active_tab().view(), View::CreateForm);
        assert_eq!(QrForm::default().kind(), PayloadKind::Url);
    }

    #[test]
    fn test_toggle_language_twice() {
        let owner = Owner::new();
        owner.set();
        let ctx = new_context(Language::En);

        ctx.toggle_language();
        assert_eq!(ctx.language(), Language::Bn);
        assert_eq!(ctx.strings().dashboard, "ড্যাশবোর্ড");

        ctx.toggle_language();
        assert_eq!(ctx.language(), Language::En);
        assert_eq!(ctx.strings().dashboard, "Dashboard");
    }

    #[test]
    fn test_navigation_keeps_language() {
        let owner = Owner::new();
        owner.set();
        let ctx = new_context(Language::Bn);

        ctx.navigate(Tab::Settings);
        assert_eq!(ctx.language(), Language::Bn);
        assert_eq!(ctx.active_tab(), Tab::Settings);
    }
}
