//! Light/dark theme.
//!
//! The choice is persisted in local storage under `theme`, applied as the
//! `data-theme` attribute of `<html>` and mirrored into `user.theme` of the
//! state store.

use crate::shared::dom::KeyValueStorage;
use crate::shared::state::Store;
use leptos::prelude::*;
use serde_json::Value;
use std::rc::Rc;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown names fall back to the light theme.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle button, which offers the other theme.
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "Ativar tema escuro",
            Theme::Dark => "Ativar tema claro",
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

/// Persists and applies the theme.
pub struct ThemeManager {
    storage: Rc<dyn KeyValueStorage>,
    store: Store,
    apply: Box<dyn Fn(Theme)>,
}

impl ThemeManager {
    pub fn new(storage: Rc<dyn KeyValueStorage>, store: Store, apply: Box<dyn Fn(Theme)>) -> Self {
        Self {
            storage,
            store,
            apply,
        }
    }

    /// Browser manager writing `data-theme` on the document element.
    pub fn browser(storage: Rc<dyn KeyValueStorage>, store: Store) -> Self {
        Self::new(storage, store, Box::new(apply_to_document))
    }

    pub fn saved(&self) -> Theme {
        self.storage
            .get(THEME_STORAGE_KEY)
            .map(|name| Theme::from_name(&name))
            .unwrap_or_default()
    }

    /// Applies the saved theme without writing storage back.
    pub fn restore(&self) -> Theme {
        let theme = self.saved();
        self.publish(theme);
        theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.storage.set(THEME_STORAGE_KEY, theme.as_str());
        self.publish(theme);
        log::debug!("theme set to {}", theme.as_str());
    }

    fn publish(&self, theme: Theme) {
        (self.apply)(theme);
        self.store.update("user.theme", Value::from(theme.as_str()));
    }
}

fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    match root {
        Some(root) => {
            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("could not apply theme: {:?}", err);
            }
        }
        None => log::warn!("no document element to apply the theme to"),
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    manager: StoredValue<Rc<ThemeManager>, LocalStorage>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.manager.with_value(|manager| manager.set_theme(theme));
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Restores the saved theme and provides [`ThemeContext`] to children.
#[component]
pub fn ThemeProvider(manager: StoredValue<Rc<ThemeManager>, LocalStorage>, children: Children) -> impl IntoView {
    let initial = manager.with_value(|manager| manager.restore());
    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
        manager,
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::MemoryStorage;
    use serde_json::json;
    use std::cell::RefCell;

    fn manager(storage: Rc<MemoryStorage>, store: Store) -> (ThemeManager, Rc<RefCell<Vec<Theme>>>) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = applied.clone();
        let manager = ThemeManager::new(
            storage,
            store,
            Box::new(move |theme| sink.borrow_mut().push(theme)),
        );
        (manager, applied)
    }

    #[test]
    fn defaults_to_light() {
        let store = Store::new();
        let (manager, applied) = manager(Rc::new(MemoryStorage::default()), store.clone());

        assert_eq!(manager.restore(), Theme::Light);
        assert_eq!(*applied.borrow(), vec![Theme::Light]);
        assert_eq!(store.get("user.theme"), Some(json!("light")));
    }

    #[test]
    fn set_persists_applies_and_mirrors() {
        let storage = Rc::new(MemoryStorage::default());
        let store = Store::new();
        let (manager, applied) = manager(storage.clone(), store.clone());

        manager.set_theme(Theme::Dark);

        assert_eq!(storage.get(THEME_STORAGE_KEY), Some("dark".to_string()));
        assert_eq!(*applied.borrow(), vec![Theme::Dark]);
        assert_eq!(store.get("user.theme"), Some(json!("dark")));
    }

    #[test]
    fn restore_reads_saved_choice() {
        let storage = Rc::new(MemoryStorage::default());
        storage.set(THEME_STORAGE_KEY, "dark");
        let (manager, _) = manager(storage, Store::new());
        assert_eq!(manager.restore(), Theme::Dark);
    }

    #[test]
    fn names_and_toggle() {
        assert_eq!(Theme::from_name("sepia"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
