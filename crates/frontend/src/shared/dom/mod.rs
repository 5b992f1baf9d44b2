//! Seams between the dashboard core and the browser.
//!
//! Views, the router and the theme talk to these traits only, so all of them
//! run under `cargo test` with the in-memory fakes from `shared::testing`.

pub mod location;
pub mod outlet;
pub mod storage;

pub use location::BrowserLocation;
pub use outlet::BrowserOutlet;
pub use storage::BrowserStorage;

pub type ChangeHandler = Box<dyn Fn(String)>;
pub type ClickHandler = Box<dyn Fn()>;

/// The content area views render into.
pub trait Outlet {
    /// Replaces the whole content. Handlers bound to the previous content are released.
    fn set_html(&self, html: &str);
    fn clear(&self);
    /// Calls `handler` with the element's new value on every `change` event.
    fn on_change(&self, element_id: &str, handler: ChangeHandler);
    fn on_click(&self, element_id: &str, handler: ClickHandler);
}

/// Fragment part of the page URL.
pub trait HashLocation {
    /// Current hash including the leading `#`, percent-decoded. Empty when unset.
    fn hash(&self) -> String;
    fn set_hash(&self, hash: &str);
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
