use super::HashLocation;
use web_sys::window;

/// `window.location`.
#[derive(Clone, Copy, Default)]
pub struct BrowserLocation;

impl HashLocation for BrowserLocation {
    fn hash(&self) -> String {
        let raw = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        match urlencoding::decode(&raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw,
        }
    }

    fn set_hash(&self, hash: &str) {
        if let Some(w) = window() {
            if let Err(err) = w.location().set_hash(hash) {
                log::warn!("could not set location hash to '{}': {:?}", hash, err);
            }
        }
    }
}
