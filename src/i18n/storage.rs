use log::warn;
use web_sys::{window, Storage};

/// Durable slot holding the selected language code.
pub trait LanguageStore {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str);
}

/// `window.localStorage` under a fixed key. Missing storage (private mode,
/// sandboxed iframes) behaves as an empty slot.
pub struct LocalStore {
    key: &'static str,
}

impl LocalStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl LanguageStore for LocalStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(self.key).ok())
            .flatten()
    }

    fn save(&self, code: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, code).is_err() {
                    warn!("could not persist {} under {}", code, self.key);
                }
            }
            None => warn!("local storage unavailable, {} not persisted", code),
        }
    }
}
