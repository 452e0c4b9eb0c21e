// ============================================================================
// CREDENTIAL STORE - key/value persistence for the session
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

use crate::error::AppError;
use crate::utils::constants::SESSION_KEYS;

/// Opaque string key/value store backing the session
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);

    /// Removes every session key; used on logout and on expiry
    fn clear_session(&self) {
        for key in SESSION_KEYS {
            self.remove(key);
        }
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Browser localStorage. Values are stored raw (not JSON-quoted) so they stay
/// readable from devtools.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCredentialStore;

impl LocalCredentialStore {
    /// True when the browser exposes localStorage (private mode may not)
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .is_some()
    }
}

impl CredentialStore for LocalCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Could not write '{}' to localStorage", key)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store. Used when localStorage is unavailable; the session then
/// lasts for the lifetime of the tab.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Picks localStorage when present, memory otherwise
pub fn default_store() -> Rc<dyn CredentialStore> {
    if LocalCredentialStore::is_available() {
        Rc::new(LocalCredentialStore)
    } else {
        log::warn!("⚠️ localStorage unavailable, session will not survive a reload");
        Rc::new(MemoryCredentialStore::new())
    }
}
