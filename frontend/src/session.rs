use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::Storage;

use shared::types::Session;

use crate::error::StorageError;
use crate::utils::get_local_storage;

pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `localStorage` when the page has one, otherwise memory for this page load only.
pub enum BrowserStorage {
    Local(Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match get_local_storage() {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, session will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::default())
            }
        }
    }
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| StorageError(format!("{:?}", err))),
            BrowserStorage::Memory(memory) => memory.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) {
        match self {
            BrowserStorage::Local(storage) => {
                storage.remove_item(key).ok();
            }
            BrowserStorage::Memory(memory) => memory.remove_item(key),
        }
    }
}

/// The persisted record is the only source of "logged in" across page loads.
pub struct SessionStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&self) -> Option<Session> {
        let value = self.backend.get_item(&self.key)?;
        match serde_json::from_str::<Session>(&value) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("stored session is malformed, ignoring: {err}");
                None
            }
        }
    }

    pub fn save(&self, name: &str, passkey: &str) -> Session {
        let session = Session {
            name: name.to_string(),
            passkey: passkey.to_string(),
        };
        match serde_json::to_string(&session) {
            Ok(value) => {
                if let Err(err) = self.backend.set_item(&self.key, &value) {
                    log::warn!("session not persisted: {err}");
                }
            }
            Err(err) => log::error!("session encode: {err}"),
        }
        session
    }

    pub fn clear(&self) {
        self.backend.remove_item(&self.key);
    }
}
