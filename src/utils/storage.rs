use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::utils::validation::Email;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read stored waitlist: {0}")]
    Read(String),
    #[error("failed to write waitlist: {0}")]
    Write(String),
    #[error("stored waitlist is not a JSON array of strings: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Registered addresses in signup order, without duplicates.
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaitlistEntries(Vec<String>);

impl WaitlistEntries {
    /// Appends `email` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, email: &Email) -> bool {
        if self.contains(email) {
            return false;
        }
        self.0.push(email.as_str().to_string());
        true
    }

    pub fn contains(&self, email: &Email) -> bool {
        self.0.iter().any(|entry| entry == email.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

pub trait WaitlistStore {
    fn load(&self) -> Result<WaitlistEntries, StorageError>;

    fn save(&self, entries: &WaitlistEntries) -> Result<(), StorageError>;

    /// Read-modify-write of the whole snapshot. Only writes when something changed.
    fn add(&self, email: &Email) -> Result<bool, StorageError> {
        let mut entries = self.load()?;
        let added = entries.insert(email);
        if added {
            self.save(&entries)?;
        }
        Ok(added)
    }
}

/// Keeps the snapshot under one `localStorage` key.
/// Concurrent tabs can overwrite each other's additions.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Fails when the browser exposes no `localStorage`. Does not read the key.
    pub fn open(key: impl Into<String>) -> Result<Self, StorageError> {
        let store = Self::new(key);
        store.storage()?;
        Ok(store)
    }

    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl WaitlistStore for LocalStorageStore {
    fn load(&self) -> Result<WaitlistEntries, StorageError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?;
        match raw {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(WaitlistEntries::default()),
        }
    }

    fn save(&self, entries: &WaitlistEntries) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Process-local store, used when the browser refuses storage access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<WaitlistEntries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> WaitlistEntries {
        self.entries.borrow().clone()
    }
}

impl WaitlistStore for MemoryStore {
    fn load(&self) -> Result<WaitlistEntries, StorageError> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &WaitlistEntries) -> Result<(), StorageError> {
        *self.entries.borrow_mut() = entries.clone();
        Ok(())
    }
}

/// Uses `primary` when it opened, otherwise a fresh [`MemoryStore`].
/// Nothing is loaded here; the snapshot is first read by `add`.
pub fn store_or_memory<S>(primary: Result<S, StorageError>) -> Rc<dyn WaitlistStore>
where
    S: WaitlistStore + 'static,
{
    match primary {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("Falling back to in-memory waitlist: {}", e);
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Holds a snapshot that never parses.
    struct CorruptStore {
        loads: Rc<Cell<usize>>,
    }

    impl WaitlistStore for CorruptStore {
        fn load(&self) -> Result<WaitlistEntries, StorageError> {
            self.loads.set(self.loads.get() + 1);
            serde_json::from_str("{").map_err(StorageError::from)
        }

        fn save(&self, _entries: &WaitlistEntries) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn email(raw: &str) -> Email {
        Email::parse(raw).unwrap()
    }

    #[test]
    fn insert_has_set_semantics() {
        let mut entries = WaitlistEntries::default();
        assert!(entries.insert(&email("a@b.co")));
        assert!(!entries.insert(&email("a@b.co")));
        assert!(entries.insert(&email("c@d.io")));
        assert_eq!(entries.iter().collect::<Vec<_>>(), vec!["a@b.co", "c@d.io"]);
    }

    #[test]
    fn snapshot_is_a_json_array() {
        let mut entries = WaitlistEntries::default();
        entries.insert(&email("a@b.co"));
        assert_eq!(serde_json::to_string(&entries).unwrap(), r#"["a@b.co"]"#);

        let parsed: WaitlistEntries = serde_json::from_str(r#"["x@y.z","a@b.co"]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains(&email("a@b.co")));
    }

    #[test]
    fn memory_store_add_is_idempotent() {
        let store = MemoryStore::new();
        assert!(store.add(&email("a@b.co")).unwrap());
        assert!(!store.add(&email("a@b.co")).unwrap());
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let err = serde_json::from_str::<WaitlistEntries>(r#"{"not":"an array"}"#)
            .map_err(StorageError::from)
            .unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn opened_store_is_kept_without_loading() {
        let loads = Rc::new(Cell::new(0));
        let store = store_or_memory(Ok(CorruptStore {
            loads: loads.clone(),
        }));
        assert_eq!(loads.get(), 0);

        let err = store.add(&email("a@b.co")).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
        assert_eq!(loads.get(), 1);
    }

    #[test]
    fn unavailable_storage_falls_back_to_memory() {
        let store = store_or_memory(Err::<CorruptStore, _>(StorageError::Unavailable));
        assert!(store.add(&email("a@b.co")).unwrap());
        assert!(!store.add(&email("a@b.co")).unwrap());
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
