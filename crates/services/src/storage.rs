//! Durable client-side key/value storage.
//!
//! Stand-in for the browser's local storage: a single JSON object on disk,
//! loaded on open and written through on every mutation. Only a handful of
//! fixed keys exist; all listing data is refetched each session.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::warn;

/// Fixed storage keys.
pub mod keys {
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const AUTH_ROLE: &str = "auth_role";
    pub const AUTH_USERNAME: &str = "auth_username";
    pub const REMEMBER_USERNAME: &str = "remember_username";
    /// Per-feature onboarding flags are stored as `tour_seen:<feature>`.
    pub const TOUR_SEEN_PREFIX: &str = "tour_seen:";
}

#[derive(Clone)]
pub struct LocalStorage {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl LocalStorage {
    /// Open the store at the default user-data location.
    pub fn open_default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(base.join("inventra").join("storage.json"))
    }

    /// Open the store at an explicit path. A missing or unreadable file
    /// yields an empty store; corruption is not fatal.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "discarding unreadable storage file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            inner: Arc::new(Inner {
                path,
                data: RwLock::new(data),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.data.read().unwrap().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.inner
            .data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.save();
    }

    pub fn remove(&self, key: &str) {
        self.inner.data.write().unwrap().remove(key);
        self.save();
    }

    pub fn tour_seen(&self, feature: &str) -> bool {
        self.get(&format!("{}{feature}", keys::TOUR_SEEN_PREFIX))
            .as_deref()
            == Some("true")
    }

    pub fn mark_tour_seen(&self, feature: &str) {
        self.set(&format!("{}{feature}", keys::TOUR_SEEN_PREFIX), "true");
    }

    fn save(&self) {
        let data = self.inner.data.read().unwrap();
        if let Some(parent) = self.inner.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create storage directory");
                return;
            }
        }
        match serde_json::to_string_pretty(&*data) {
            Ok(raw) => {
                if let Err(e) = write_atomic(&self.inner.path, &raw) {
                    warn!(path = %self.inner.path.display(), error = %e, "storage write failed");
                }
            }
            Err(e) => warn!(error = %e, "storage serialization failed"),
        }
    }
}

fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStorage::open(dir.path().join("storage.json"));
        (dir, store)
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(keys::AUTH_TOKEN), None);
        store.set(keys::AUTH_TOKEN, "tok-1");
        assert_eq!(store.get(keys::AUTH_TOKEN).as_deref(), Some("tok-1"));
        store.remove(keys::AUTH_TOKEN);
        assert_eq!(store.get(keys::AUTH_TOKEN), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        LocalStorage::open(&path).set(keys::AUTH_USERNAME, "marta");
        let reopened = LocalStorage::open(&path);
        assert_eq!(reopened.get(keys::AUTH_USERNAME).as_deref(), Some("marta"));
    }

    #[test]
    fn corrupt_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        let store = LocalStorage::open(&path);
        assert_eq!(store.get(keys::AUTH_TOKEN), None);
    }

    #[test]
    fn tour_flags_are_per_feature() {
        let (_dir, store) = temp_store();
        assert!(!store.tour_seen("dashboard"));
        store.mark_tour_seen("dashboard");
        assert!(store.tour_seen("dashboard"));
        assert!(!store.tour_seen("products"));
    }
}
