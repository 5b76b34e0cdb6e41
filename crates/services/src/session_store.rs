//! Session store: bearer token, role and username.
//!
//! Constructed once at startup, hydrated from durable storage, and passed
//! by handle to every component that needs auth state.

use std::sync::{Arc, RwLock};

use models::{Role, Session};
use tracing::info;

use crate::storage::{LocalStorage, keys};

#[derive(Clone)]
pub struct SessionStore {
    storage: LocalStorage,
    session: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Build the store and hydrate it from durable storage.
    pub fn hydrate(storage: LocalStorage) -> Self {
        let session = Session {
            token: storage.get(keys::AUTH_TOKEN),
            role: storage
                .get(keys::AUTH_ROLE)
                .map(|claim| Role::from_claim(&claim)),
            username: storage.get(keys::AUTH_USERNAME),
        };
        if session.is_authenticated() {
            info!(username = ?session.username, "session restored from storage");
        }
        Self {
            storage,
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// Record a successful login. The raw role claim is normalized through
    /// `Role::from_claim`; the arbitrary backend string is never kept.
    pub fn login(&self, token: &str, role_claim: &str, username: &str) {
        let role = Role::from_claim(role_claim);
        {
            let mut session = self.session.write().unwrap();
            session.token = Some(token.to_string());
            session.role = Some(role);
            session.username = Some(username.to_string());
        }
        self.storage.set(keys::AUTH_TOKEN, token);
        self.storage.set(keys::AUTH_ROLE, &role.to_string());
        self.storage.set(keys::AUTH_USERNAME, username);
    }

    /// Clear memory and durable auth keys. The remember-username
    /// preference survives logout.
    pub fn logout(&self) {
        self.session.write().unwrap().clear();
        self.storage.remove(keys::AUTH_TOKEN);
        self.storage.remove(keys::AUTH_ROLE);
        if !self.remember_username() {
            self.storage.remove(keys::AUTH_USERNAME);
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().unwrap().token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().unwrap().role
    }

    pub fn username(&self) -> Option<String> {
        self.session.read().unwrap().username.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().unwrap().is_authenticated()
    }

    pub fn set_remember_username(&self, remember: bool) {
        self.storage
            .set(keys::REMEMBER_USERNAME, if remember { "true" } else { "false" });
    }

    pub fn remember_username(&self) -> bool {
        self.storage.get(keys::REMEMBER_USERNAME).as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("storage.json"));
        (dir, SessionStore::hydrate(storage))
    }

    #[test]
    fn login_normalizes_role_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let store = SessionStore::hydrate(LocalStorage::open(&path));
        store.login("tok-1", "ROLE_ADMINISTRADOR", "marta");
        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(Role::Admin));

        // A fresh store hydrates the same session back.
        let rehydrated = SessionStore::hydrate(LocalStorage::open(&path));
        assert_eq!(rehydrated.token().as_deref(), Some("tok-1"));
        assert_eq!(rehydrated.role(), Some(Role::Admin));
        assert_eq!(rehydrated.username().as_deref(), Some("marta"));
    }

    #[test]
    fn logout_clears_auth_but_keeps_remembered_username() {
        let (_dir, store) = store();
        store.set_remember_username(true);
        store.login("tok-1", "vendedor", "pepe");
        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(store.role(), None);
        // Username stays in storage for the login form prefill.
        assert_eq!(
            store.storage.get(keys::AUTH_USERNAME).as_deref(),
            Some("pepe")
        );
    }

    #[test]
    fn logout_without_remember_drops_username() {
        let (_dir, store) = store();
        store.login("tok-1", "vendedor", "pepe");
        store.logout();
        assert_eq!(store.storage.get(keys::AUTH_USERNAME), None);
    }
}
