//! In-memory session state.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Opaque bearer token plus the identity derived from it.
///
/// Created on successful login, persisted to durable storage, read back on
/// app start, destroyed on logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub username: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        session.token = Some(String::new());
        assert!(!session.is_authenticated());
        session.token = Some("tok".into());
        assert!(session.is_authenticated());
    }
}
