//! Login/logout against the backend.

use models::envelope;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{error::ServiceError, http::HttpClient, session_store::SessionStore};

const LOGIN_PATH: &str = "/auth/login";
const FALLBACK_LOGIN_MESSAGE: &str = "No se pudo iniciar sesión. Verifica tus credenciales.";

/// Result of a login attempt as the login page consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub ok: bool,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(http: HttpClient, session: SessionStore) -> Self {
        Self { http, session }
    }

    /// Authenticate and populate the session store. Never fails with an
    /// error; a bad outcome carries the best message the backend gave.
    pub async fn login(&self, username: &str, password: &str, remember: bool) -> LoginOutcome {
        let body = json!({ "username": username, "password": password });
        let response = match self.http.post_json(LOGIN_PATH, &body).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "login request failed");
                let message = match e {
                    ServiceError::Http { ref body, .. } => serde_json::from_str::<Value>(body)
                        .map(|parsed| envelope::extract_message(&parsed, FALLBACK_LOGIN_MESSAGE))
                        .unwrap_or_else(|_| e.user_message().to_string()),
                    _ => e.user_message().to_string(),
                };
                return LoginOutcome {
                    ok: false,
                    message: Some(message),
                };
            }
        };

        let Some(token) = extract_token(&response) else {
            return LoginOutcome {
                ok: false,
                message: Some(envelope::extract_message(&response, FALLBACK_LOGIN_MESSAGE)),
            };
        };

        let claim = extract_role_claim(&response).unwrap_or_default();
        self.session.set_remember_username(remember);
        self.session.login(&token, &claim, username);
        info!(username, "login successful");
        LoginOutcome {
            ok: true,
            message: None,
        }
    }

    pub fn logout(&self) {
        self.session.logout();
        info!("session closed");
    }
}

/// The token arrives either bare or under `data`.
fn extract_token(body: &Value) -> Option<String> {
    for candidate in [body.get("token"), body.get("data").and_then(|d| d.get("token"))] {
        if let Some(token) = candidate.and_then(Value::as_str).filter(|t| !t.is_empty()) {
            return Some(token.to_string());
        }
    }
    None
}

fn extract_role_claim(body: &Value) -> Option<String> {
    for candidate in [body.get("rol"), body.get("data").and_then(|d| d.get("rol"))] {
        if let Some(claim) = candidate.and_then(Value::as_str) {
            return Some(claim.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn token_found_bare_or_nested() {
        assert_eq!(
            extract_token(&json!({"token": "t1"})).as_deref(),
            Some("t1")
        );
        assert_eq!(
            extract_token(&json!({"data": {"token": "t2"}})).as_deref(),
            Some("t2")
        );
        assert_eq!(extract_token(&json!({"token": ""})), None);
        assert_eq!(extract_token(&json!({"message": "sin token"})), None);
    }

    #[test]
    fn role_claim_found_bare_or_nested() {
        assert_eq!(
            extract_role_claim(&json!({"rol": "ROLE_ADMIN"})).as_deref(),
            Some("ROLE_ADMIN")
        );
        assert_eq!(
            extract_role_claim(&json!({"data": {"rol": "vendedor"}})).as_deref(),
            Some("vendedor")
        );
    }

    #[tokio::test]
    async fn unreachable_backend_yields_failed_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let storage = crate::storage::LocalStorage::open(dir.path().join("s.json"));
        let session = SessionStore::hydrate(storage);
        let http = HttpClient::new("http://127.0.0.1:1", session.clone()).unwrap();
        let auth = AuthService::new(http, session.clone());
        let outcome = auth.login("marta", "secret", false).await;
        assert!(!outcome.ok);
        assert!(outcome.message.is_some());
        assert!(!session.is_authenticated());
    }
}
