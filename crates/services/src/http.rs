//! Shared HTTP plumbing.
//!
//! One `reqwest::Client` for the whole app; the bearer token is attached
//! here and nowhere else. Calls carry a bounded timeout: 8s by default,
//! 30s for heavy endpoints (uploads, reports).

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::{error::ServiceError, session_store::SessionStore};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);
const HEAVY_TIMEOUT: Duration = Duration::from_secs(30);

/// Weight class of a call; selects the request timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallWeight {
    #[default]
    Light,
    Heavy,
}

impl CallWeight {
    fn timeout(self) -> Duration {
        match self {
            CallWeight::Light => DEFAULT_TIMEOUT,
            CallWeight::Heavy => HEAVY_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Result<Self, ServiceError> {
        let base_url = base_url.into();
        url::Url::parse(&base_url).map_err(|e| ServiceError::Transport(e.to_string()))?;
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("inventra/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ServiceError> {
        let req = self
            .request(Method::GET, path, CallWeight::Light)
            .query(query);
        self.execute(req).await
    }

    pub async fn get_json_heavy(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ServiceError> {
        let req = self
            .request(Method::GET, path, CallWeight::Heavy)
            .query(query);
        self.execute(req).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ServiceError> {
        let req = self.request(Method::POST, path, CallWeight::Light).json(body);
        self.execute(req).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ServiceError> {
        let req = self.request(Method::PUT, path, CallWeight::Light).json(body);
        self.execute(req).await
    }

    pub async fn delete_json(&self, path: &str) -> Result<Value, ServiceError> {
        let req = self.request(Method::DELETE, path, CallWeight::Light);
        self.execute(req).await
    }

    fn request(&self, method: Method, path: &str, weight: CallWeight) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.request(method, url).timeout(weight.timeout());
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Value, ServiceError> {
        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(ServiceError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            // Some mutation endpoints reply 200 with an empty body.
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ServiceError::Serde(e.to_string()))
    }
}
