//! Process-wide configuration, populated once at startup.
//!
//! The configuration is a single JSON document fetched from the hosting
//! origin. A failed fetch is not fatal: the app proceeds with an empty
//! object and every reader supplies its own default.

use std::{sync::Arc, time::Duration};

use serde_json::{Map, Value};
use tracing::{info, warn};

const CONFIG_PATH: &str = "/assets/app-config.json";
const FETCH_TIMEOUT: Duration = Duration::from_secs(8);
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone)]
pub struct ConfigStore {
    values: Arc<Map<String, Value>>,
}

impl ConfigStore {
    /// Fetch `<origin>/assets/app-config.json` and build the store.
    /// Any fetch or parse failure yields an empty configuration.
    pub async fn load(origin: &str) -> Self {
        let url = format!("{}{CONFIG_PATH}", origin.trim_end_matches('/'));
        let fetched = Self::fetch(&url).await;
        match fetched {
            Ok(values) => {
                info!(url = %url, keys = values.len(), "configuration loaded");
                Self {
                    values: Arc::new(values),
                }
            }
            Err(e) => {
                warn!(url = %url, error = %e, "configuration fetch failed, using empty config");
                Self::empty()
            }
        }
    }

    async fn fetch(url: &str) -> Result<Map<String, Value>, String> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| e.to_string())?;
        let body: Value = client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;
        match body {
            Value::Object(map) => Ok(map),
            other => Err(format!("expected a JSON object, got {other}")),
        }
    }

    pub fn empty() -> Self {
        Self {
            values: Arc::new(Map::new()),
        }
    }

    /// Build from an already-parsed document.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                values: Arc::new(map),
            },
            _ => Self::empty(),
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    /// API base URL, with a localhost default when absent.
    pub fn api_base_url(&self) -> String {
        self.get_str("apiBaseUrl")
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
