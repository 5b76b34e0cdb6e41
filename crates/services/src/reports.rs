//! Read-only reporting fetches.
//!
//! Reports are heavier than the CRUD listings and get the long timeout.

use models::envelope;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::http::HttpClient;

/// Daily sales summary row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySummary {
    #[serde(default, rename = "totalVentas")]
    pub total_sales: f64,
    #[serde(default, rename = "cantidadTrabajos")]
    pub job_count: i64,
    #[serde(default, rename = "clientesNuevos")]
    pub new_clients: i64,
}

/// One row of the top-products report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopProductRow {
    #[serde(default, rename = "productoId")]
    pub product_id: i64,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub cantidad: i64,
}

#[derive(Clone)]
pub struct ReportsService {
    http: HttpClient,
}

impl ReportsService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Today's summary; `None` on any failure.
    pub async fn daily_summary(&self) -> Option<DailySummary> {
        let body = match self.http.get_json_heavy("/reportes/resumen-diario", &[]).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "daily summary fetch failed");
                return None;
            }
        };
        let candidate = body.get("data").cloned().unwrap_or(body);
        serde_json::from_value(candidate).ok()
    }

    /// Best-selling products; `[]` on any failure.
    pub async fn top_products(&self, limit: u32) -> Vec<TopProductRow> {
        let params = [("limit", limit.to_string())];
        let body = match self
            .http
            .get_json_heavy("/reportes/productos-mas-vendidos", &params)
            .await
        {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "top products fetch failed");
                return Vec::new();
            }
        };
        envelope::extract_items(&body)
            .into_iter()
            .filter_map(|item| serde_json::from_value::<TopProductRow>(item).ok())
            .collect()
    }
}
