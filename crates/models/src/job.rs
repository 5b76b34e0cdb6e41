//! Job (sale) models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::listing::ListRow;

/// Job lifecycle status as reported by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum JobStatus {
    #[default]
    Pendiente,
    EnProceso,
    Finalizado,
    Cancelado,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "clienteId")]
    pub cliente_id: Option<i64>,
    #[serde(default, rename = "clienteNombre")]
    pub cliente_nombre: Option<String>,
    #[serde(default)]
    pub fecha: Option<NaiveDate>,
    #[serde(default, alias = "descrpcion")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub estado: Option<JobStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUi {
    pub id: i64,
    pub client_id: Option<i64>,
    pub client_name: String,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub total: f64,
    pub status: JobStatus,
}

impl From<JobDto> for JobUi {
    fn from(dto: JobDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            client_id: dto.cliente_id,
            client_name: dto.cliente_nombre.unwrap_or_default(),
            date: dto.fecha,
            description: dto.descripcion.unwrap_or_default(),
            total: dto.total.unwrap_or_default(),
            status: dto.estado.unwrap_or_default(),
        }
    }
}

impl ListRow for JobUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.client_name, &self.description]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct JobPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "clienteId", skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    pub descripcion: String,
    pub total: f64,
    pub estado: JobStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_defaults_to_pendiente_via_option() {
        let dto: JobDto = serde_json::from_value(serde_json::json!({"id": 1})).unwrap();
        assert_eq!(JobUi::from(dto).status, JobStatus::Pendiente);
    }
}
