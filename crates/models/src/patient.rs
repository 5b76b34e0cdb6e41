//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::listing::ListRow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub documento: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default, rename = "fechaNacimiento")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default)]
    pub notas: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientUi {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub document: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub notes: String,
}

impl From<PatientDto> for PatientUi {
    fn from(dto: PatientDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            last_name: dto.apellido.unwrap_or_default(),
            document: dto.documento.unwrap_or_default(),
            phone: dto.telefono.unwrap_or_default(),
            birth_date: dto.fecha_nacimiento,
            notes: dto.notas.unwrap_or_default(),
        }
    }
}

impl ListRow for PatientUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.last_name, &self.document]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub telefono: String,
    #[serde(rename = "fechaNacimiento", skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<NaiveDate>,
    pub notas: String,
}
