//! Payment method models.

use serde::{Deserialize, Serialize};

use crate::listing::ListRow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentMethodDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, alias = "descrpcion")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentMethodUi {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl From<PaymentMethodDto> for PaymentMethodUi {
    fn from(dto: PaymentMethodDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            description: dto.descripcion.unwrap_or_default(),
            active: dto.activo.unwrap_or(true),
        }
    }
}

impl ListRow for PaymentMethodUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
}
