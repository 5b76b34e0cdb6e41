//! Client (customer) models.

use serde::{Deserialize, Serialize};

use crate::listing::ListRow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientDto {
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
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientUi {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub document: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<ClientDto> for ClientUi {
    fn from(dto: ClientDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            last_name: dto.apellido.unwrap_or_default(),
            document: dto.documento.unwrap_or_default(),
            phone: dto.telefono.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            address: dto.direccion.unwrap_or_default(),
        }
    }
}

impl ListRow for ClientUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.last_name, &self.document, &self.email]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
}
