//! Group models.

use serde::{Deserialize, Serialize};

use crate::listing::ListRow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, alias = "descrpcion")]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupUi {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<GroupDto> for GroupUi {
    fn from(dto: GroupDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            description: dto.descripcion.unwrap_or_default(),
        }
    }
}

impl ListRow for GroupUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
}
