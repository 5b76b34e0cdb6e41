//! User administration models.

use serde::{Deserialize, Serialize};

use crate::{listing::ListRow, role::Role};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form role claim; normalized through `Role::from_claim`.
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUi {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

impl From<UserDto> for UserUi {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            username: dto.username.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            role: Role::from_claim(dto.rol.as_deref().unwrap_or_default()),
            active: dto.activo.unwrap_or(true),
        }
    }
}

impl ListRow for UserUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.username, &self.name, &self.email]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub activo: bool,
}
