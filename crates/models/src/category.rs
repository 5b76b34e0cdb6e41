//! Product category models.

use serde::{Deserialize, Serialize};

use crate::listing::ListRow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default, alias = "descrpcion")]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUi {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<CategoryDto> for CategoryUi {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            description: dto.descripcion.unwrap_or_default(),
        }
    }
}

impl ListRow for CategoryUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_description_spellings() {
        let good: CategoryDto =
            serde_json::from_value(serde_json::json!({"descripcion": "bebidas"})).unwrap();
        let bad: CategoryDto =
            serde_json::from_value(serde_json::json!({"descrpcion": "bebidas"})).unwrap();
        assert_eq!(good.descripcion, bad.descripcion);
    }
}
