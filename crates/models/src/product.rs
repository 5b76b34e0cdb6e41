//! Product catalog models.

use serde::{Deserialize, Serialize};

use crate::listing::ListRow;

/// Product as the backend sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub codigo: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    /// Some endpoints still send the misspelled `descrpcion` key.
    #[serde(default, alias = "descrpcion")]
    pub descripcion: Option<String>,
    #[serde(default, rename = "categoriaId")]
    pub categoria_id: Option<i64>,
    #[serde(default, rename = "categoriaNombre")]
    pub categoria_nombre: Option<String>,
    #[serde(default, rename = "precioVenta")]
    pub precio_venta: Option<f64>,
    #[serde(default, rename = "precioCosto")]
    pub precio_costo: Option<f64>,
    #[serde(default, rename = "stockActual")]
    pub stock_actual: Option<i64>,
    #[serde(default, rename = "stockMinimo")]
    pub stock_minimo: Option<i64>,
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Denormalized product row as the pages display it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUi {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub category_name: String,
    pub sale_price: f64,
    pub cost_price: f64,
    pub stock: i64,
    pub min_stock: i64,
    pub active: bool,
}

impl From<ProductDto> for ProductUi {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            code: dto.codigo.unwrap_or_default(),
            name: dto.nombre.unwrap_or_default(),
            description: dto.descripcion.unwrap_or_default(),
            category_id: dto.categoria_id,
            category_name: dto.categoria_nombre.unwrap_or_default(),
            sale_price: dto.precio_venta.unwrap_or_default(),
            cost_price: dto.precio_costo.unwrap_or_default(),
            stock: dto.stock_actual.unwrap_or_default(),
            min_stock: dto.stock_minimo.unwrap_or_default(),
            active: dto.activo.unwrap_or(true),
        }
    }
}

impl ListRow for ProductUi {
    fn id(&self) -> i64 {
        self.id
    }

    fn haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.code]
    }
}

/// Create/update payload, serialized with the backend's field names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: String,
    #[serde(rename = "categoriaId", skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(rename = "precioVenta")]
    pub precio_venta: f64,
    #[serde(rename = "precioCosto")]
    pub precio_costo: f64,
    #[serde(rename = "stockActual")]
    pub stock_actual: i64,
    #[serde(rename = "stockMinimo")]
    pub stock_minimo: i64,
    pub activo: bool,
}
