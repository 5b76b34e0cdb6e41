//! Products page wiring.

use std::time::Duration;

use models::{Role, product::ProductUi};
use services::resources::{self, ProductsService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_millis(5500);

pub const FORM_FIELDS: [&str; 8] = [
    "codigo",
    "nombre",
    "descripcion",
    "categoriaId",
    "precioVenta",
    "precioCosto",
    "stockActual",
    "stockMinimo",
];

pub fn list_page(ctx: &AppContext) -> ListPage<ProductUi, ProductsService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        // Only administrators may remove catalog entries.
        delete_role: Some(Role::Admin),
        ..Default::default()
    };
    ListPage::new(resources::products(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
