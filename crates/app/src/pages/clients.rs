//! Clients page wiring.

use std::time::Duration;

use models::client::ClientUi;
use services::resources::{self, ClientsService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

pub const FORM_FIELDS: [&str; 6] = [
    "nombre",
    "apellido",
    "documento",
    "telefono",
    "email",
    "direccion",
];

pub fn list_page(ctx: &AppContext) -> ListPage<ClientUi, ClientsService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        ..Default::default()
    };
    ListPage::new(resources::clients(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
