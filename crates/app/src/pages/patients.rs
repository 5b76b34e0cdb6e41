//! Patients page wiring.

use std::time::Duration;

use models::patient::PatientUi;
use services::resources::{self, PatientsService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_millis(5500);

pub const FORM_FIELDS: [&str; 6] = [
    "nombre",
    "apellido",
    "documento",
    "telefono",
    "fechaNacimiento",
    "notas",
];

pub fn list_page(ctx: &AppContext) -> ListPage<PatientUi, PatientsService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        ..Default::default()
    };
    ListPage::new(resources::patients(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
