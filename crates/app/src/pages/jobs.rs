//! Jobs (sales) page wiring.

use std::time::Duration;

use models::job::JobUi;
use services::resources::{self, JobsService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

/// Jobs carry money; their undo window is the longest in the app.
pub const UNDO_WINDOW: Duration = Duration::from_secs(7);

pub const PAGE_SIZE: u32 = 20;

pub const FORM_FIELDS: [&str; 5] = ["clienteId", "fecha", "descripcion", "total", "estado"];

pub fn list_page(ctx: &AppContext) -> ListPage<JobUi, JobsService> {
    let config = ListConfig {
        page_size: PAGE_SIZE,
        undo_window: UNDO_WINDOW,
        ..Default::default()
    };
    ListPage::new(resources::jobs(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
