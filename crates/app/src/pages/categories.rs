//! Categories page wiring.

use std::time::Duration;

use models::category::CategoryUi;
use services::resources::{self, CategoriesService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_secs(4);

pub const FORM_FIELDS: [&str; 2] = ["nombre", "descripcion"];

pub fn list_page(ctx: &AppContext) -> ListPage<CategoryUi, CategoriesService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        ..Default::default()
    };
    ListPage::new(resources::categories(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
