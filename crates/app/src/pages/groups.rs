//! Groups page wiring.

use std::time::Duration;

use models::{Role, group::GroupUi};
use services::resources::{self, GroupsService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_secs(4);

pub const FORM_FIELDS: [&str; 2] = ["nombre", "descripcion"];

pub fn list_page(ctx: &AppContext) -> ListPage<GroupUi, GroupsService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        delete_role: Some(Role::Admin),
        ..Default::default()
    };
    ListPage::new(resources::groups(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
