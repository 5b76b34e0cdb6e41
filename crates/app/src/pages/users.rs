//! User administration page wiring.

use std::time::Duration;

use models::{Role, user::UserUi};
use services::resources::{self, UsersService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_secs(4);

pub const FORM_FIELDS: [&str; 5] = ["username", "nombre", "email", "rol", "password"];

pub fn list_page(ctx: &AppContext) -> ListPage<UserUi, UsersService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        delete_role: Some(Role::Admin),
        ..Default::default()
    };
    ListPage::new(resources::users(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
