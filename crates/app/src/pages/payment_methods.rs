//! Payment methods page wiring.

use std::time::Duration;

use models::payment_method::PaymentMethodUi;
use services::resources::{self, PaymentMethodsService};

use crate::{AppContext, FormPage, ListConfig, ListPage};

pub const UNDO_WINDOW: Duration = Duration::from_secs(5);

pub const FORM_FIELDS: [&str; 2] = ["nombre", "descripcion"];

pub fn list_page(ctx: &AppContext) -> ListPage<PaymentMethodUi, PaymentMethodsService> {
    let config = ListConfig {
        undo_window: UNDO_WINDOW,
        ..Default::default()
    };
    ListPage::new(resources::payment_methods(&ctx.http), config, ctx.role())
}

pub fn form_page() -> FormPage {
    FormPage::new(FORM_FIELDS)
}
