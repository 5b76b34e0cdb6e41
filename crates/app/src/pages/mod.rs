//! Entity page wiring.
//!
//! Each module instantiates the shared list/form pattern with its
//! entity-specific configuration: endpoint service, undo window, delete
//! gate and form field names. The behavior itself lives in
//! `crate::list_page` and `crate::form_page`.

pub mod categories;
pub mod clients;
pub mod groups;
pub mod jobs;
pub mod patients;
pub mod payment_methods;
pub mod products;
pub mod users;

#[cfg(test)]
mod tests {
    use services::storage::LocalStorage;

    use crate::AppContext;

    #[test]
    fn every_entity_page_wires_up() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::offline(LocalStorage::open(dir.path().join("storage.json"))).unwrap();
        let _ = super::products::list_page(&ctx);
        let _ = super::categories::list_page(&ctx);
        let _ = super::clients::list_page(&ctx);
        let _ = super::patients::list_page(&ctx);
        let _ = super::jobs::list_page(&ctx);
        let _ = super::users::list_page(&ctx);
        let _ = super::groups::list_page(&ctx);
        let _ = super::payment_methods::list_page(&ctx);
        let _ = super::products::form_page();
        let _ = super::jobs::form_page();
    }
}
