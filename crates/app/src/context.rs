//! Application-wide wiring: the stores and services every page receives.
//!
//! There is no DI container; pages get what they need by reference from
//! this one struct, constructed once at startup.

use models::Role;
use services::{
    HttpClient, ServiceError,
    auth::AuthService,
    config_store::ConfigStore,
    reports::ReportsService,
    session_store::SessionStore,
    storage::LocalStorage,
};

pub struct AppContext {
    pub storage: LocalStorage,
    pub session: SessionStore,
    pub config: ConfigStore,
    pub http: HttpClient,
    pub auth: AuthService,
    pub reports: ReportsService,
}

impl AppContext {
    /// Full startup: open storage, hydrate the session, fetch the config
    /// document (falling back to empty), then build the HTTP stack.
    pub async fn bootstrap(origin: &str) -> Result<Self, ServiceError> {
        let storage = LocalStorage::open_default();
        let session = SessionStore::hydrate(storage.clone());
        let config = ConfigStore::load(origin).await;
        Self::assemble(storage, session, config)
    }

    /// Build without touching the network; used by tests and tooling.
    pub fn offline(storage: LocalStorage) -> Result<Self, ServiceError> {
        let session = SessionStore::hydrate(storage.clone());
        Self::assemble(storage, session, ConfigStore::empty())
    }

    fn assemble(
        storage: LocalStorage,
        session: SessionStore,
        config: ConfigStore,
    ) -> Result<Self, ServiceError> {
        let http = HttpClient::new(config.api_base_url(), session.clone())?;
        let auth = AuthService::new(http.clone(), session.clone());
        let reports = ReportsService::new(http.clone());
        Ok(Self {
            storage,
            session,
            config,
            http,
            auth,
            reports,
        })
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }
}
