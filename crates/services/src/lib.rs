//! HTTP resource services and client-side stores.
//!
//! Every network call in the application goes through this crate. The
//! services normalize the backend's inconsistent response envelopes and
//! never let an error escape as a panic or a propagated exception: pages
//! only ever see sentinel values (`[]`, `None`) or a `MutationOutcome`.

pub mod auth;
pub mod config_store;
pub mod error;
pub mod gateway;
pub mod http;
pub mod reports;
pub mod resource;
pub mod resources;
pub mod session_store;
pub mod storage;

pub use error::ServiceError;
pub use gateway::{EntityGateway, SearchPage};
pub use http::HttpClient;
pub use resource::ResourceService;
