//! View-model and wire types shared by the Inventra client.
//!
//! Nothing here owns persistent data: every entity struct is a transient
//! projection of a backend DTO, alive only for the duration of a page.

pub mod category;
pub mod client;
pub mod envelope;
pub mod group;
pub mod job;
pub mod listing;
pub mod patient;
pub mod payment_method;
pub mod product;
pub mod role;
pub mod session;
pub mod user;

pub use envelope::{FieldError, MutationOutcome};
pub use listing::ListRow;
pub use role::Role;
pub use session::Session;
