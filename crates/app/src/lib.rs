//! Page behavior for the Inventra client: listing state machines, forms,
//! navigation guards and the timers that drive debounce and undo windows.

pub mod context;
pub mod form_page;
pub mod list_page;
pub mod pages;
pub mod router;
pub mod timer;

pub use context::AppContext;
pub use form_page::{FormPage, SubmitOutcome};
pub use list_page::{ListConfig, ListPage};
pub use router::{Guard, Navigation, PageId, Router};
