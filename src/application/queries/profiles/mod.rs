mod get;
mod list;
mod service;

pub use list::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use service::ProfileQueryService;
