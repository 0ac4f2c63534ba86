mod assign_slug;
mod photo;
mod service;
mod update;

pub use assign_slug::{AssignSlugCommand, MAX_SLUG_ATTEMPTS};
pub use photo::SetPhotoCommand;
pub use service::ProfileCommandService;
pub use update::UpdateProfileCommand;
