mod register;
mod service;
mod update;

pub use register::RegisterAccountCommand;
pub use service::AccountCommandService;
pub use update::UpdateAccountCommand;
