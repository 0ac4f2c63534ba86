mod provisioner;
mod slug;

pub use provisioner::ProfileProvisioner;
pub use slug::ProfileSlugService;
