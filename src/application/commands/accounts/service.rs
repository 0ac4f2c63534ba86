use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    account::{AccountId, AccountRepository, AccountStore, Email},
    profile::services::ProfileProvisioner,
};

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) account_store: Arc<dyn AccountStore>,
    pub(super) provisioner: ProfileProvisioner,
    pub(super) clock: Arc<dyn Clock>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        account_store: Arc<dyn AccountStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            account_store,
            provisioner: ProfileProvisioner::new(),
            clock,
        }
    }

    /// Fails with a conflict when `email` belongs to an account other than `owner`.
    pub(super) async fn ensure_email_available(
        &self,
        email: &Email,
        owner: Option<AccountId>,
    ) -> ApplicationResult<()> {
        match self.account_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::conflict("email already registered"))
            }
            _ => Ok(()),
        }
    }
}
