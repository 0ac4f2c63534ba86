use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    account::{AccountId, AccountRepository},
    profile::{Profile, ProfileRepository, services::ProfileSlugService},
};

pub struct ProfileCommandService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) slug_service: Arc<ProfileSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        account_repo: Arc<dyn AccountRepository>,
        slug_service: Arc<ProfileSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            profile_repo,
            account_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn load_profile(&self, account_id: AccountId) -> ApplicationResult<Profile> {
        self.profile_repo
            .find_by_account(account_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))
    }
}
