use std::sync::Arc;

use crate::domain::{account::AccountRepository, profile::ProfileRepository};

pub struct ProfileQueryService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) account_repo: Arc<dyn AccountRepository>,
}

impl ProfileQueryService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        account_repo: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            profile_repo,
            account_repo,
        }
    }
}
