use super::ProfileQueryService;
use crate::{
    application::{
        dto::ProfileCardDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountId,
        profile::{Profile, ProfileSlug},
    },
};

impl ProfileQueryService {
    pub async fn get_by_slug(&self, slug: &str) -> ApplicationResult<ProfileCardDto> {
        let slug = ProfileSlug::new(slug)?;
        let profile = self
            .profile_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
        self.card_for(profile).await
    }

    pub async fn get_by_account(&self, account_id: i64) -> ApplicationResult<ProfileCardDto> {
        let account_id = AccountId::new(account_id)?;
        let profile = self
            .profile_repo
            .find_by_account(account_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
        self.card_for(profile).await
    }

    async fn card_for(&self, profile: Profile) -> ApplicationResult<ProfileCardDto> {
        // The foreign key makes a missing owner an integrity problem, not a 404.
        let account = self
            .account_repo
            .find_by_id(profile.account_id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("profile has no owning account"))?;
        Ok(ProfileCardDto::from_parts(account, profile))
    }
}
