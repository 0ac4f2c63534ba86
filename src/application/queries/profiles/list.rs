use super::ProfileQueryService;
use crate::application::{dto::ProfileDto, error::ApplicationResult};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

impl ProfileQueryService {
    /// Newest profiles first. `limit` is clamped to `1..=MAX_PAGE_SIZE`.
    pub async fn list(&self, limit: Option<u32>) -> ApplicationResult<Vec<ProfileDto>> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let profiles = self.profile_repo.list(limit).await?;
        Ok(profiles.into_iter().map(ProfileDto::from).collect())
    }

    pub async fn latest(&self) -> ApplicationResult<Option<ProfileDto>> {
        Ok(self.profile_repo.latest().await?.map(ProfileDto::from))
    }
}
