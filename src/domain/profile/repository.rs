use crate::domain::account::AccountId;
use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::{Profile, ProfileUpdate};
use crate::domain::profile::value_objects::ProfileSlug;
use async_trait::async_trait;

/// Read and update access to profiles. Profiles are only ever inserted through
/// an [`AccountTransaction`](crate::domain::account::AccountTransaction).
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn slug_exists(&self, slug: &ProfileSlug) -> DomainResult<bool>;

    async fn find_by_slug(&self, slug: &ProfileSlug) -> DomainResult<Option<Profile>>;

    async fn find_by_account(&self, account_id: AccountId) -> DomainResult<Option<Profile>>;

    /// Newest first, by id.
    async fn list(&self, limit: u32) -> DomainResult<Vec<Profile>>;

    /// Most recently created profile.
    async fn latest(&self) -> DomainResult<Option<Profile>>;

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Profile>;
}
