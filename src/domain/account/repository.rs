use crate::domain::account::entity::{Account, AccountUpdate, NewAccount};
use crate::domain::account::value_objects::{AccountId, Email};
use crate::domain::errors::DomainResult;
use crate::domain::profile::{NewProfile, Profile};
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>>;
}

/// Writes that must land together: an account and the profile provisioned for it.
///
/// Dropping the transaction without calling [`AccountTransaction::commit`]
/// discards every write made through it.
#[async_trait]
pub trait AccountTransaction: Send {
    async fn insert_account(&mut self, account: NewAccount) -> DomainResult<Account>;

    async fn update_account(&mut self, update: AccountUpdate) -> DomainResult<Account>;

    async fn insert_profile(&mut self, profile: NewProfile) -> DomainResult<Profile>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn AccountTransaction>>;
}
