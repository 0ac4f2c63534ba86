// src/domain/profile/services/provisioner.rs
use crate::domain::account::{AccountSaved, AccountTransaction};
use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::{NewProfile, Profile};

/// Keeps every account paired with exactly one profile.
///
/// Runs inside the transaction of the account write that produced the event,
/// so a failed insert takes the account down with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileProvisioner;

impl ProfileProvisioner {
    pub const fn new() -> Self {
        Self
    }

    pub async fn on_account_saved(
        &self,
        tx: &mut dyn AccountTransaction,
        event: &AccountSaved,
    ) -> DomainResult<Option<Profile>> {
        if !event.created {
            return Ok(None);
        }

        let profile = tx
            .insert_profile(NewProfile::empty(event.account_id, event.at))
            .await?;
        tracing::debug!(
            account_id = %event.account_id,
            profile_id = i64::from(profile.id),
            "provisioned profile"
        );

        Ok(Some(profile))
    }
}
