use super::ProfileCommandService;
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{account::AccountId, profile::ProfileUpdate},
};

/// Allocation attempts before a slug conflict is reported to the caller.
pub const MAX_SLUG_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct AssignSlugCommand {
    pub account_id: i64,
    /// Replace a slug the profile already has.
    pub regenerate: bool,
}

impl ProfileCommandService {
    /// Derives a slug from the owner's display name and stores it.
    ///
    /// Allocation is check-then-act, so a concurrent writer can claim the same
    /// candidate first. The store's unique constraint reports that as a
    /// conflict and allocation is re-run, up to [`MAX_SLUG_ATTEMPTS`] times.
    pub async fn assign_slug(&self, command: AssignSlugCommand) -> ApplicationResult<ProfileDto> {
        let account_id = AccountId::new(command.account_id)?;
        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;

        let profile = self.load_profile(account_id).await?;
        if profile.has_slug() && !command.regenerate {
            return Ok(profile.into());
        }

        let mut attempt = 1;
        loop {
            let slug = self
                .slug_service
                .create_slug_for(account.display_name.as_str(), Some(account_id))
                .await?;
            let update = ProfileUpdate::new(account_id, self.clock.now()).with_slug(slug.clone());

            match self.profile_repo.update(update).await {
                Ok(profile) => {
                    tracing::info!(account_id = %account_id, slug = %slug, "assigned profile slug");
                    return Ok(profile.into());
                }
                Err(err) if err.is_conflict() && attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(
                        account_id = %account_id,
                        slug = %slug,
                        attempt,
                        "slug claimed concurrently, retrying"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
