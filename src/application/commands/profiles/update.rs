use super::ProfileCommandService;
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        account::AccountId,
        profile::{Bio, ProfileUpdate, SiteUrl, Tag},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub account_id: i64,
    pub bio: Option<String>,
    /// `Some(None)` or `Some(Some(""))` clears the site.
    pub site: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub links: Option<String>,
}

impl ProfileCommandService {
    pub async fn update_profile(
        &self,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let account_id = AccountId::new(command.account_id)?;
        let update = self.build_update(account_id, command)?;
        if update.is_empty() {
            return Err(ApplicationError::validation("no fields provided for update"));
        }

        self.load_profile(account_id).await?;
        let profile = self.profile_repo.update(update).await?;
        Ok(profile.into())
    }

    fn build_update(
        &self,
        account_id: AccountId,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileUpdate> {
        let mut update = ProfileUpdate::new(account_id, self.clock.now());

        if let Some(bio) = command.bio {
            update = update.with_bio(Bio::new(bio)?);
        }
        if let Some(site) = command.site {
            let site = match site.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(raw) => Some(SiteUrl::parse(raw)?),
            };
            update = update.with_site(site);
        }
        if let Some(tags) = command.tags {
            let tags = tags
                .into_iter()
                .map(Tag::new)
                .collect::<Result<Vec<_>, _>>()?;
            update = update.with_tags(tags);
        }
        if let Some(links) = command.links {
            update = update.with_links(links);
        }

        Ok(update)
    }
}
