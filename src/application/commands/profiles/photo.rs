use super::ProfileCommandService;
use crate::{
    application::{dto::ProfileDto, error::ApplicationResult},
    domain::{
        account::AccountId,
        profile::{PhotoPath, ProfileUpdate},
    },
};

#[derive(Debug, Clone)]
pub struct SetPhotoCommand {
    pub account_id: i64,
    /// Name of the uploaded file, without any directory component.
    pub filename: String,
}

impl ProfileCommandService {
    /// Records where the avatar upload is stored. Writing the bytes is up to
    /// the storage backend.
    pub async fn set_photo(&self, command: SetPhotoCommand) -> ApplicationResult<ProfileDto> {
        let account_id = AccountId::new(command.account_id)?;
        let photo = PhotoPath::for_upload(account_id, &command.filename)?;

        self.load_profile(account_id).await?;
        let update = ProfileUpdate::new(account_id, self.clock.now()).with_photo(Some(photo));
        let profile = self.profile_repo.update(update).await?;
        Ok(profile.into())
    }

    pub async fn clear_photo(&self, account_id: i64) -> ApplicationResult<ProfileDto> {
        let account_id = AccountId::new(account_id)?;

        self.load_profile(account_id).await?;
        let update = ProfileUpdate::new(account_id, self.clock.now()).with_photo(None);
        let profile = self.profile_repo.update(update).await?;
        Ok(profile.into())
    }
}
