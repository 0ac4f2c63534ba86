use super::AccountCommandService;
use crate::{
    application::{
        dto::RegisteredAccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountSaved, DisplayName, Email, NewAccount},
};

#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    pub display_name: String,
    pub email: String,
}

impl AccountCommandService {
    /// Creates an account and its profile in one transaction. If provisioning
    /// fails nothing is committed.
    pub async fn register(
        &self,
        command: RegisterAccountCommand,
    ) -> ApplicationResult<RegisteredAccountDto> {
        let display_name = DisplayName::new(command.display_name)?;
        let email = Email::new(command.email)?;
        self.ensure_email_available(&email, None).await?;

        let now = self.clock.now();
        let mut tx = self.account_store.begin().await?;

        let account = tx
            .insert_account(NewAccount::new(display_name, email, now))
            .await?;
        let profile = self
            .provisioner
            .on_account_saved(tx.as_mut(), &AccountSaved::created(account.id, now))
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("profile was not provisioned"))?;

        tx.commit().await?;

        tracing::info!(
            account_id = %account.id,
            profile_id = i64::from(profile.id),
            "registered account"
        );

        Ok(RegisteredAccountDto {
            account: account.into(),
            profile: profile.into(),
        })
    }
}
