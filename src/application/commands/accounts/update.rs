use super::AccountCommandService;
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{AccountId, AccountSaved, AccountUpdate, DisplayName, Email},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateAccountCommand {
    pub id: i64,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl AccountCommandService {
    pub async fn update(&self, command: UpdateAccountCommand) -> ApplicationResult<AccountDto> {
        let id = AccountId::new(command.id)?;
        let update = self.build_update(id, command)?;
        if update.is_empty() {
            return Err(ApplicationError::validation("no fields provided for update"));
        }

        if self.account_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("account not found"));
        }
        if let Some(email) = update.email.as_ref() {
            self.ensure_email_available(email, Some(id)).await?;
        }

        let at = update.updated_at;
        let mut tx = self.account_store.begin().await?;
        let account = tx.update_account(update).await?;
        self.provisioner
            .on_account_saved(tx.as_mut(), &AccountSaved::updated(account.id, at))
            .await?;
        tx.commit().await?;

        Ok(account.into())
    }

    fn build_update(
        &self,
        id: AccountId,
        command: UpdateAccountCommand,
    ) -> ApplicationResult<AccountUpdate> {
        let mut update = AccountUpdate::new(id, self.clock.now());
        if let Some(display_name) = command.display_name {
            update = update.with_display_name(DisplayName::new(display_name)?);
        }
        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }
        Ok(update)
    }
}
