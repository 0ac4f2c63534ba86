use crate::domain::account::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ProfileDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.into(),
            display_name: account.display_name.into(),
            email: account.email.into(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Result of a registration: the account and the profile provisioned with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredAccountDto {
    pub account: AccountDto,
    pub profile: ProfileDto,
}
