use crate::domain::account::value_objects::AccountId;
use chrono::{DateTime, Utc};

/// Emitted by every account write. `created` separates a fresh insert from an
/// update of an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSaved {
    pub account_id: AccountId,
    pub created: bool,
    pub at: DateTime<Utc>,
}

impl AccountSaved {
    pub const fn created(account_id: AccountId, at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            created: true,
            at,
        }
    }

    pub const fn updated(account_id: AccountId, at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            created: false,
            at,
        }
    }
}
