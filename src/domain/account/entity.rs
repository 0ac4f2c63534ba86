// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, DisplayName, Email};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub display_name: DisplayName,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub display_name: DisplayName,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewAccount {
    pub fn new(display_name: DisplayName, email: Email, now: DateTime<Utc>) -> Self {
        Self {
            display_name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub id: AccountId,
    pub display_name: Option<DisplayName>,
    pub email: Option<Email>,
    pub updated_at: DateTime<Utc>,
}

impl AccountUpdate {
    pub fn new(id: AccountId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            display_name: None,
            email: None,
            updated_at,
        }
    }

    pub fn with_display_name(mut self, display_name: DisplayName) -> Self {
        self.display_name = Some(display_name);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.email.is_none()
    }
}
