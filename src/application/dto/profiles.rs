use crate::domain::{account::Account, profile::Profile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: i64,
    pub account_id: i64,
    pub slug: Option<String>,
    pub photo: Option<String>,
    pub bio: String,
    pub site: Option<String>,
    pub tags: Vec<String>,
    pub links: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into(),
            account_id: profile.account_id.into(),
            slug: profile.slug.map(String::from),
            photo: profile.photo.map(String::from),
            bio: profile.bio.into(),
            site: profile.site.map(|site| site.to_string()),
            tags: profile.tags.into_iter().map(String::from).collect(),
            links: profile.links,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// A profile together with the owner's public details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCardDto {
    pub display_name: String,
    pub email: String,
    pub profile: ProfileDto,
}

impl ProfileCardDto {
    pub fn from_parts(account: Account, profile: Profile) -> Self {
        Self {
            display_name: account.display_name.into(),
            email: account.email.into(),
            profile: profile.into(),
        }
    }
}

impl fmt::Display for ProfileCardDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.email)
    }
}
