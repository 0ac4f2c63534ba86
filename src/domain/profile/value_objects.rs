// src/domain/profile/value_objects.rs
use crate::domain::account::AccountId;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;

/// Slugs that would shadow application routes.
pub const RESERVED_SLUGS: [&str; 3] = ["add", "edit", "remove"];

pub const MAX_BIO_LENGTH: usize = 210;
pub const MAX_TAG_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(pub i64);

impl ProfileId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("profile id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProfileId> for i64 {
    fn from(value: ProfileId) -> Self {
        value.0
    }
}

/// URL-safe profile identifier. The empty string is a legal (if unlucky) slug:
/// it is what a name without any sluggable characters normalizes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileSlug(String);

impl ProfileSlug {
    pub const MAX_LEN: usize = 128;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        if value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(DomainError::Validation(format!(
                "slug '{value}' contains characters that are not URL-safe"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_SLUGS.contains(&self.0.as_str())
    }
}

impl fmt::Display for ProfileSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ProfileSlug> for String {
    fn from(value: ProfileSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bio(String);

impl Bio {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_BIO_LENGTH {
            return Err(DomainError::Validation(format!(
                "bio must be at most {MAX_BIO_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Bio> for String {
    fn from(value: Bio) -> Self {
        value.0
    }
}

/// Absolute http(s) link to a personal site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(Url);

impl SiteUrl {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let url = Url::parse(value.trim())
            .map_err(|err| DomainError::Validation(format!("invalid site url: {err}")))?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(DomainError::Validation(format!(
                "site url scheme must be http or https, got '{other}'"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_TAG_LENGTH {
            return Err(DomainError::Validation(format!(
                "tag must be at most {MAX_TAG_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

/// Storage location of an uploaded avatar, relative to the media root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPath(String);

impl PhotoPath {
    pub fn for_upload(account_id: AccountId, filename: &str) -> DomainResult<Self> {
        if filename.is_empty() || filename == "." || filename == ".." {
            return Err(DomainError::Validation(
                "upload filename cannot be empty".into(),
            ));
        }
        if filename.contains(['/', '\\']) {
            return Err(DomainError::Validation(
                "upload filename cannot contain path separators".into(),
            ));
        }
        Ok(Self(user_avatar_path(account_id, filename)))
    }

    /// Wraps a path that was already persisted.
    pub fn from_stored(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("photo path cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhotoPath> for String {
    fn from(value: PhotoPath) -> Self {
        value.0
    }
}

/// `user_<account_id>/<filename>`, relative to wherever media is stored.
pub fn user_avatar_path(account_id: AccountId, filename: &str) -> String {
    format!("user_{account_id}/{filename}")
}
