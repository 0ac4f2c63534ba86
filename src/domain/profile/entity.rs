// src/domain/profile/entity.rs
use crate::domain::account::AccountId;
use crate::domain::profile::value_objects::{Bio, PhotoPath, ProfileId, ProfileSlug, SiteUrl, Tag};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub account_id: AccountId,
    /// `None` until a slug has been allocated for the profile.
    pub slug: Option<ProfileSlug>,
    pub photo: Option<PhotoPath>,
    pub bio: Bio,
    pub site: Option<SiteUrl>,
    pub tags: Vec<Tag>,
    pub links: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub const fn has_slug(&self) -> bool {
        self.slug.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub account_id: AccountId,
    pub slug: Option<ProfileSlug>,
    pub photo: Option<PhotoPath>,
    pub bio: Bio,
    pub site: Option<SiteUrl>,
    pub tags: Vec<Tag>,
    pub links: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProfile {
    /// A profile with every optional attribute left blank.
    pub fn empty(account_id: AccountId, now: DateTime<Utc>) -> Self {
        Self {
            account_id,
            slug: None,
            photo: None,
            bio: Bio::default(),
            site: None,
            tags: Vec::new(),
            links: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. `None` leaves a column untouched; for the nullable columns
/// `Some(None)` clears the value.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub account_id: AccountId,
    pub slug: Option<ProfileSlug>,
    pub photo: Option<Option<PhotoPath>>,
    pub bio: Option<Bio>,
    pub site: Option<Option<SiteUrl>>,
    pub tags: Option<Vec<Tag>>,
    pub links: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub fn new(account_id: AccountId, updated_at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            slug: None,
            photo: None,
            bio: None,
            site: None,
            tags: None,
            links: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: ProfileSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_photo(mut self, photo: Option<PhotoPath>) -> Self {
        self.photo = Some(photo);
        self
    }

    pub fn with_bio(mut self, bio: Bio) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_site(mut self, site: Option<SiteUrl>) -> Self {
        self.site = Some(site);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_links(mut self, links: impl Into<String>) -> Self {
        self.links = Some(links.into());
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.photo.is_none()
            && self.bio.is_none()
            && self.site.is_none()
            && self.tags.is_none()
            && self.links.is_none()
    }

    /// Applies the update to an in-memory profile.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(slug) = self.slug {
            profile.slug = Some(slug);
        }
        if let Some(photo) = self.photo {
            profile.photo = photo;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(site) = self.site {
            profile.site = site;
        }
        if let Some(tags) = self.tags {
            profile.tags = tags;
        }
        if let Some(links) = self.links {
            profile.links = links;
        }
        profile.updated_at = self.updated_at;
    }
}
