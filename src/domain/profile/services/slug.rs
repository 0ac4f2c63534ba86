// src/domain/profile/services/slug.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::account::AccountId;
use crate::domain::errors::DomainResult;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::value_objects::ProfileSlug;

/// Room left after the base for a `_<count>` suffix.
const MAX_BASE_LEN: usize = ProfileSlug::MAX_LEN - 8;

/// Domain service responsible for producing unique slugs for profiles.
pub struct ProfileSlugService {
    profile_repo: Arc<dyn ProfileRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ProfileSlugService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            profile_repo,
            generator,
        }
    }

    /// Normalizes `name` and appends `_2`, `_3`, ... until the candidate is
    /// neither persisted nor reserved.
    ///
    /// The result is only free at the time of the check; the write that stores
    /// it must run under the store's unique constraint.
    pub async fn create_slug(&self, name: &str) -> DomainResult<ProfileSlug> {
        self.create_slug_for(name, None).await
    }

    /// Like [`Self::create_slug`], but a slug already held by `owner` counts as free.
    pub async fn create_slug_for(
        &self,
        name: &str,
        owner: Option<AccountId>,
    ) -> DomainResult<ProfileSlug> {
        let base = self.normalize(name);

        let mut candidate = base.clone();
        let mut count = 1u64;

        loop {
            let slug = ProfileSlug::new(candidate)?;
            if !slug.is_reserved() && !self.is_taken(&slug, owner).await? {
                return Ok(slug);
            }
            count += 1;
            candidate = format!("{base}_{count}");
        }
    }

    fn normalize(&self, name: &str) -> String {
        let slug = self.generator.slugify(name);
        if slug.chars().count() <= MAX_BASE_LEN {
            return slug;
        }
        let truncated: String = slug.chars().take(MAX_BASE_LEN).collect();
        truncated.trim_end_matches('-').to_string()
    }

    async fn is_taken(&self, slug: &ProfileSlug, owner: Option<AccountId>) -> DomainResult<bool> {
        match owner {
            None => self.profile_repo.slug_exists(slug).await,
            Some(owner) => Ok(self
                .profile_repo
                .find_by_slug(slug)
                .await?
                .is_some_and(|existing| existing.account_id != owner)),
        }
    }
}
