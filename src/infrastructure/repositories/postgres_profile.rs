// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{
    Bio, PhotoPath, Profile, ProfileId, ProfileRepository, ProfileSlug, ProfileUpdate, SiteUrl,
    Tag,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

pub(super) const PROFILE_COLUMNS: &str =
    "id, account_id, slug, photo, bio, site, tags, links, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: ProfileUpdate) -> QueryBuilder<'static, Postgres> {
        let ProfileUpdate {
            account_id,
            slug,
            photo,
            bio,
            site,
            tags,
            links,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE profiles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            let slug: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug);
        }

        if let Some(photo) = photo {
            builder.push(", photo = ");
            builder.push_bind(photo.map(String::from));
        }

        if let Some(bio) = bio {
            let bio: String = bio.into();
            builder.push(", bio = ");
            builder.push_bind(bio);
        }

        if let Some(site) = site {
            builder.push(", site = ");
            builder.push_bind(site.map(|site| site.to_string()));
        }

        if let Some(tags) = tags {
            let tags: Vec<String> = tags.into_iter().map(String::from).collect();
            builder.push(", tags = ");
            builder.push_bind(tags);
        }

        if let Some(links) = links {
            builder.push(", links = ");
            builder.push_bind(links);
        }

        builder.push(" WHERE account_id = ");
        builder.push_bind(i64::from(account_id));
        builder.push(" RETURNING ");
        builder.push(PROFILE_COLUMNS);

        builder
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ProfileRow {
    id: i64,
    account_id: i64,
    slug: Option<String>,
    photo: Option<String>,
    bio: String,
    site: Option<String>,
    tags: Vec<String>,
    links: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: ProfileId::new(row.id)?,
            account_id: AccountId::new(row.account_id)?,
            slug: row.slug.map(ProfileSlug::new).transpose()?,
            photo: row.photo.map(PhotoPath::from_stored).transpose()?,
            bio: Bio::new(row.bio)?,
            site: row.site.as_deref().map(SiteUrl::parse).transpose()?,
            tags: row
                .tags
                .into_iter()
                .map(Tag::new)
                .collect::<Result<Vec<_>, _>>()?,
            links: row.links,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn slug_exists(&self, slug: &ProfileSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM profiles WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_by_slug(&self, slug: &ProfileSlug) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn find_by_account(&self, account_id: AccountId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE account_id = $1"
        ))
        .bind(i64::from(account_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn latest(&self) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Profile> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = Self::build_update_query(update);

        let row = builder
            .build_query_as::<ProfileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;

        Profile::try_from(row)
    }
}
