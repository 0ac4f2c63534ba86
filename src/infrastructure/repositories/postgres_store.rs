// src/infrastructure/repositories/postgres_store.rs
use super::map_sqlx;
use super::postgres_account::{ACCOUNT_COLUMNS, AccountRow};
use super::postgres_profile::{PROFILE_COLUMNS, ProfileRow};
use crate::domain::account::{
    Account, AccountStore, AccountTransaction, AccountUpdate, NewAccount,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{NewProfile, Profile};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn begin(&self) -> DomainResult<Box<dyn AccountTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresAccountTransaction { tx }))
    }
}

/// Rolled back by sqlx when dropped uncommitted.
pub struct PostgresAccountTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl AccountTransaction for PostgresAccountTransaction {
    async fn insert_account(&mut self, account: NewAccount) -> DomainResult<Account> {
        let NewAccount {
            display_name,
            email,
            created_at,
            updated_at,
        } = account;

        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "INSERT INTO accounts (display_name, email, created_at, updated_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(display_name.as_str())
        .bind(email.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Account::try_from(row)
    }

    async fn update_account(&mut self, update: AccountUpdate) -> DomainResult<Account> {
        let AccountUpdate {
            id,
            display_name,
            email,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE accounts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(display_name) = display_name {
            let display_name: String = display_name.into();
            builder.push(", display_name = ");
            builder.push_bind(display_name);
        }

        if let Some(email) = email {
            let email: String = email.into();
            builder.push(", email = ");
            builder.push_bind(email);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ACCOUNT_COLUMNS);

        let row = builder
            .build_query_as::<AccountRow>()
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("account not found".into()))?;

        Account::try_from(row)
    }

    async fn insert_profile(&mut self, profile: NewProfile) -> DomainResult<Profile> {
        let NewProfile {
            account_id,
            slug,
            photo,
            bio,
            site,
            tags,
            links,
            created_at,
            updated_at,
        } = profile;

        let tags: Vec<String> = tags.into_iter().map(String::from).collect();

        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "INSERT INTO profiles (account_id, slug, photo, bio, site, tags, links, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(i64::from(account_id))
        .bind(slug.map(String::from))
        .bind(photo.map(String::from))
        .bind(String::from(bio))
        .bind(site.map(|site| site.to_string()))
        .bind(tags)
        .bind(links)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Profile::try_from(row)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let this = *self;
        this.tx.commit().await.map_err(map_sqlx)
    }
}
