// tests/support/mocks/store.rs
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use populus_core::domain::account::{
    Account, AccountId, AccountRepository, AccountStore, AccountTransaction, AccountUpdate,
    DisplayName, Email, NewAccount,
};
use populus_core::domain::errors::{DomainError, DomainResult};
use populus_core::domain::profile::{
    NewProfile, Profile, ProfileId, ProfileRepository, ProfileSlug, ProfileUpdate,
};

use super::time::fixed_now;

#[derive(Debug, Default, Clone)]
struct State {
    last_account_id: i64,
    last_profile_id: i64,
    accounts: BTreeMap<i64, Account>,
    profiles: BTreeMap<i64, Profile>,
}

impl State {
    fn insert_account(&mut self, new: NewAccount) -> DomainResult<Account> {
        if self.accounts.values().any(|a| a.email == new.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        self.last_account_id += 1;
        let account = Account {
            id: AccountId::new(self.last_account_id)?,
            display_name: new.display_name,
            email: new.email,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.accounts.insert(self.last_account_id, account.clone());
        Ok(account)
    }

    fn update_account(&mut self, update: AccountUpdate) -> DomainResult<Account> {
        if let Some(email) = update.email.as_ref() {
            if self
                .accounts
                .values()
                .any(|a| &a.email == email && a.id != update.id)
            {
                return Err(DomainError::Conflict("email already registered".into()));
            }
        }
        let account = self
            .accounts
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("account not found".into()))?;
        if let Some(display_name) = update.display_name {
            account.display_name = display_name;
        }
        if let Some(email) = update.email {
            account.email = email;
        }
        account.updated_at = update.updated_at;
        Ok(account.clone())
    }

    fn slug_taken_by_other(&self, slug: &ProfileSlug, owner: AccountId) -> bool {
        self.profiles
            .values()
            .any(|p| p.slug.as_ref() == Some(slug) && p.account_id != owner)
    }

    fn insert_profile(&mut self, new: NewProfile) -> DomainResult<Profile> {
        if !self.accounts.contains_key(&i64::from(new.account_id)) {
            return Err(DomainError::NotFound("account not found".into()));
        }
        if self.profiles.values().any(|p| p.account_id == new.account_id) {
            return Err(DomainError::Conflict("account already has a profile".into()));
        }
        if let Some(slug) = new.slug.as_ref() {
            if self.slug_taken_by_other(slug, new.account_id) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        self.last_profile_id += 1;
        let profile = Profile {
            id: ProfileId::new(self.last_profile_id)?,
            account_id: new.account_id,
            slug: new.slug,
            photo: new.photo,
            bio: new.bio,
            site: new.site,
            tags: new.tags,
            links: new.links,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.profiles.insert(self.last_profile_id, profile.clone());
        Ok(profile)
    }

    fn update_profile(&mut self, update: ProfileUpdate) -> DomainResult<Profile> {
        if let Some(slug) = update.slug.as_ref() {
            if self.slug_taken_by_other(slug, update.account_id) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let profile = self
            .profiles
            .values_mut()
            .find(|p| p.account_id == update.account_id)
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;
        update.apply_to(profile);
        Ok(profile.clone())
    }
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<State>,
    fail_profile_inserts: AtomicBool,
    stolen_slug_writes: AtomicU32,
    slug_checks: AtomicUsize,
}

/// Account, profile and transaction store backed by in-process maps, with the
/// same uniqueness rules as the database schema.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    shared: Arc<Shared>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later profile insert fail as if the database were down.
    pub fn fail_profile_inserts(&self) {
        self.shared.fail_profile_inserts.store(true, Ordering::SeqCst);
    }

    /// The next `count` slug writes lose a race: another profile claims the
    /// slug just before the write lands.
    pub fn steal_next_slug_writes(&self, count: u32) {
        self.shared.stolen_slug_writes.store(count, Ordering::SeqCst);
    }

    pub fn slug_checks(&self) -> usize {
        self.shared.slug_checks.load(Ordering::SeqCst)
    }

    /// Adds an account with a profile holding `slug`, bypassing the services.
    pub fn seed_slug(&self, slug: &str) -> AccountId {
        let mut state = self.shared.state.lock().unwrap();
        Self::seed_into(&mut state, slug)
    }

    fn seed_into(state: &mut State, slug: &str) -> AccountId {
        let n = state.last_account_id + 1;
        let account = state
            .insert_account(NewAccount::new(
                DisplayName::new(format!("Seed {n}")).unwrap(),
                Email::new(format!("seed{n}@example.com")).unwrap(),
                fixed_now(),
            ))
            .unwrap();
        let mut profile = NewProfile::empty(account.id, fixed_now());
        profile.slug = Some(ProfileSlug::new(slug).unwrap());
        state.insert_profile(profile).unwrap();
        account.id
    }

    pub fn account_count(&self) -> usize {
        self.shared.state.lock().unwrap().accounts.len()
    }

    pub fn profile_count(&self) -> usize {
        self.shared.state.lock().unwrap().profiles.len()
    }

    pub fn profiles_for(&self, account_id: AccountId) -> Vec<Profile> {
        self.shared
            .state
            .lock()
            .unwrap()
            .profiles
            .values()
            .filter(|p| p.account_id == account_id)
            .cloned()
            .collect()
    }

    pub fn slugs(&self) -> Vec<String> {
        self.shared
            .state
            .lock()
            .unwrap()
            .profiles
            .values()
            .filter_map(|p| p.slug.as_ref().map(|s| s.as_str().to_string()))
            .collect()
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let state = self.shared.state.lock().unwrap();
        Ok(state.accounts.get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>> {
        let state = self.shared.state.lock().unwrap();
        Ok(state.accounts.values().find(|a| &a.email == email).cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn slug_exists(&self, slug: &ProfileSlug) -> DomainResult<bool> {
        self.shared.slug_checks.fetch_add(1, Ordering::SeqCst);
        let state = self.shared.state.lock().unwrap();
        Ok(state.profiles.values().any(|p| p.slug.as_ref() == Some(slug)))
    }

    async fn find_by_slug(&self, slug: &ProfileSlug) -> DomainResult<Option<Profile>> {
        self.shared.slug_checks.fetch_add(1, Ordering::SeqCst);
        let state = self.shared.state.lock().unwrap();
        Ok(state
            .profiles
            .values()
            .find(|p| p.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn find_by_account(&self, account_id: AccountId) -> DomainResult<Option<Profile>> {
        let state = self.shared.state.lock().unwrap();
        Ok(state
            .profiles
            .values()
            .find(|p| p.account_id == account_id)
            .cloned())
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Profile>> {
        let state = self.shared.state.lock().unwrap();
        Ok(state
            .profiles
            .values()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn latest(&self) -> DomainResult<Option<Profile>> {
        let state = self.shared.state.lock().unwrap();
        Ok(state
            .profiles
            .values()
            .max_by_key(|p| (p.created_at, p.id))
            .cloned())
    }

    async fn update(&self, update: ProfileUpdate) -> DomainResult<Profile> {
        let mut state = self.shared.state.lock().unwrap();
        if let Some(slug) = update.slug.as_ref() {
            let stolen = self
                .shared
                .stolen_slug_writes
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if stolen {
                Self::seed_into(&mut state, slug.as_str());
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        state.update_profile(update)
    }
}

pub struct InMemoryTransaction {
    shared: Arc<Shared>,
    working: State,
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn begin(&self) -> DomainResult<Box<dyn AccountTransaction>> {
        let working = self.shared.state.lock().unwrap().clone();
        Ok(Box::new(InMemoryTransaction {
            shared: Arc::clone(&self.shared),
            working,
        }))
    }
}

#[async_trait]
impl AccountTransaction for InMemoryTransaction {
    async fn insert_account(&mut self, account: NewAccount) -> DomainResult<Account> {
        self.working.insert_account(account)
    }

    async fn update_account(&mut self, update: AccountUpdate) -> DomainResult<Account> {
        self.working.update_account(update)
    }

    async fn insert_profile(&mut self, profile: NewProfile) -> DomainResult<Profile> {
        if self.shared.fail_profile_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        self.working.insert_profile(profile)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let this = *self;
        *this.shared.state.lock().unwrap() = this.working;
        Ok(())
    }
}
