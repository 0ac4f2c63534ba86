// tests/support/helpers.rs
use std::sync::Arc;

use populus_core::application::ports::{time::Clock, util::SlugGenerator};
use populus_core::application::services::ApplicationServices;
use populus_core::domain::account::{AccountRepository, AccountStore};
use populus_core::domain::profile::ProfileRepository;
use populus_core::domain::profile::services::ProfileSlugService;
use populus_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{DummyClock, InMemoryStore};

pub fn build_services(store: &InMemoryStore) -> ApplicationServices {
    build_services_with_clock(store, Arc::new(DummyClock))
}

pub fn build_services_with_clock(store: &InMemoryStore, clock: Arc<dyn Clock>) -> ApplicationServices {
    let account_repo: Arc<dyn AccountRepository> = Arc::new(store.clone());
    let account_store: Arc<dyn AccountStore> = Arc::new(store.clone());
    let profile_repo: Arc<dyn ProfileRepository> = Arc::new(store.clone());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(account_repo, account_store, profile_repo, clock, slugger)
}

pub fn slug_service(store: &InMemoryStore) -> ProfileSlugService {
    ProfileSlugService::new(Arc::new(store.clone()), Arc::new(DefaultSlugGenerator))
}
