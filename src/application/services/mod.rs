// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{accounts::AccountCommandService, profiles::ProfileCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::profiles::ProfileQueryService,
    },
    domain::{
        account::{AccountRepository, AccountStore},
        profile::{ProfileRepository, services::ProfileSlugService},
    },
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    slug_service: Arc<ProfileSlugService>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        account_store: Arc<dyn AccountStore>,
        profile_repo: Arc<dyn ProfileRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&account_store),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ProfileSlugService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&slugger),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&account_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&account_repo),
        ));

        Self {
            account_commands,
            profile_commands,
            profile_queries,
            slug_service,
        }
    }

    /// Slug allocation on its own, e.g. to preview the slug a name would get.
    pub fn slug_service(&self) -> Arc<ProfileSlugService> {
        Arc::clone(&self.slug_service)
    }
}
