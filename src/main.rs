use populus_core::application::{
    commands::{
        accounts::{RegisterAccountCommand, UpdateAccountCommand},
        profiles::{AssignSlugCommand, SetPhotoCommand},
    },
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use populus_core::config::AppConfig;
use populus_core::domain::{
    account::{AccountRepository, AccountStore},
    profile::ProfileRepository,
};
use populus_core::infrastructure::{
    database,
    repositories::{PostgresAccountRepository, PostgresAccountStore, PostgresProfileRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: populus_core <command>

commands:
  migrate                                 apply database migrations
  register <display_name> <email>         create an account and its profile
  rename <account_id> <display_name>      change an account's display name
  assign-slug <account_id> [--regenerate] allocate a slug for a profile
  preview-slug <display_name>             show the slug a name would receive
  set-photo <account_id> <filename>       record an uploaded avatar
  show <slug>                             print a profile
  list [limit]                            list the newest profiles";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;

    if command == "migrate" {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
        return Ok(());
    }
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
    }

    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));
    let account_store: Arc<dyn AccountStore> = Arc::new(PostgresAccountStore::new(pool.clone()));
    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        Arc::clone(&account_repo),
        Arc::clone(&account_store),
        Arc::clone(&profile_repo),
        Arc::clone(&clock),
        Arc::clone(&slugger),
    );

    let result = run(&services, command, &args[1..]).await;
    pool.close().await;
    result
}

async fn run(services: &ApplicationServices, command: &str, args: &[String]) -> Result<()> {
    match (command, args) {
        ("register", [display_name, email]) => {
            let registered = services
                .account_commands
                .register(RegisterAccountCommand {
                    display_name: display_name.clone(),
                    email: email.clone(),
                })
                .await?;
            print_json(&registered)
        }
        ("rename", [account_id, display_name]) => {
            let account = services
                .account_commands
                .update(UpdateAccountCommand {
                    id: parse_id(account_id)?,
                    display_name: Some(display_name.clone()),
                    email: None,
                })
                .await?;
            print_json(&account)
        }
        ("assign-slug", [account_id, rest @ ..]) => {
            let regenerate = match rest {
                [] => false,
                [flag] if flag == "--regenerate" => true,
                _ => bail!("{USAGE}"),
            };
            let profile = services
                .profile_commands
                .assign_slug(AssignSlugCommand {
                    account_id: parse_id(account_id)?,
                    regenerate,
                })
                .await?;
            print_json(&profile)
        }
        ("preview-slug", [display_name]) => {
            let slug = services.slug_service().create_slug(display_name).await?;
            println!("{slug}");
            Ok(())
        }
        ("set-photo", [account_id, filename]) => {
            let profile = services
                .profile_commands
                .set_photo(SetPhotoCommand {
                    account_id: parse_id(account_id)?,
                    filename: filename.clone(),
                })
                .await?;
            print_json(&profile)
        }
        ("show", [slug]) => {
            let card = services.profile_queries.get_by_slug(slug).await?;
            println!("{card}");
            print_json(&card.profile)
        }
        ("list", []) => print_json(&services.profile_queries.list(None).await?),
        ("list", [limit]) => {
            let limit = limit
                .parse::<u32>()
                .with_context(|| format!("invalid limit '{limit}'"))?;
            print_json(&services.profile_queries.list(Some(limit)).await?)
        }
        _ => bail!("{USAGE}"),
    }
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .with_context(|| format!("invalid account id '{raw}'"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
