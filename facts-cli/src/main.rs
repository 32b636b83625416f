use std::env;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use facts_core::{
    config, FactImporter, HttpFactFetcher, ImportEvent, ImportObserver, RawSettings,
    TracingObserver,
};
use facts_store::PgFactRepository;

/// Fact import engine management command.
#[derive(Parser, Debug)]
#[command(name = "facts")]
#[command(about = "Import facts from the external API into the fact store")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a batch of facts and persist the valid ones
    Import,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Import => {
            let raw = RawSettings::from_env();
            let imported = run_import(&raw).await?;
            println!("Successfully imported facts: {imported}");
            Ok(())
        }
    }
}

/// Run one import invocation and return the accepted count.
///
/// The configuration guard runs first: a missing or mistyped setting
/// fails here, and a disabled flag returns an empty batch, both before
/// any store connection is opened.
async fn run_import(raw: &RawSettings) -> anyhow::Result<usize> {
    let settings = config::validate(raw)?;

    if !settings.fetch_enabled {
        TracingObserver.record(ImportEvent::Disabled);
        return Ok(0);
    }

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let repository = PgFactRepository::connect(&database_url)
        .await
        .context("failed to connect to the fact store")?;
    repository
        .migrate()
        .await
        .context("failed to apply fact store migrations")?;

    let importer = FactImporter::new(HttpFactFetcher::new(), repository, TracingObserver);
    let imported = importer.run(raw).await?;

    info!(count = imported.len(), "Import finished");
    Ok(imported.len())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("facts={level},facts_core={level},facts_store={level},sqlx=warn,reqwest=info")
            .into()
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use facts_core::ConfigError;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn configuration_errors_preempt_any_store_activity() {
        // No DATABASE_URL is needed: the guard's verdict arrives before
        // the store is ever looked up.
        let err = run_import(&RawSettings::new(None, None)).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingSetting)
        );

        let err = run_import(&RawSettings::new(Some(json!(42)), Some(json!("yes"))))
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::WrongType)
        );
    }

    #[tokio::test]
    async fn disabled_flag_returns_empty_batch_without_connecting() {
        // Succeeds with no DATABASE_URL and no reachable database.
        let raw = RawSettings::new(Some(Value::String("not even a url".into())), Some(json!(false)));
        let imported = run_import(&raw).await.unwrap();
        assert_eq!(imported, 0);
    }
}
