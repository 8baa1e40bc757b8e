mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use cspreports_config::Settings;
use cspreports_pruner::{RetentionPruner, compute_cutoff};
use cspreports_store::Store;
use migration::MigratorTrait;
use sea_orm::Database;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let settings = config::load(&cli).await?;

    run(&cli, settings).await
}

async fn run(cli: &cli::Cli, settings: Settings) -> anyhow::Result<()> {
    // Reject bad input before touching the database
    let cutoff = compute_cutoff(cli.limit.as_deref(), &settings.time)?;

    let database_url = settings
        .database_url
        .context("DATABASE_URL must be set")?;

    let db = Database::connect(&database_url)
        .await
        .context("failed to connect to database")?;

    if cli.migrate {
        migration::Migrator::up(&db, None).await?;
        tracing::info!("Database migrations complete");
    }

    let pruner = RetentionPruner::new(Arc::new(Store::new(db)));

    if cli.dry_run {
        let matching = pruner.preview(cutoff).await?;
        if let Some(line) = cli.dry_run_line(matching, &cutoff) {
            println!("{line}");
        }
        return Ok(());
    }

    let summary = pruner.prune(cutoff).await?;

    if let Some(line) = cli.summary_line(&summary) {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cspreports_config::TimeSettings;
    use cspreports_pruner::PruneError;

    fn settings(database_url: Option<&str>) -> Settings {
        Settings {
            database_url: database_url.map(str::to_string),
            time: TimeSettings::default(),
        }
    }

    #[tokio::test]
    async fn test_invalid_limit_rejected_before_connecting() {
        let cli = cli::Cli::try_parse_from(["cspreports-clean", "not-a-date"]).unwrap();

        // Without a database URL the only way to fail on the date is to check it first
        let err = run(&cli, settings(None)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PruneError>(),
            Some(PruneError::InvalidDateArgument(v)) if v == "not-a-date"
        ));

        // An unreachable database is never contacted either
        let err = run(&cli, settings(Some("postgres://user@db.invalid:1/reports")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Limit is not a valid date: 'not-a-date'.");
    }

    #[tokio::test]
    async fn test_valid_limit_proceeds_to_connect() {
        let cli = cli::Cli::try_parse_from(["cspreports-clean", "2021-01-15"]).unwrap();

        let err = run(&cli, settings(None)).await.unwrap_err();
        assert!(err.downcast_ref::<PruneError>().is_none());
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }
}
