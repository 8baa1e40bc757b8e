use crate::cli::Cli;
use cspreports_config::{Settings, load_settings};

/// Loads settings and lets the command line override the database URL.
pub async fn load(cli: &Cli) -> Result<Settings, cspreports_config::ConfigError> {
    let mut settings = load_settings(cli.config.as_deref()).await?;

    if let Some(url) = &cli.database_url {
        settings.database_url = Some(url.clone());
    }

    Ok(settings)
}
