use clap::Parser;
use cspreports_config::constants;
use cspreports_pruner::{Cutoff, PruneSummary};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cspreports-clean")]
#[command(about = "Delete old CSP reports")]
pub struct Cli {
    /// The date until which the reports are deleted (YYYY-MM-DD). By default 7 days ago.
    pub limit: Option<String>,

    /// Output level: 0 silent, 1 normal, 2 verbose, 3 very verbose
    #[arg(
        short,
        long,
        default_value_t = constants::DEFAULT_VERBOSITY,
        value_parser = clap::value_parser!(u8).range(0..=3)
    )]
    pub verbosity: u8,

    /// Database connection URL
    #[arg(long, env = constants::DATABASE_URL_ENV)]
    pub database_url: Option<String>,

    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only count the reports that would be deleted
    #[arg(long)]
    pub dry_run: bool,

    /// Apply pending migrations before deleting
    #[arg(long)]
    pub migrate: bool,
}

impl Cli {
    /// Default tracing filter when `RUST_LOG` is unset. Statement logging
    /// from sqlx stays at warn.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info,sqlx=warn",
            _ => "debug,sqlx=warn",
        }
    }

    /// Confirmation printed after a prune, only when running verbose.
    pub fn summary_line(&self, summary: &PruneSummary) -> Option<String> {
        (self.verbosity >= 2).then(|| summary.to_string())
    }

    /// Count printed for `--dry-run`, suppressed at verbosity 0.
    pub fn dry_run_line(&self, matching: u64, cutoff: &Cutoff) -> Option<String> {
        (self.verbosity >= 1)
            .then(|| format!("Would delete {matching} report(s) created before {cutoff}."))
    }
}
