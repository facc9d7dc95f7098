//! personio-absences - posts today's Personio absences to a Slack webhook

use chrono::Local;
use clap::Parser;
use log::{LevelFilter, debug, info, warn};

mod cli;
mod client;
mod config;
mod error;
mod notify;

use cli::Cli;
use cli::absences::Outcome;
use client::{Credentials, PersonioClient};
use config::Config;
use error::Result;
use notify::SlackNotifier;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_at(cli.config.as_deref())?;
    init_logging(&config, cli.debug);

    match Config::resolve_path(cli.config.as_deref()) {
        Some(path) => debug!("loaded configuration from {}", path.display()),
        None => debug!("loaded configuration from environment"),
    }

    let http = client::build_http_client()?;
    let mut personio = PersonioClient::new(
        http.clone(),
        &config.api_base(),
        Credentials::new(&config.personio.client_id, &config.personio.secret),
    );
    let slack = SlackNotifier::new(http, config.slack.webhook_url.clone());

    let today = Local::now().date_naive();
    match cli::absences::run(&mut personio, &slack, today).await? {
        Outcome::NoAbsences => info!("no absences found for today"),
        Outcome::Notified { count } => info!("sent absentee message ({} absentees)", count),
    }

    Ok(())
}

/// Initialise env_logger at the configured level. `RUST_LOG`, when set,
/// takes precedence.
fn init_logging(config: &Config, debug: bool) {
    let parsed = config.level_filter();
    let level = if debug {
        LevelFilter::Debug
    } else {
        parsed.unwrap_or(LevelFilter::Info)
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if parsed.is_none() && !debug {
        warn!("invalid log level '{}' provided, using info", config.log.level);
    }
}
