//! CLI entrypoint for courtwatch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use courtwatch_application::{
    BoardPoller, FetchLiveBoardUseCase, GroundedSearchGateway, SyncFirmUseCase,
    TrackCaseUseCase,
};
use courtwatch_domain::{AdvocateRoster, CaseQuery, FirmProfile, OutputFormat};
use courtwatch_infrastructure::{ConfigLoader, FileConfig, GeminiGateway};
use courtwatch_presentation::{
    BoardArgs, BoardWatcher, Cli, Command, ConsoleFormatter, FirmArgs, ProgressMode, TrackArgs,
    TrackerRepl,
};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to load configuration")?
    };

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            tracing::error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    if let Command::Config = cli.command {
        print_config(&config)?;
        return Ok(());
    }

    if issues.iter().any(|i| i.is_error()) {
        bail!("configuration has errors; run `courtwatch config` to inspect");
    }

    info!("Starting courtwatch");

    // === Dependency Injection ===
    let gemini = GeminiGateway::from_config(&config.gemini)?;
    if !gemini.has_credential() {
        warn!(
            env = %config.gemini.api_key_env,
            "no API key configured; lookups will fail until one is set"
        );
    }
    let gateway: Arc<dyn GroundedSearchGateway> = Arc::new(gemini);
    let params = config.to_lookup_params();

    let progress = ProgressMode::detect(cli.quiet, std::io::stderr().is_terminal()).into_notifier();

    match cli.command {
        Command::Track(TrackArgs { interactive: true, .. }) => {
            let use_case = TrackCaseUseCase::new(gateway, params);
            let mut repl = TrackerRepl::new(use_case, format).with_progress(!cli.quiet);
            repl.run().await?;
        }
        Command::Track(TrackArgs { query, .. }) => {
            let Some(raw) = query else {
                bail!("A query is required. Use --interactive for the tracker.");
            };
            let query = CaseQuery::parse(&raw)?;
            let use_case = TrackCaseUseCase::new(gateway, params);
            let report = use_case
                .execute_with_progress(&query, progress.as_ref())
                .await;
            println!("{}", ConsoleFormatter::format_report(&report, format));
        }
        Command::Firm(FirmArgs { advocates }) => {
            let profile = firm_profile(&config, &advocates)?;
            info!(advocates = profile.advocates.len(), "syncing firm cases");
            let use_case = SyncFirmUseCase::new(gateway, params);
            let briefing = use_case
                .execute_with_progress(&profile.advocates, progress.as_ref())
                .await;
            println!(
                "{}",
                ConsoleFormatter::format_briefing(&briefing, &profile.firm_name, format)
            );
        }
        Command::Board(BoardArgs {
            court,
            once,
            interval,
        }) => {
            let court = court.unwrap_or_else(|| config.board.parse_default_court().0);
            let use_case = FetchLiveBoardUseCase::new(gateway, params);
            if once {
                let state = use_case
                    .execute_with_progress(court, progress.as_ref())
                    .await;
                println!("{}", ConsoleFormatter::format_board(&state, format));
            } else {
                let poller = match interval {
                    Some(secs) => BoardPoller::with_interval(use_case, Duration::from_secs(secs)),
                    None => BoardPoller::new(use_case),
                };
                BoardWatcher::new(poller, format).run(court).await?;
            }
        }
        Command::Config => print_config(&config)?,
    }

    Ok(())
}

/// Firm profile from config, with the roster replaced by `-a` names when given
fn firm_profile(config: &FileConfig, advocates: &[String]) -> Result<FirmProfile> {
    let (mut profile, _) = config.firm.to_profile();
    if !advocates.is_empty() {
        profile.advocates = AdvocateRoster::new(advocates)?;
    }
    Ok(profile)
}

fn print_config(config: &FileConfig) -> Result<()> {
    ConfigLoader::print_config_sources();
    println!();

    let mut shown = config.clone();
    if shown.gemini.api_key.is_some() {
        shown.gemini.api_key = Some("<redacted>".to_string());
    }
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(&shown)?);

    let key_state = if config.gemini.resolve_api_key().is_some() {
        "set"
    } else {
        "NOT SET"
    };
    println!("API key (${}): {}", config.gemini.api_key_env, key_state);

    for issue in config.validate() {
        let level = if issue.is_error() { "error" } else { "warning" };
        println!("[{}] {}", level, issue.message);
    }
    Ok(())
}
