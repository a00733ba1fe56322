//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use courtwatch_domain::CourtCode;
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary grid, commentary, and cited sources
    Full,
    /// Parsed fields only
    Summary,
    /// JSON view contracts
    Json,
}

impl From<OutputFormat> for courtwatch_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for courtwatch
#[derive(Parser, Debug)]
#[command(name = "courtwatch")]
#[command(author, version, about = "Court case status tracker backed by grounded web search")]
#[command(long_about = r#"
courtwatch looks up Indian court cases through a generative model with web
search grounding, and scrapes the structured answer back into typed records.

Commands:
  track   Status of one case (or an interactive tracker with --interactive)
  firm    Every case listed today for the firm's advocates
  board   Live display board of the Telangana or Andhra Pradesh High Court
  config  Show configuration sources and effective values

Configuration files are loaded from (in priority order):
1. COURTWATCH_SECTION__KEY          Environment variables
2. --config <path>                  Explicit config file
3. ./courtwatch.toml                Project-level config
4. ~/.config/courtwatch/config.toml Global config

The API key is read from $GEMINI_API_KEY unless [gemini] says otherwise.

Example:
  courtwatch track "WP 1234/2024"
  courtwatch firm -a "A RAO" -a "B DEVI" -o json
  courtwatch board --court ap
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (defaults to [output] format, then full)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the status of a single case
    Track(TrackArgs),
    /// List today's cases for the firm's advocates
    Firm(FirmArgs),
    /// Show a court's live display board
    Board(BoardArgs),
    /// Show configuration sources and effective values
    Config,
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Case number, party name, or CNR (letters, digits, spaces, '/' and '-')
    #[arg(required_unless_present = "interactive")]
    pub query: Option<String>,

    /// Start the interactive tracker
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args, Debug)]
pub struct FirmArgs {
    /// Advocate to search for (repeatable; defaults to the configured roster)
    #[arg(short, long = "advocate", value_name = "NAME")]
    pub advocates: Vec<String>,
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Jurisdiction: tg or ap (defaults to [board] default_court)
    #[arg(short, long, value_parser = parse_court)]
    pub court: Option<CourtCode>,

    /// Fetch once and exit instead of watching
    #[arg(long)]
    pub once: bool,

    /// Seconds between refreshes (defaults to [board] refresh_secs)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

fn parse_court(s: &str) -> Result<CourtCode, String> {
    s.parse().map_err(|e: courtwatch_domain::DomainError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_requires_query_unless_interactive() {
        assert!(Cli::try_parse_from(["courtwatch", "track"]).is_err());

        let cli = Cli::try_parse_from(["courtwatch", "track", "--interactive"]).unwrap();
        assert!(matches!(cli.command, Command::Track(TrackArgs { interactive: true, query: None })));

        let cli = Cli::try_parse_from(["courtwatch", "-o", "json", "track", "WP 12/2024"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Command::Track(args) => assert_eq!(args.query.as_deref(), Some("WP 12/2024")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_firm_advocates_repeatable() {
        let cli =
            Cli::try_parse_from(["courtwatch", "firm", "-a", "A RAO", "--advocate", "B DEVI", "-vv"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Firm(args) => assert_eq!(args.advocates, vec!["A RAO", "B DEVI"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_board_args() {
        let cli = Cli::try_parse_from(["courtwatch", "board", "--court", "ap", "--once"]).unwrap();
        match cli.command {
            Command::Board(args) => {
                assert_eq!(args.court, Some(CourtCode::Ap));
                assert!(args.once);
                assert!(args.interval.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Cli::try_parse_from(["courtwatch", "board", "--court", "ka"]).is_err());
        assert!(Cli::try_parse_from(["courtwatch", "board", "--interval", "0"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        let format: courtwatch_domain::OutputFormat = OutputFormat::Summary.into();
        assert_eq!(format, courtwatch_domain::OutputFormat::Summary);
    }
}
