// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Encore CLI - browse the music and podcast catalog from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Save application credentials
//! encore config set --client-id ID --client-secret SECRET
//!
//! # First page of every result kind
//! encore search "miles davis"
//!
//! # Three pages of album results as JSON
//! encore search "miles davis" --kind albums --pages 3 --format json --pretty
//!
//! # Album with its tracks
//! encore album 1weenld61qoidwYuZ1GESA
//!
//! # Home feed for Sweden
//! encore home --country SE --language sv
//!
//! # Tracks for a genre
//! encore genres --tracks "rainy day"
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use encore_core::{CredentialError, ErrorKind};
use encore_fetch::{FetchError, RemoteError};
use encore_store::StoreError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{CatalogFailure, browse, config, genres, home, search};

// ============================================================================
// CLI Definition
// ============================================================================

/// Encore CLI - music and podcast catalog browser.
#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Music and podcast catalog browser")]
#[command(long_about = r#"
Encore browses a music and podcast catalog.

Credentials come from the config file or the ENCORE_CLIENT_ID and
ENCORE_CLIENT_SECRET environment variables.

Examples:
  encore search "kind of blue"          # Everything matching a query
  encore search jazz --kind playlists   # One kind, paged
  encore show 4rOoJ6Egrf8K2IrywzwOMk    # Podcast with episodes
  encore home                           # Home feed
  encore --format json genres           # JSON output
"#)]
#[command(version)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Market country code, overriding the config file.
    #[arg(long, global = true)]
    pub country: Option<String>,

    /// Market language code, overriding the config file.
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, no error message).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog.
    #[command(visible_alias = "s")]
    Search(search::SearchArgs),

    /// Show an album and its tracks.
    Album(browse::IdArgs),

    /// Show an artist's top tracks and albums.
    Artist(browse::PagedArgs),

    /// List the tracks of a playlist.
    Playlist(browse::PagedArgs),

    /// Show a podcast and its episodes.
    Show(browse::PagedArgs),

    /// Show a podcast episode.
    Episode(browse::IdArgs),

    /// Show the home feed.
    #[command(visible_alias = "h")]
    Home,

    /// List genres or recommend tracks for one.
    Genres(genres::GenresArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// The requested object does not exist.
    NotFound = 2,
    /// The catalog could not be reached.
    Network = 3,
    /// Missing or invalid configuration.
    Config = 4,
    /// Credentials were rejected or the request was refused.
    Unauthorized = 5,
}

impl ExitCode {
    /// Exit code for a failed command.
    fn for_error(err: &anyhow::Error) -> Self {
        if let Some(CatalogFailure(kind)) = err.downcast_ref::<CatalogFailure>() {
            return match kind {
                ErrorKind::ResourceNotFound => Self::NotFound,
                ErrorKind::NetworkConnectionFailure => Self::Network,
                ErrorKind::BadOrExpiredToken | ErrorKind::BadOauthRequest => Self::Unauthorized,
                _ => Self::Error,
            };
        }
        if let Some(StoreError::Config(_)) = err.downcast_ref::<StoreError>() {
            return Self::Config;
        }
        if let Some(FetchError::Credential(_)) = err.downcast_ref::<FetchError>() {
            return Self::Unauthorized;
        }
        Self::Error
    }
}

/// Returns true if running the same command again may succeed.
fn is_transient(err: &anyhow::Error) -> bool {
    if let Some(CatalogFailure(kind)) = err.downcast_ref::<CatalogFailure>() {
        return kind.is_transient();
    }
    if let Some(store) = err.downcast_ref::<StoreError>() {
        return store.is_transient();
    }
    matches!(
        err.downcast_ref::<FetchError>(),
        Some(
            FetchError::Credential(CredentialError::Network(_))
                | FetchError::Unclassified(RemoteError::Network(_))
        )
    )
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("encore=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("encore=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Search(args) => search::run(args, &cli).await,
        Commands::Album(args) => browse::album(args, &cli).await,
        Commands::Artist(args) => browse::artist(args, &cli).await,
        Commands::Playlist(args) => browse::playlist(args, &cli).await,
        Commands::Show(args) => browse::show(args, &cli).await,
        Commands::Episode(args) => browse::episode(args, &cli).await,
        Commands::Home => home::run(&cli).await,
        Commands::Genres(args) => genres::run(args, &cli).await,
        Commands::Config(args) => config::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
            if is_transient(&e) {
                eprintln!("This may be temporary; try again.");
            }
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["encore", "search", "jazz", "--kind", "albums", "--pages", "3"]).unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.query, "jazz");
        assert_eq!(args.kind, search::SearchTarget::Albums);
        assert_eq!(args.pages, 3);
    }

    #[test]
    fn test_global_flags_after_command() {
        let cli = Cli::try_parse_from(["encore", "home", "--country", "se", "-f", "json"]).unwrap();
        assert_eq!(cli.country.as_deref(), Some("se"));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::new(CatalogFailure(ErrorKind::ResourceNotFound));
        assert!(matches!(ExitCode::for_error(&not_found), ExitCode::NotFound));

        let config = anyhow::Error::new(StoreError::Config("missing".into()));
        assert!(matches!(ExitCode::for_error(&config), ExitCode::Config));

        assert!(matches!(ExitCode::for_error(&anyhow::anyhow!("boom")), ExitCode::Error));
    }

    #[test]
    fn test_transient_failures() {
        let rate_limited = anyhow::Error::new(CatalogFailure(ErrorKind::RateLimitExceeded));
        assert!(is_transient(&rate_limited));
        let not_found = anyhow::Error::new(CatalogFailure(ErrorKind::ResourceNotFound));
        assert!(!is_transient(&not_found));

        let unreachable = anyhow::Error::new(FetchError::Credential(CredentialError::Network("down".into())));
        assert!(is_transient(&unreachable));
        let missing = anyhow::Error::new(FetchError::Credential(CredentialError::MissingClientCredentials));
        assert!(!is_transient(&missing));

        let config = anyhow::Error::new(StoreError::Config("missing".into()));
        assert!(!is_transient(&config));
        assert!(!is_transient(&anyhow::anyhow!("boom")));
    }
}
