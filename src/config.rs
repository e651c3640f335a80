//! Command line definition for the `iss_tracker` binary.
//!
//! Parsing happens only in `main`; library code never reads process arguments.
use std::{sync::Arc, time::Duration};

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::{
    constants::{DEFAULT_BIND_ADDR, DEFAULT_FETCH_TIMEOUT, ISS_URL},
    env_state::TrackerEnv,
    feed::{EphemerisSource, FileFeed, HttpFeed},
};

#[derive(Debug, Parser)]
#[command(name = "iss_tracker")]
#[command(about = "Track the ISS from its public ephemeris feed")]
#[command(version)]
pub struct Cli {
    /// Log level
    #[arg(
        short,
        long,
        value_enum,
        global = true,
        ignore_case = true,
        default_value_t = LogLevel::Warning
    )]
    pub loglevel: LogLevel,

    /// URL of the OEM XML ephemeris feed
    #[arg(long, global = true, env = "ISS_FEED_URL", default_value = ISS_URL)]
    pub feed_url: String,

    /// Read the ephemeris from a local XML file (takes precedence over `--feed-url`)
    #[arg(long, global = true)]
    pub feed_file: Option<Utf8PathBuf>,

    /// Timeout of one upstream retrieval, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Populate the epoch cache and serve the query API
    Serve(ServeArgs),

    /// Print the data range, the closest epoch to now and the ISS speed
    Report,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address the query API listens on
    #[arg(long, env = "ISS_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Redis database holding the epoch cache
    #[cfg(feature = "redis-store")]
    #[arg(long, env = "ISS_REDIS_URL", default_value = crate::constants::DEFAULT_REDIS_URL)]
    pub redis_url: String,
}

/// Level names accepted by `--loglevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error | LogLevel::Critical => Level::ERROR,
        }
    }
}

impl Cli {
    /// Build the ephemeris source selected on the command line.
    pub fn ephemeris_source(&self) -> Arc<dyn EphemerisSource> {
        match &self.feed_file {
            Some(path) => Arc::new(FileFeed::new(path)),
            None => Arc::new(HttpFeed::new(TrackerEnv::new(
                self.feed_url.clone(),
                Duration::from_secs(self.timeout_secs),
            ))),
        }
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["iss_tracker", "report"]).unwrap();
        assert_eq!(cli.loglevel, LogLevel::Warning);
        assert_eq!(cli.timeout_secs, 10);
        assert!(cli.feed_file.is_none());
        assert!(matches!(cli.command, Commands::Report));
    }

    #[test]
    fn test_loglevel_names() {
        let cli = Cli::try_parse_from(["iss_tracker", "-l", "DEBUG", "report"]).unwrap();
        assert_eq!(Level::from(cli.loglevel), Level::DEBUG);

        let cli = Cli::try_parse_from(["iss_tracker", "report", "--loglevel", "CRITICAL"]).unwrap();
        assert_eq!(Level::from(cli.loglevel), Level::ERROR);

        assert!(Cli::try_parse_from(["iss_tracker", "-l", "LOUD", "report"]).is_err());
    }

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "iss_tracker",
            "serve",
            "--bind",
            "127.0.0.1:8080",
            "--feed-file",
            "ISS.OEM_J2K_EPH.xml",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.bind, "127.0.0.1:8080"),
            _ => panic!("expected the serve subcommand"),
        }
        assert_eq!(
            cli.feed_file.as_deref().map(|p| p.as_str()),
            Some("ISS.OEM_J2K_EPH.xml")
        );
    }
}
