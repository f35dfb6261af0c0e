//! Drives the command-line program.

use crate::archive::{self, Windows};
use crate::clock::{Clock, SystemClock, local_datetime};
use crate::conf::{self, Credentials};
use crate::export;
use crate::reddit::Subreddit;
use crate::reddit::client;
use crate::reddit::service::{RedditService, Service};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use std::io;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

const SECONDS_PER_DAY: i64 = 86_400;

/// Prints `message` to standard error and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Archives a subreddit's complete submission and comment history to CSV files", long_about = None)]
pub struct Config {
    /// Subreddit to archive, without the /r/ prefix
    subreddit: String,

    /// Directory the CSV files are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Length of each submission search window, in days
    #[arg(
        long,
        value_name = "DAYS",
        default_value_t = 365,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    window_days: u32,

    #[command(flatten)]
    verbosity: Verbosity,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    fn window_secs(&self) -> i64 {
        i64::from(self.window_days) * SECONDS_PER_DAY
    }

    fn topics_path(&self) -> PathBuf {
        self.output.join(format!("subreddit_{}_topics.csv", self.subreddit))
    }

    fn comments_path(&self) -> PathBuf {
        self.output.join(format!("subreddit_{}_comments.csv", self.subreddit))
    }
}

/// A fatal program error.
#[derive(Debug, Error)]
pub enum Error {
    /// The program's environment is not configured correctly.
    #[error("Configuration error: {0}")]
    Config(#[from] conf::Error),

    /// An error from the Reddit client.
    #[error("{0}")]
    Client(#[from] client::Error),

    /// An error writing an output file.
    #[error("Export error: {0}")]
    Io(#[from] io::Error),
}

/// Runs the command-line program.
///
/// Any failure aborts the run with a nonzero exit; there is no retry and
/// no partial export.
pub async fn run(config: Config) {
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(error) = Runner::new(config).run().await {
        die(1, &error.to_string());
    }
}

/// Drives the archive pipeline end to end: authenticate, collect
/// submissions, collect comments, export.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Runner {
        Self { config }
    }

    /// Runs the pipeline using the runner's stored configuration options.
    ///
    /// Output files are written only after both collection passes have
    /// finished, so a failure anywhere, including authentication, leaves
    /// no file behind.
    pub async fn run(&self) -> Result<(), Error> {
        let credentials = Credentials::from_env()?;
        let service = RedditService::authenticate(&credentials)
            .await
            .map_err(client::Error::from)?;
        self.run_with_service(service).await
    }

    /// Runs the pipeline against an already-constructed service.
    ///
    /// `service` is the actual service implementation used for every
    /// call the pipeline makes.
    pub(crate) async fn run_with_service<S: Service>(&self, service: S) -> Result<(), Error> {
        let subreddit = Subreddit::new(self.config.subreddit(), service);

        let epoch = subreddit.created().await?;
        info!("r/{} was created at {}", subreddit.name(), local_datetime(epoch));

        let now = SystemClock::default().now().timestamp();
        let windows = Windows::walk_back(now, epoch as i64, self.config.window_secs());
        let posts = archive::collect_posts(&subreddit, windows).await?;
        info!("collected {} submissions", posts.len());

        let comments = archive::collect_comments(&subreddit, &posts.id).await?;
        info!("collected {} top-level comments", comments.len());

        export::export_posts(&posts, &self.config.topics_path())?;
        export::export_comments(&comments, &self.config.comments_path())?;
        Ok(())
    }
}
