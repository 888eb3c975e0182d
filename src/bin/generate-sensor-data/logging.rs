use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Debug, Clone, Parser)]
pub struct LoggingArgs {
    /// Use `debug` to log every commit
    #[arg(long, value_enum, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

impl LoggingArgs {
    /// Installs the global subscriber for the run.
    ///
    /// Load and commit progress is written to stderr, so piping stdout yields
    /// only the `Generated N sensor data entries` line.
    pub fn init(&self) -> Result<()> {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.log_level)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .context("failed to set global tracing subscriber")
    }
}
