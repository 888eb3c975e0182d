use std::num::NonZeroUsize;

use clap::Parser;
use plantbuddy_datagen::generator::Termination;

use crate::logging::LoggingArgs;

#[derive(Debug, Parser)]
#[command(about = "Backfills SENSOR_DATA with simulated readings for every controller")]
pub struct Args {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://buddy.sqlite")]
    pub database_url: String,

    /// Completed timestamps per commit
    #[arg(long, default_value = "1")]
    pub commit_every: NonZeroUsize,

    #[arg(long, value_enum, default_value = "snapshot")]
    pub termination: Termination,

    /// Seed for reproducible values
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}
