mod args;
mod logging;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use plantbuddy_datagen::{
    db::{SqliteReadingSink, SqliteReferenceStore, new_pool},
    generator::{GeneratorConfig, SystemClock, generate},
    loader::load_controller_sensor_map,
};
use rand::{SeedableRng as _, rngs::StdRng};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();
    args.logging.init()?;

    let pool = new_pool(&args.database_url)
        .await
        .context("failed to connect to database")?;

    let controllers = load_controller_sensor_map(&SqliteReferenceStore::new(pool.clone()))
        .await
        .context("failed to load reference data")?;
    info!(controllers = controllers.len(), "loaded reference data");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = GeneratorConfig {
        commit_every: args.commit_every,
        termination: args.termination,
        ..Default::default()
    };

    let mut sink = SqliteReadingSink::new(pool);
    let summary = generate(&controllers, &mut sink, &SystemClock, &mut rng, &config)
        .await
        .context("failed to generate sensor data")?;
    info!(
        timestamps = summary.timestamps,
        commits = summary.commits,
        "generation finished"
    );

    println!("Generated {} sensor data entries", summary.readings);

    Ok(())
}
