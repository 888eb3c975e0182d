//! Time-series generation over the controller sensor map.
//!
//! A cursor starts at [`GeneratorConfig::start`] and advances by
//! [`GeneratorConfig::step`] while it is strictly before the termination
//! bound. Every step emits one reading per controller and sensor range,
//! visiting controllers in map order and sensors in range order.

use std::num::NonZeroUsize;

use anyhow::{Context as _, Result, bail};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use clap::ValueEnum;
use rand::Rng;
use tracing::{debug, info};

use crate::sensor::{ControllerSensorMap, Reading};
use crate::store::ReadingSink;
use crate::synth::synthesize_value;

/// First timestamp of a default run: 2023-05-20T00:00:00.
pub const DEFAULT_START: NaiveDateTime = NaiveDate::from_ymd_opt(2023, 5, 20)
    .unwrap()
    .and_time(NaiveTime::MIN);

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// How the termination bound is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Termination {
    /// Read the clock once before the first step.
    #[default]
    Snapshot,

    /// Re-read the clock before every step, so a slower run covers more time.
    WallClock,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub start: NaiveDateTime,

    pub step: TimeDelta,

    /// Number of completed timestamps per commit.
    pub commit_every: NonZeroUsize,

    pub termination: Termination,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            step: TimeDelta::minutes(5),
            commit_every: NonZeroUsize::MIN,
            termination: Termination::Snapshot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    pub readings: u64,

    pub timestamps: u64,

    pub commits: u64,
}

pub async fn generate<S, C, R>(
    map: &ControllerSensorMap,
    sink: &mut S,
    clock: &C,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<GenerationSummary>
where
    S: ReadingSink,
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    if config.step <= TimeDelta::zero() {
        bail!("step must be positive, got {}", config.step);
    }

    let snapshot = match config.termination {
        Termination::Snapshot => Some(clock.now()),
        Termination::WallClock => None,
    };
    let bound = || snapshot.unwrap_or_else(|| clock.now());

    info!(
        start = %config.start,
        step = %config.step,
        controllers = map.len(),
        termination = ?config.termination,
        "generating sensor data"
    );

    let mut summary = GenerationSummary::default();
    let mut uncommitted = 0;
    let mut t = config.start;

    while t < bound() {
        for (controller, ranges) in map {
            for range in ranges {
                let reading = Reading {
                    controller: controller.clone(),
                    sensor: range.sensor().to_owned(),
                    value: synthesize_value(range, rng),
                    timestamp: t,
                };

                sink.append(&reading).await.with_context(|| {
                    format!(
                        "failed to write {} reading of controller {controller} at {t}",
                        range.sensor()
                    )
                })?;
                summary.readings += 1;
            }
        }

        summary.timestamps += 1;
        uncommitted += 1;

        if uncommitted == config.commit_every.get() {
            sink.commit()
                .await
                .with_context(|| format!("failed to commit readings up to {t}"))?;
            summary.commits += 1;
            uncommitted = 0;
            debug!(timestamp = %t, readings = summary.readings, "committed");
        }

        t += config.step;
    }

    if uncommitted > 0 {
        sink.commit()
            .await
            .context("failed to commit remaining readings")?;
        summary.commits += 1;
    }

    Ok(summary)
}
