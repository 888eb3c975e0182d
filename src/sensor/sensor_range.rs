use anyhow::{Result, bail};

/// Valid `[min, max]` bounds of one sensor within a plant group.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorRange {
    sensor: String,

    min: f64,

    max: f64,
}

impl SensorRange {
    /// Rejects non-finite bounds, inverted ranges (`min > max`) and ranges
    /// too wide or too large to sample and round to two decimals.
    pub fn new(sensor: impl Into<String>, min: f64, max: f64) -> Result<Self> {
        let sensor = sensor.into();

        if !min.is_finite() || !max.is_finite() {
            bail!("sensor range for {sensor} has non-finite bounds: [{min}, {max}]");
        }

        if min > max {
            bail!("sensor range for {sensor} is inverted: min {min} > max {max}");
        }

        if !(max - min).is_finite() {
            bail!("sensor range for {sensor} is too wide to sample: [{min}, {max}]");
        }

        if !(min * 100.0).is_finite() || !(max * 100.0).is_finite() {
            bail!("sensor range for {sensor} is too large to round: [{min}, {max}]");
        }

        Ok(Self { sensor, min, max })
    }

    pub fn sensor(&self) -> &str {
        &self.sensor
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
