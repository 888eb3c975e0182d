//! Seams between the generator and the data store.

use std::future::Future;

use anyhow::Result;

use crate::sensor::{Controller, Reading, SensorRange};

/// Read side: controllers and the sensor ranges of their plant groups.
pub trait ReferenceStore {
    /// Every controller, in the order the store returns them.
    fn load_controllers(&self) -> impl Future<Output = Result<Vec<Controller>>>;

    /// Ranges whose plant group equals `plant_group`.
    fn load_sensor_ranges(&self, plant_group: i64)
    -> impl Future<Output = Result<Vec<SensorRange>>>;
}

/// Write side: staged readings become durable together on `commit`.
pub trait ReadingSink {
    fn append(&mut self, reading: &Reading) -> impl Future<Output = Result<()>>;

    fn commit(&mut self) -> impl Future<Output = Result<()>>;
}
