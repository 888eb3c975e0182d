use indexmap::IndexMap;

use crate::sensor::SensorRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    pub id: String,

    pub plant_group: i64,
}

/// Controller id to the sensor ranges of its plant group, in load order.
pub type ControllerSensorMap = IndexMap<String, Vec<SensorRange>>;
