use std::collections::HashMap;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::sensor::{ControllerSensorMap, SensorRange};
use crate::store::ReferenceStore;

/// Maps every controller to the sensor ranges of its plant group.
///
/// Ranges are read once per distinct plant group. Controllers keep the order
/// the store returned them in; a repeated controller id keeps its first
/// position and takes the ranges of its last row.
pub async fn load_controller_sensor_map<S: ReferenceStore>(
    store: &S,
) -> Result<ControllerSensorMap> {
    let controllers = store
        .load_controllers()
        .await
        .context("failed to load controllers")?;
    debug!(count = controllers.len(), "loaded controllers");

    let mut ranges_by_group: HashMap<i64, Vec<SensorRange>> = HashMap::new();
    let mut map = ControllerSensorMap::with_capacity(controllers.len());

    for controller in controllers {
        let ranges = match ranges_by_group.get(&controller.plant_group) {
            Some(ranges) => ranges.clone(),
            None => {
                let ranges = store
                    .load_sensor_ranges(controller.plant_group)
                    .await
                    .with_context(|| {
                        format!(
                            "failed to load sensor ranges for plant group {}",
                            controller.plant_group
                        )
                    })?;
                debug!(
                    plant_group = controller.plant_group,
                    count = ranges.len(),
                    "loaded sensor ranges"
                );
                ranges_by_group.insert(controller.plant_group, ranges.clone());
                ranges
            }
        };

        map.insert(controller.id, ranges);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::bail;

    use super::*;
    use crate::sensor::Controller;

    #[derive(Default)]
    struct FakeStore {
        controllers: Vec<Controller>,
        ranges: HashMap<i64, Vec<SensorRange>>,
        fail_controllers: bool,
        fail_ranges: bool,
        range_queries: RefCell<Vec<i64>>,
    }

    impl ReferenceStore for FakeStore {
        async fn load_controllers(&self) -> Result<Vec<Controller>> {
            if self.fail_controllers {
                bail!("no such table: CONTROLLER");
            }
            Ok(self.controllers.clone())
        }

        async fn load_sensor_ranges(&self, plant_group: i64) -> Result<Vec<SensorRange>> {
            self.range_queries.borrow_mut().push(plant_group);
            if self.fail_ranges {
                bail!("disk I/O error");
            }
            Ok(self.ranges.get(&plant_group).cloned().unwrap_or_default())
        }
    }

    fn controller(id: &str, plant_group: i64) -> Controller {
        Controller {
            id: id.to_owned(),
            plant_group,
        }
    }

    fn range(sensor: &str, min: f64, max: f64) -> SensorRange {
        SensorRange::new(sensor, min, max).unwrap()
    }

    #[tokio::test]
    async fn maps_controllers_in_load_order() {
        let store = FakeStore {
            controllers: vec![controller("b", 2), controller("a", 1), controller("c", 2)],
            ranges: HashMap::from([
                (
                    1,
                    vec![
                        range("temperature", 15.0, 30.0),
                        range("humidity", 40.0, 80.0),
                    ],
                ),
                (2, vec![range("light", 0.0, 20.0)]),
            ]),
            ..Default::default()
        };

        let map = load_controller_sensor_map(&store).await.unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        let sensors: Vec<_> = map["a"].iter().map(SensorRange::sensor).collect();
        assert_eq!(sensors, ["temperature", "humidity"]);
        assert_eq!(map["b"], map["c"]);
    }

    #[tokio::test]
    async fn reads_each_plant_group_once() {
        let store = FakeStore {
            controllers: vec![controller("a", 1), controller("b", 1), controller("c", 3)],
            ..Default::default()
        };

        load_controller_sensor_map(&store).await.unwrap();

        assert_eq!(*store.range_queries.borrow(), [1, 3]);
    }

    #[tokio::test]
    async fn plant_group_without_ranges_maps_to_empty_list() {
        let store = FakeStore {
            controllers: vec![controller("lonely", 9)],
            ..Default::default()
        };

        let map = load_controller_sensor_map(&store).await.unwrap();

        assert_eq!(map.len(), 1);
        assert!(map["lonely"].is_empty());
    }

    #[tokio::test]
    async fn range_read_failure_is_fatal() {
        let store = FakeStore {
            controllers: vec![controller("a", 1)],
            fail_ranges: true,
            ..Default::default()
        };

        let err = load_controller_sensor_map(&store).await.unwrap_err();

        assert!(format!("{err:#}").contains("plant group 1"), "{err:#}");
    }

    #[tokio::test]
    async fn controller_read_failure_is_fatal() {
        let store = FakeStore {
            controllers: vec![controller("a", 1)],
            fail_controllers: true,
            ..Default::default()
        };

        let err = load_controller_sensor_map(&store).await.unwrap_err();

        assert!(format!("{err:#}").contains("failed to load controllers"), "{err:#}");
        assert!(store.range_queries.borrow().is_empty());
    }
}
