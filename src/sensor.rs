mod controller;
mod reading;
mod sensor_range;

pub use controller::*;
pub use reading::*;
pub use sensor_range::*;
