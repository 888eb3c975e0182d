pub mod db;
pub mod generator;
pub mod loader;
pub mod sensor;
pub mod store;
pub mod synth;
