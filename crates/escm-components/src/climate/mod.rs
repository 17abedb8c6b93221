//! Climate response components

mod temperature;

pub use temperature::TemperatureResponse;
