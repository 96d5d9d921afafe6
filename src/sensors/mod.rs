#![allow(async_fn_in_trait)]

use crate::reading::Reading;

pub mod rain_gauge;

pub use rain_gauge::SimulatedRainGauge;

#[derive(Debug)]
pub enum SensorError {
    MeasurementFailure,
}

/// A device able to produce one [`Reading`] per call.
pub trait Sensor {
    async fn measure(&mut self) -> Result<Reading, SensorError>;
}
