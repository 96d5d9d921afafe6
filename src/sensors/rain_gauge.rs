use log::{debug, warn};

use super::{Sensor, SensorError};
use crate::constants::{RAINFALL_RANGE_MM, WATER_LEVEL_RANGE_CM};
use crate::reading::Reading;
use crate::rng::RandomSource;

/// Rain gauge and water level probe stand-in.
///
/// Every measurement is two independent draws from the random source:
/// rainfall first, then water level.
pub struct SimulatedRainGauge<R> {
    rng: R,
}

impl<R: RandomSource> SimulatedRainGauge<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn sample(&mut self) -> Reading {
        let rainfall_mm = self.rng.uniform(RAINFALL_RANGE_MM);
        let water_level_cm = self.rng.uniform(WATER_LEVEL_RANGE_CM);
        Reading::new(rainfall_mm, water_level_cm)
    }
}

impl<R: RandomSource> Sensor for SimulatedRainGauge<R> {
    async fn measure(&mut self) -> Result<Reading, SensorError> {
        let reading = self.sample();
        debug!("Simulated reading: {:?}", reading);

        // A custom source may ignore the requested range
        if !reading.is_within_range() {
            warn!("Reading out of range: {:?}", reading);
            return Err(SensorError::MeasurementFailure);
        }
        Ok(reading)
    }
}
