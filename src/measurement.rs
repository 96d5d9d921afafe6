use core::fmt::Write as _;

use embedded_io_async::Write;
use heapless::String;
use log::debug;

use crate::console::{self, Console};
use crate::constants::{PAYLOAD_BUFFER_SIZE, PAYLOAD_PREFIX};
use crate::reading::Reading;
use crate::sensors::Sensor;

#[derive(Debug)]
pub enum Error {
    Sensor,
    Format,
    Console(console::Error),
}

/// One measurement cycle: read the sensor, format the payload, print it.
pub struct Measurement<S, W> {
    sensor: S,
    console: Console<W>,
}

impl<S, W> Measurement<S, W>
where
    S: Sensor,
    W: Write,
{
    pub fn new(sensor: S, console: Console<W>) -> Self {
        Self { sensor, console }
    }

    pub async fn take(&mut self) -> Result<Reading, Error> {
        // Measure sensor data first
        let reading = self.sensor.measure().await.map_err(|_| Error::Sensor)?;

        let message = format_payload(&reading).map_err(|_| Error::Format)?;
        debug!("Formatted payload: {}", message);

        self.console
            .write_line(format_args!("{}{}", PAYLOAD_PREFIX, message))
            .await
            .map_err(Error::Console)?;

        Ok(reading)
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn into_parts(self) -> (S, Console<W>) {
        (self.sensor, self.console)
    }
}

pub fn format_payload(reading: &Reading) -> Result<String<PAYLOAD_BUFFER_SIZE>, core::fmt::Error> {
    let mut payload: String<PAYLOAD_BUFFER_SIZE> = String::new();
    write!(payload, "{}", reading)?;
    Ok(payload)
}
