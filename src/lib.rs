//! Lifeline sensor node.
//!
//! Simulated rain gauge and water level probe: every measurement interval a
//! reading is drawn from a random source and printed on the serial console as
//!
//! ```text
//! Payload: {"rain":12.5,"level":87.3}
//! ```
//!
//! Everything here is hardware independent and `no_std`. The ESP32 wiring
//! (UART, hardware RNG, executor) lives in the firmware binary, built with the
//! `firmware` feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod constants;
pub mod measurement;
pub mod reading;
pub mod rng;
pub mod schedule;
pub mod sensors;

pub use config::{Config, CONFIG};
pub use console::Console;
pub use measurement::Measurement;
pub use reading::Reading;
pub use rng::RandomSource;
pub use schedule::RunSummary;
pub use sensors::{Sensor, SimulatedRainGauge};
