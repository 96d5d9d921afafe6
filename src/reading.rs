use core::fmt;

use crate::constants::{RAINFALL_RANGE_MM, WATER_LEVEL_RANGE_CM};

/// One sampled rainfall / water level pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Rainfall in millimeters, in `[0, 50)`
    pub rainfall_mm: f32,
    /// Water level in centimeters, in `[50, 150)`
    pub water_level_cm: f32,
}

impl Reading {
    pub const fn new(rainfall_mm: f32, water_level_cm: f32) -> Self {
        Self {
            rainfall_mm,
            water_level_cm,
        }
    }

    /// True when both values fall inside their simulated ranges.
    pub fn is_within_range(&self) -> bool {
        RAINFALL_RANGE_MM.contains(&self.rainfall_mm)
            && WATER_LEVEL_RANGE_CM.contains(&self.water_level_cm)
    }
}

/// Renders the JSON record sent over the console, e.g. `{"rain":12.5,"level":87.3}`.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"rain\":{},\"level\":{}}}",
            self.rainfall_mm, self.water_level_cm
        )
    }
}
