use core::ops::Range;

use crate::constants::SAMPLES_PER_UNIT;

/// Source of randomness for simulated sensors.
///
/// Implementors only have to provide raw 32-bit draws; `uniform` maps them
/// onto a half-open range. The firmware backs this with the ESP32 hardware
/// RNG, tests with seeded or scripted sources.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Draw a value from `range`, quantized to `1 / SAMPLES_PER_UNIT`.
    ///
    /// The result is always `>= range.start` and `< range.end`. An empty or
    /// inverted range yields `range.start`.
    fn uniform(&mut self, range: Range<f32>) -> f32 {
        let steps = ((range.end - range.start) * SAMPLES_PER_UNIT) as u32;
        if steps == 0 {
            return range.start;
        }

        // Stay in whole steps until the single final division
        let step = self.next_u32() % steps;
        (range.start * SAMPLES_PER_UNIT + step as f32) / SAMPLES_PER_UNIT
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn uniform(&mut self, range: Range<f32>) -> f32 {
        (**self).uniform(range)
    }
}
