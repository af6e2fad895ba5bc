//! Swimming: speed from pool length and laps rather than strokes.

use super::training::{METERS_PER_KM, Training, WorkoutRecord, is_divisor};
use super::workout::WorkoutError;

/// Distance covered by one stroke, in meters.
const STROKE_LENGTH_M: f64 = 1.38;

const SPEED_SHIFT: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

/// A swimming workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    /// Build a swimming workout. Fails on a zero or NaN duration.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self, WorkoutError> {
        if !is_divisor(duration_hours) {
            return Err(WorkoutError::ZeroDuration);
        }
        Ok(Self {
            record: WorkoutRecord::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        })
    }

    /// Pool length in meters.
    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum.
    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / METERS_PER_KM
            / self.record.duration_hours()
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.record.weight_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::assert_close;

    #[test]
    fn reference_swim() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_close(swim.mean_speed_kmh(), 1.0);
        assert_close(swim.calories_kcal(), 336.0);
    }

    #[test]
    fn distance_uses_stroke_length() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_close(swim.distance_km(), 0.9936);
    }

    #[test]
    fn speed_ignores_stroke_count() {
        let few = Swimming::new(10, 1.5, 80.0, 50.0, 30).unwrap();
        let many = Swimming::new(5000, 1.5, 80.0, 50.0, 30).unwrap();
        assert_close(few.mean_speed_kmh(), many.mean_speed_kmh());
        assert_close(few.calories_kcal(), many.calories_kcal());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = Swimming::new(720, 0.0, 80.0, 25.0, 40).unwrap_err();
        assert!(matches!(err, WorkoutError::ZeroDuration));

        let err = Swimming::new(720, f64::NAN, 80.0, 25.0, 40).unwrap_err();
        assert!(matches!(err, WorkoutError::ZeroDuration));
    }
}
