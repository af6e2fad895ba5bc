//! Running: step-based distance, speed-driven calories.

use super::training::{METERS_PER_KM, Training, WorkoutRecord, is_divisor};
use super::workout::WorkoutError;

const SPEED_MULTIPLIER: f64 = 18.0;
const SPEED_SHIFT: f64 = 20.0;

/// A running workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    /// Build a running workout. Fails on a zero or NaN duration.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if !is_divisor(duration_hours) {
            return Err(WorkoutError::ZeroDuration);
        }
        Ok(Self {
            record: WorkoutRecord::new(action_count, duration_hours, weight_kg),
        })
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories_kcal(&self) -> f64 {
        (SPEED_MULTIPLIER * self.mean_speed_kmh() - SPEED_SHIFT) * self.record.weight_kg()
            / METERS_PER_KM
            * self.record.duration_minutes()
    }
}
