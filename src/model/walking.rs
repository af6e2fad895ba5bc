//! Sports walking: step-based distance, calories weighted by height.

use super::training::{Training, WorkoutRecord, is_divisor};
use super::workout::WorkoutError;

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// A sports walking workout.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    record: WorkoutRecord,
    height_cm: f64,
}

impl SportsWalking {
    /// Build a walking workout. Fails on a zero or NaN duration or height.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        if !is_divisor(duration_hours) {
            return Err(WorkoutError::ZeroDuration);
        }
        if !is_divisor(height_cm) {
            return Err(WorkoutError::ZeroHeight);
        }
        Ok(Self {
            record: WorkoutRecord::new(action_count, duration_hours, weight_kg),
            height_cm,
        })
    }

    /// Participant height in centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn calories_kcal(&self) -> f64 {
        let weight = self.record.weight_kg();
        // Floor division: the height term is a step function, not a ratio.
        let speed_over_height = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();
        (WEIGHT_MULTIPLIER * weight + speed_over_height * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.record.duration_minutes()
    }
}
