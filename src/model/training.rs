//! Training: the calorie model every workout variant implements.

use super::summary::Summary;

/// Meters in a kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Distance covered by one step, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Whether a value can safely divide: not zero and not NaN.
pub(super) fn is_divisor(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Raw sensor measurements shared by every workout.
///
/// Fields are private: once built, a record does not change.
/// Construction goes through the variant constructors, which
/// reject a zero or NaN duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutRecord {
    pub(super) fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Steps or strokes counted by the sensor.
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Workout duration in hours. Never zero or NaN.
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Participant weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Duration in minutes, the unit the calorie formulas work in.
    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * MINUTES_PER_HOUR
    }
}

/// A workout with a calorie model.
///
/// `distance_km` and `mean_speed_kmh` have defaults that fit step-based
/// workouts. `calories_kcal` has none: every variant supplies its own formula.
pub trait Training {
    /// The variant's simple name, as shown in the summary.
    fn label(&self) -> &'static str;

    /// The measurements this workout was built from.
    fn record(&self) -> &WorkoutRecord;

    /// Distance covered by one action (step or stroke), in meters.
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered, in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.record().action_count()) * self.step_length_m() / METERS_PER_KM
    }

    /// Average speed over the whole workout, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.record().duration_hours()
    }

    /// Energy spent, in kilocalories.
    fn calories_kcal(&self) -> f64;

    /// Compute every metric and collect them into a summary.
    fn summary(&self) -> Summary {
        Summary {
            training_type: self.label().to_string(),
            duration_hours: self.record().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
