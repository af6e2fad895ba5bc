//! Core data model for fittrack.
//!
//! Workouts are built from raw tracker readings. Each variant implements
//! the `Training` calorie model and produces a `Summary`.

mod running;
mod summary;
mod swimming;
mod training;
mod walking;
mod workout;

pub use running::Running;
pub use summary::{Summary, format_message};
pub use swimming::Swimming;
pub use training::{METERS_PER_KM, MINUTES_PER_HOUR, STEP_LENGTH_M, Training, WorkoutRecord};
pub use walking::SportsWalking;
pub use workout::{Workout, WorkoutCode, WorkoutError};

/// Assert two floats agree to within rounding noise.
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_non_negative_for_every_variant() {
        let workouts = [
            Workout::Running(Running::new(0, 1.0, 70.0).unwrap()),
            Workout::Walking(SportsWalking::new(0, 1.0, 70.0, 170.0).unwrap()),
            Workout::Swimming(Swimming::new(0, 1.0, 70.0, 25.0, 0).unwrap()),
            Workout::Running(Running::new(u32::MAX, 3.0, 70.0).unwrap()),
        ];
        for workout in &workouts {
            assert!(workout.as_training().distance_km() >= 0.0);
        }
    }

    #[test]
    fn summary_collects_metrics() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        let summary = walk.summary();
        assert_eq!(summary.training_type, "SportsWalking");
        assert_close(summary.duration_hours, 1.0);
        assert_close(summary.distance_km, 5.85);
        assert_close(summary.mean_speed_kmh, 5.85);
        assert_close(summary.calories_kcal, 157.5);
    }

    #[test]
    fn summary_is_idempotent() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_eq!(swim.summary(), swim.summary());
    }
}
