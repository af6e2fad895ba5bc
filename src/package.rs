//! Package reading: turning raw tracker packages into typed workouts.
//!
//! A package is a workout code plus the positional values the tracker sent.
//! Values are bound in the declaration order of the target workout's
//! constructor; see [`WorkoutCode::fields`].

use serde::Deserialize;
use tracing::debug;

use crate::model::{Running, SportsWalking, Swimming, Workout, WorkoutCode, WorkoutError};

/// One raw sensor package.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Build the workout this package describes. See [`read_package`].
    pub fn read(&self) -> Result<Option<Workout>, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// Build a workout from a code and its positional values.
///
/// Returns `Ok(None)` when the code is unknown: nothing is built and the
/// caller decides whether to skip it. A known code with the wrong number of
/// values, a fractional count, or a zero duration or height is an error.
pub fn read_package(code: &str, data: &[f64]) -> Result<Option<Workout>, WorkoutError> {
    let Some(code) = WorkoutCode::parse(code) else {
        return Ok(None);
    };

    let workout = match (code, data) {
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Workout::Running(Running::new(count("action_count", action)?, duration, weight)?)
        }
        (WorkoutCode::Walk, &[action, duration, weight, height]) => Workout::Walking(
            SportsWalking::new(count("action_count", action)?, duration, weight, height)?,
        ),
        (WorkoutCode::Swim, &[action, duration, weight, length, laps]) => {
            Workout::Swimming(Swimming::new(
                count("action_count", action)?,
                duration,
                weight,
                length,
                count("pool_laps", laps)?,
            )?)
        }
        _ => {
            return Err(WorkoutError::Arity {
                code,
                expected: code.arity(),
                actual: data.len(),
            });
        }
    };

    debug!(%code, "built {} workout", workout.as_training().label());
    Ok(Some(workout))
}

/// Convert a positional value into a count field.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(WorkoutError::NotACount { field, value });
    }
    Ok(value as u32)
}

/// The fixed packages the tracker sends in its demo run.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
