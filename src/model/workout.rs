//! Workout: the closed set of workout variants and the codes that select them.

use std::fmt;

use super::running::Running;
use super::swimming::Swimming;
use super::training::Training;
use super::walking::SportsWalking;

/// Errors that can occur while building a workout from sensor data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("{code} expects {expected} values, got {actual}")]
    Arity {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be a non-negative whole number, got {value}")]
    NotACount { field: &'static str, value: f64 },

    #[error("duration must be a non-zero number")]
    ZeroDuration,

    #[error("height must be a non-zero number")]
    ZeroHeight,
}

/// Short code sent by the tracker to identify the workout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    /// `SWM`: swimming.
    Swim,
    /// `RUN`: running.
    Run,
    /// `WLK`: sports walking.
    Walk,
}

impl WorkoutCode {
    /// Every known code, in display order.
    pub const ALL: [Self; 3] = [Self::Swim, Self::Run, Self::Walk];

    /// Look up a code. Returns `None` for anything unrecognized.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(Self::Swim),
            "RUN" => Some(Self::Run),
            "WLK" => Some(Self::Walk),
            _ => None,
        }
    }

    /// The code as sent by the tracker.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Swim => "SWM",
            Self::Run => "RUN",
            Self::Walk => "WLK",
        }
    }

    /// Positional fields expected for this code, in order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Swim => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
            Self::Run => &["action_count", "duration_hours", "weight_kg"],
            Self::Walk => &["action_count", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    /// Number of positional values expected for this code.
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    /// The label of the workout this code builds.
    pub fn label(self) -> &'static str {
        match self {
            Self::Swim => "Swimming",
            Self::Run => "Running",
            Self::Walk => "SportsWalking",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built workout of any known type.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// View the workout through its calorie model.
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(w) => w,
            Self::Walking(w) => w,
            Self::Swimming(w) => w,
        }
    }

    /// The code this workout is built from.
    pub fn code(&self) -> WorkoutCode {
        match self {
            Self::Running(_) => WorkoutCode::Run,
            Self::Walking(_) => WorkoutCode::Walk,
            Self::Swimming(_) => WorkoutCode::Swim,
        }
    }
}
