//! Summary: the computed metrics of one workout and their rendering.

use std::fmt;

use serde::Serialize;

/// Everything computed for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// The summary as a single human-readable line.
    pub fn message(&self) -> String {
        format_message(
            &self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Render workout metrics into the fixed summary line.
///
/// Every number is shown with exactly three decimals.
pub fn format_message(
    training_type: &str,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
) -> String {
    format!(
        "Тип тренировки: {training_type}; \
         Длительность: {duration_hours:.3} ч.; \
         Дистанция: {distance_km:.3} км; \
         Ср. скорость: {mean_speed_kmh:.3} км/ч; \
         Потрачено ккал: {calories_kcal:.3}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_three_decimals() {
        let line = format_message("Running", 1.0, 9.75, 9.75, 686.25);
        assert_eq!(
            line,
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 686.250."
        );
    }

    #[test]
    fn display_matches_message() {
        let summary = Summary {
            training_type: "Swimming".into(),
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        };
        assert_eq!(summary.to_string(), summary.message());
        assert!(summary.message().contains("Дистанция: 0.994 км"));
    }

    #[test]
    fn serializes_camel_case() {
        let summary = Summary {
            training_type: "Running".into(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 699.75,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["trainingType"], "Running");
        assert_eq!(json["meanSpeedKmh"], 9.75);
        assert_eq!(json["caloriesKcal"], 699.75);
    }
}
