//! Training report formatting
//!
//! Dispatches a session to the formula set of its activity kind and renders
//! the result either as the fixed five-line text report or as a JSON envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::{
    distance, mean_speed, running_calories, swimming_calories, swimming_mean_speed,
    walking_calories,
};
use crate::error::TrackerError;
use crate::types::{ActivityKind, TrainingSession, TrainingSummary};
use crate::{FTRACKER_VERSION, PRODUCER_NAME};

/// Text returned by [`format_report`] for a label it does not recognize
pub const UNKNOWN_ACTIVITY_MESSAGE: &str = "неизвестный тип тренировки";

/// Compute the summary for a session using the formulas of `kind`.
///
/// Distance is always step based; swimming only swaps the speed and
/// calorie formulas.
pub fn summarize(kind: ActivityKind, session: &TrainingSession) -> TrainingSummary {
    let duration_h = session.duration_h;
    let distance_km = distance(session.action);

    let (speed_kmh, calories_kcal) = match kind {
        ActivityKind::Running => (
            mean_speed(session.action, duration_h),
            running_calories(session.action, session.weight_kg, duration_h),
        ),
        ActivityKind::Walking => (
            mean_speed(session.action, duration_h),
            walking_calories(
                session.action,
                duration_h,
                session.weight_kg,
                session.height_cm,
            ),
        ),
        ActivityKind::Swimming => (
            swimming_mean_speed(session.pool_length_m, session.pool_laps, duration_h),
            swimming_calories(
                session.pool_length_m,
                session.pool_laps,
                duration_h,
                session.weight_kg,
            ),
        ),
    };

    log::debug!(
        "{} session: {:.3} km, {:.3} km/h, {:.3} kcal",
        kind.as_str(),
        distance_km,
        speed_kmh,
        calories_kcal
    );

    TrainingSummary {
        activity: kind,
        duration_h,
        distance_km,
        speed_kmh,
        calories_kcal,
    }
}

impl TrainingSession {
    /// Summarize this session with the formulas of its own activity kind
    pub fn summary(&self) -> TrainingSummary {
        summarize(self.activity, self)
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Тип тренировки: {}", self.activity.label())?;
        writeln!(f, "Длительность: {:.2} ч.", self.duration_h)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories_kcal)
    }
}

/// Build the text report for a training session selected by label.
///
/// # Arguments
/// * `action` - Steps (running, walking) or strokes (swimming)
/// * `activity_label` - `Бег`, `Ходьба`, `Плавание` or an English activity name
/// * `duration_h` - Duration in hours
/// * `weight_kg` - Body weight
/// * `height_cm` - Body height, used by walking
/// * `pool_length_m` - Pool length, used by swimming
/// * `pool_laps` - Pool lengths completed, used by swimming
///
/// # Returns
/// The five-line report, or [`UNKNOWN_ACTIVITY_MESSAGE`] when the label is
/// not recognized.
pub fn format_report(
    action: u32,
    activity_label: &str,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_laps: u32,
) -> String {
    let activity = match activity_label.parse::<ActivityKind>() {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("{e}");
            return UNKNOWN_ACTIVITY_MESSAGE.to_string();
        }
    };

    let session = TrainingSession {
        activity,
        action,
        duration_h,
        weight_kg,
        height_cm,
        pool_length_m,
        pool_laps,
    };

    session.summary().to_string()
}

/// Machine-readable wrapper around a [`TrainingSummary`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEnvelope {
    /// Producer name
    pub producer: String,
    /// Producer version
    pub version: String,
    /// When the summary was encoded
    pub computed_at_utc: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: TrainingSummary,
}

impl SummaryEnvelope {
    /// Wrap a summary stamped with the current time
    pub fn new(summary: TrainingSummary) -> Self {
        Self {
            producer: PRODUCER_NAME.to_string(),
            version: FTRACKER_VERSION.to_string(),
            computed_at_utc: Utc::now(),
            summary,
        }
    }
}

/// Encode a summary as a JSON envelope
pub fn encode_summary_json(summary: &TrainingSummary) -> Result<String, TrackerError> {
    let envelope = SummaryEnvelope::new(summary.clone());
    Ok(serde_json::to_string(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_running_report() {
        // 15000 steps = 9.75 km in 1.5 h
        let report = format_report(15_000, "Бег", 1.5, 70.0, 175.0, 0, 0);

        let speed = 9.75 / 1.5;
        let calories = 18.0 * speed * 1.79 * 70.0 * 1.5 * 60.0 / 1000.0;
        let expected = format!(
            "Тип тренировки: Бег\nДлительность: 1.50 ч.\nДистанция: 9.75 км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}\n",
            speed, calories
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_walking_report() {
        let report = format_report(9_000, "Ходьба", 1.0, 85.0, 185.0, 0, 0);
        let calories = walking_calories(9_000, 1.0, 85.0, 185.0);

        let expected = format!(
            "Тип тренировки: Ходьба\nДлительность: 1.00 ч.\nДистанция: 5.85 км.\nСкорость: 5.85 км/ч\nСожгли калорий: {:.2}\n",
            calories
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_swimming_report() {
        // 25 m * 40 laps = 1 km in 1 h; distance still comes from strokes
        let report = format_report(2_000, "Плавание", 1.0, 70.0, 0.0, 25, 40);

        assert_eq!(
            report,
            "Тип тренировки: Плавание\n\
             Длительность: 1.00 ч.\n\
             Дистанция: 1.30 км.\n\
             Скорость: 1.00 км/ч\n\
             Сожгли калорий: 294.00\n"
        );
    }

    #[test]
    fn test_unknown_activity_report() {
        let report = format_report(10_000, "Йога", 1.0, 70.0, 175.0, 25, 40);
        assert_eq!(report, UNKNOWN_ACTIVITY_MESSAGE);
        assert_eq!(report, "неизвестный тип тренировки");
    }

    #[test]
    fn test_english_label_renders_report_label() {
        let report = format_report(1_000, "running", 1.0, 70.0, 0.0, 0, 0);
        assert!(report.starts_with("Тип тренировки: Бег\n"));
    }

    #[test]
    fn test_zero_duration_report() {
        let report = format_report(6_000, "Бег", 0.0, 70.0, 0.0, 0, 0);
        assert_eq!(
            report,
            "Тип тренировки: Бег\n\
             Длительность: 0.00 ч.\n\
             Дистанция: 3.90 км.\n\
             Скорость: 0.00 км/ч\n\
             Сожгли калорий: 0.00\n"
        );
    }

    #[test]
    fn test_summarize_overrides_session_kind() {
        let session = TrainingSession {
            activity: ActivityKind::Running,
            action: 1_000,
            duration_h: 1.0,
            weight_kg: 70.0,
            height_cm: 0.0,
            pool_length_m: 25,
            pool_laps: 10,
        };

        let summary = summarize(ActivityKind::Swimming, &session);
        assert_eq!(summary.activity, ActivityKind::Swimming);
        assert_eq!(summary.distance_km, 0.65);
        assert_eq!(summary.speed_kmh, swimming_mean_speed(25, 10, 1.0));
        assert_eq!(summary.calories_kcal, swimming_calories(25, 10, 1.0, 70.0));

        assert_eq!(session.summary().activity, ActivityKind::Running);
    }

    #[test]
    fn test_encode_summary_json() {
        let session = TrainingSession {
            activity: ActivityKind::Walking,
            action: 1_000,
            duration_h: 1.0,
            weight_kg: 70.0,
            height_cm: 170.0,
            pool_length_m: 0,
            pool_laps: 0,
        };

        let json = encode_summary_json(&session.summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["producer"], PRODUCER_NAME);
        assert_eq!(value["version"], FTRACKER_VERSION);
        assert_eq!(value["activity"], "walking");
        assert_eq!(value["distance_km"], 0.65);
        assert!(value["computed_at_utc"].is_string());

        let envelope: SummaryEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope.summary, session.summary());
    }
}
