//! Core types for ftracker
//!
//! Activity kinds, recorded training sessions and their computed summaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, ValidationError};

/// Training discipline selecting the formula set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    /// All supported activity kinds
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    /// Label printed in training reports
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Бег",
            ActivityKind::Walking => "Ходьба",
            ActivityKind::Swimming => "Плавание",
        }
    }

    /// Stable machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Running => "running",
            ActivityKind::Walking => "walking",
            ActivityKind::Swimming => "swimming",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    /// Report labels match exactly; English names match ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| s == kind.label() || s.eq_ignore_ascii_case(kind.as_str()))
            .ok_or_else(|| TrackerError::UnknownActivity(s.to_string()))
    }
}

/// A single recorded training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Training discipline
    pub activity: ActivityKind,
    /// Steps (running, walking) or strokes (swimming)
    pub action: u32,
    /// Duration in hours
    pub duration_h: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body height (cm), used by walking
    #[serde(default)]
    pub height_cm: f64,
    /// Pool length (m), used by swimming
    #[serde(default)]
    pub pool_length_m: u32,
    /// Number of pool lengths completed, used by swimming
    #[serde(default)]
    pub pool_laps: u32,
}

impl TrainingSession {
    /// Check that the session describes a physically meaningful workout.
    ///
    /// The calculator accepts anything; callers that want to reject
    /// nonsensical inputs run this first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.duration_h.is_finite() || self.duration_h < 0.0 {
            return Err(ValidationError::InvalidDuration(self.duration_h));
        }

        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ValidationError::InvalidWeight(self.weight_kg));
        }

        match self.activity {
            ActivityKind::Walking if !self.height_cm.is_finite() || self.height_cm <= 0.0 => {
                Err(ValidationError::InvalidHeight(self.height_cm))
            }
            ActivityKind::Swimming if self.pool_length_m == 0 => {
                Err(ValidationError::InvalidPoolLength)
            }
            _ => Ok(()),
        }
    }
}

/// Metrics computed for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    /// Duration in hours
    pub duration_h: f64,
    /// Distance in km
    pub distance_km: f64,
    /// Mean speed in km/h
    pub speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories_kcal: f64,
}
