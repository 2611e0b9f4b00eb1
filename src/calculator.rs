//! Metrics calculator
//!
//! Pure formulas turning raw session counters into distance, mean speed and
//! calories burned. Every function is total: a zero duration yields a zero
//! speed instead of infinity or NaN, and inputs are not validated here (see
//! [`crate::types::TrainingSession::validate`] for the opt-in checks).

/// Average step length (meters)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Meters in a kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Factor converting km/h to m/s
pub const KMH_TO_MPS: f64 = 0.278;

/// Centimeters in a meter
pub const CM_PER_M: f64 = 100.0;

/// Running calorie coefficients
pub mod running {
    /// Mean speed multiplier
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Average calories burned per unit of scaled speed
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Walking calorie coefficients
pub mod walking {
    /// Body weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier of the speed²/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients
pub mod swimming {
    /// Shift added to mean swimming speed
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Body weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Distance covered in kilometers.
///
/// # Arguments
/// * `action` - Number of steps (running, walking) or strokes (swimming)
pub fn distance(action: u32) -> f64 {
    f64::from(action) * STEP_LENGTH_M / METERS_PER_KM
}

/// Mean speed over the whole session in km/h, `0.0` for a zero duration.
pub fn mean_speed(action: u32, duration_h: f64) -> f64 {
    if duration_h == 0.0 {
        return 0.0;
    }
    distance(action) / duration_h
}

/// Calories burned while running.
///
/// # Arguments
/// * `action` - Number of steps
/// * `weight_kg` - Body weight
/// * `duration_h` - Session duration in hours
pub fn running_calories(action: u32, weight_kg: f64, duration_h: f64) -> f64 {
    let scaled_speed =
        running::SPEED_MULTIPLIER * mean_speed(action, duration_h) * running::SPEED_SHIFT;
    scaled_speed * weight_kg * duration_h * MINUTES_PER_HOUR / METERS_PER_KM
}

/// Calories burned while walking.
///
/// # Arguments
/// * `action` - Number of steps
/// * `duration_h` - Session duration in hours
/// * `weight_kg` - Body weight
/// * `height_cm` - Body height
pub fn walking_calories(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> f64 {
    let speed_mps_sq = (mean_speed(action, duration_h) * KMH_TO_MPS).powi(2);
    let height_m = height_cm / CM_PER_M;
    (walking::WEIGHT_MULTIPLIER * weight_kg
        + (speed_mps_sq / height_m) * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_h
        * MINUTES_PER_HOUR
}

/// Mean swimming speed in km/h, `0.0` for a zero duration.
///
/// # Arguments
/// * `pool_length_m` - Pool length in meters
/// * `pool_laps` - How many times the pool was crossed
/// * `duration_h` - Session duration in hours
pub fn swimming_mean_speed(pool_length_m: u32, pool_laps: u32, duration_h: f64) -> f64 {
    if duration_h == 0.0 {
        return 0.0;
    }
    f64::from(pool_length_m) * f64::from(pool_laps) / METERS_PER_KM / duration_h
}

/// Calories burned while swimming.
pub fn swimming_calories(
    pool_length_m: u32,
    pool_laps: u32,
    duration_h: f64,
    weight_kg: f64,
) -> f64 {
    let shifted_speed =
        swimming_mean_speed(pool_length_m, pool_laps, duration_h) + swimming::SPEED_SHIFT;
    shifted_speed * swimming::WEIGHT_MULTIPLIER * weight_kg * duration_h
}
