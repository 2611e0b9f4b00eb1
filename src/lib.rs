//! ftracker - Distance, speed and calorie metrics for training sessions
//!
//! ftracker derives distance, mean speed and calories burned from the raw
//! counters of a running, walking or swimming session, and renders them as a
//! fixed five-line text report.
//!
//! ## Modules
//!
//! - **Calculator**: Pure formulas over steps, pool laps, duration and body metrics
//! - **Report**: Activity dispatch, text report and JSON envelope
//! - **Session**: Batch parsing and validation of recorded sessions

pub mod calculator;
pub mod error;
pub mod report;
pub mod session;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use calculator::{
    distance, mean_speed, running_calories, swimming_calories, swimming_mean_speed,
    walking_calories,
};
pub use error::{TrackerError, ValidationError};
pub use report::{encode_summary_json, format_report, summarize, UNKNOWN_ACTIVITY_MESSAGE};
pub use session::SessionAdapter;
pub use types::{ActivityKind, TrainingSession, TrainingSummary};

/// ftracker version embedded in JSON summaries
pub const FTRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for JSON summaries
pub const PRODUCER_NAME: &str = "ftracker";
