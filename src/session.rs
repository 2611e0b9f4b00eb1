//! Training session batches
//!
//! Parses sessions from NDJSON or JSON arrays and validates them in bulk.

use crate::error::{TrackerError, ValidationError};
use crate::types::{TrainingSession, TrainingSummary};

/// Adapter for reading batches of training sessions
pub struct SessionAdapter;

impl SessionAdapter {
    /// Parse newline-delimited JSON, one session per non-blank line
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<TrainingSession>, TrackerError> {
        let mut sessions = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<TrainingSession>(trimmed) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    return Err(TrackerError::ParseError(format!(
                        "Failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        Ok(sessions)
    }

    /// Parse a JSON array of sessions
    pub fn parse_array(json: &str) -> Result<Vec<TrainingSession>, TrackerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every session, returning only the failures
    pub fn validate_sessions(sessions: &[TrainingSession]) -> Vec<SessionValidationResult> {
        sessions
            .iter()
            .enumerate()
            .filter_map(|(index, session)| {
                session.validate().err().map(|error| SessionValidationResult {
                    index,
                    error,
                })
            })
            .collect()
    }

    /// Summarize every session with its own activity kind
    pub fn summarize_all(sessions: &[TrainingSession]) -> Vec<TrainingSummary> {
        sessions.iter().map(TrainingSession::summary).collect()
    }
}

/// A session that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct SessionValidationResult {
    /// Position of the session in the batch
    pub index: usize,
    pub error: ValidationError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityKind;

    const NDJSON: &str = r#"{"activity":"running","action":15000,"duration_h":1.5,"weight_kg":70.0}

{"activity":"walking","action":9000,"duration_h":1.0,"weight_kg":85.0,"height_cm":185.0}
{"activity":"swimming","action":2000,"duration_h":1.0,"weight_kg":70.0,"pool_length_m":25,"pool_laps":40}"#;

    #[test]
    fn test_parse_ndjson() {
        let sessions = SessionAdapter::parse_ndjson(NDJSON).unwrap();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].activity, ActivityKind::Running);
        assert_eq!(sessions[1].height_cm, 185.0);
        assert_eq!(sessions[2].pool_laps, 40);
    }

    #[test]
    fn test_parse_ndjson_reports_line() {
        let ndjson = r#"{"activity":"running","action":100,"duration_h":1.0,"weight_kg":70.0}
{"activity":"yoga","action":100,"duration_h":1.0,"weight_kg":70.0}"#;

        let err = SessionAdapter::parse_ndjson(ndjson).unwrap_err();
        assert!(matches!(err, TrackerError::ParseError(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"activity":"running","action":1000,"duration_h":1.0,"weight_kg":70.0},
            {"activity":"swimming","action":500,"duration_h":0.5,"weight_kg":60.0,"pool_length_m":50,"pool_laps":20}
        ]"#;

        let sessions = SessionAdapter::parse_array(json).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].pool_length_m, 50);

        assert!(matches!(
            SessionAdapter::parse_array("{not json"),
            Err(TrackerError::JsonError(_))
        ));
    }

    #[test]
    fn test_validate_sessions() {
        let mut sessions = SessionAdapter::parse_ndjson(NDJSON).unwrap();
        assert!(SessionAdapter::validate_sessions(&sessions).is_empty());

        sessions[1].height_cm = 0.0;
        sessions[2].weight_kg = -3.0;

        let failures = SessionAdapter::validate_sessions(&sessions);
        assert_eq!(
            failures,
            vec![
                SessionValidationResult {
                    index: 1,
                    error: ValidationError::InvalidHeight(0.0),
                },
                SessionValidationResult {
                    index: 2,
                    error: ValidationError::InvalidWeight(-3.0),
                },
            ]
        );
    }

    #[test]
    fn test_summarize_all() {
        let sessions = SessionAdapter::parse_ndjson(NDJSON).unwrap();
        let summaries = SessionAdapter::summarize_all(&sessions);

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].activity, ActivityKind::Running);
        assert!((summaries[0].distance_km - 9.75).abs() < 1e-9);
        assert!((summaries[2].speed_kmh - 1.0).abs() < 1e-9);
    }
}
