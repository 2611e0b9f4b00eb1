//! ftracker CLI - Command-line interface for ftracker
//!
//! Commands:
//! - show: Print the report for a single session given as flags
//! - batch: Compute reports for a file of sessions
//! - validate: Check a file of sessions for nonsensical inputs

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ftracker::report::{encode_summary_json, format_report, SummaryEnvelope};
use ftracker::types::{ActivityKind, TrainingSession, TrainingSummary};
use ftracker::{SessionAdapter, TrackerError, FTRACKER_VERSION};

/// ftracker - Distance, speed and calorie metrics for training sessions
#[derive(Parser)]
#[command(name = "ftracker")]
#[command(version = FTRACKER_VERSION)]
#[command(about = "Compute training reports for running, walking and swimming", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report for a single session
    Show {
        /// Activity label (Бег, Ходьба, Плавание, or running/walking/swimming)
        #[arg(short, long)]
        activity: String,

        /// Steps (running, walking) or strokes (swimming)
        #[arg(long)]
        action: u32,

        /// Duration in hours
        #[arg(short, long)]
        duration: f64,

        /// Body weight in kg
        #[arg(short, long)]
        weight: f64,

        /// Body height in cm (walking)
        #[arg(long, default_value = "0")]
        height: f64,

        /// Pool length in meters (swimming)
        #[arg(long, default_value = "0")]
        pool_length: u32,

        /// Pool lengths completed (swimming)
        #[arg(long, default_value = "0")]
        pool_laps: u32,

        /// Output the JSON summary instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Compute reports for a batch of sessions
    Batch {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Validate a batch of sessions
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one session per line)
    Ndjson,
    /// JSON array of sessions
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Text reports separated by blank lines
    Text,
    /// Newline-delimited JSON summaries
    Ndjson,
    /// Pretty-printed JSON array of summaries
    JsonPretty,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), TrackerCliError> {
    match cli.command {
        Commands::Show {
            activity,
            action,
            duration,
            weight,
            height,
            pool_length,
            pool_laps,
            json,
        } => {
            if json {
                let kind: ActivityKind = activity.parse()?;
                let session = TrainingSession {
                    activity: kind,
                    action,
                    duration_h: duration,
                    weight_kg: weight,
                    height_cm: height,
                    pool_length_m: pool_length,
                    pool_laps,
                };
                println!("{}", encode_summary_json(&session.summary())?);
            } else {
                print!(
                    "{}",
                    format_report(action, &activity, duration, weight, height, pool_length, pool_laps)
                );
            }
            Ok(())
        }

        Commands::Batch {
            input,
            input_format,
            output_format,
        } => cmd_batch(&input, input_format, output_format),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),
    }
}

fn cmd_batch(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
) -> Result<(), TrackerCliError> {
    let sessions = read_sessions(input, input_format)?;

    if sessions.is_empty() {
        return Err(TrackerCliError::NoSessions);
    }

    log::info!("Computing {} sessions", sessions.len());
    let summaries = SessionAdapter::summarize_all(&sessions);
    print!("{}", format_output(&summaries, &output_format)?);

    Ok(())
}

fn cmd_validate(
    input: &Path,
    input_format: InputFormat,
    json: bool,
) -> Result<(), TrackerCliError> {
    let sessions = read_sessions(input, input_format)?;
    let results = SessionAdapter::validate_sessions(&sessions);

    let report = ValidationReport {
        total_sessions: sessions.len(),
        valid_sessions: sessions.len() - results.len(),
        invalid_sessions: results.len(),
        errors: results
            .iter()
            .map(|r| ValidationErrorDetail {
                index: r.index,
                error: r.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total sessions:   {}", report.total_sessions);
        println!("Valid sessions:   {}", report.valid_sessions);
        println!("Invalid sessions: {}", report.invalid_sessions);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!("  - Session {}: {}", err.index, err.error);
            }
        }
    }

    if report.invalid_sessions > 0 {
        Err(TrackerCliError::ValidationFailed(report.invalid_sessions))
    } else {
        Ok(())
    }
}

// Helper functions

fn read_sessions(
    input: &Path,
    input_format: InputFormat,
) -> Result<Vec<TrainingSession>, TrackerCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let sessions = match input_format {
        InputFormat::Ndjson => SessionAdapter::parse_ndjson(&input_data)?,
        InputFormat::Json => SessionAdapter::parse_array(&input_data)?,
    };
    Ok(sessions)
}

fn format_output(
    summaries: &[TrainingSummary],
    format: &OutputFormat,
) -> Result<String, TrackerCliError> {
    match format {
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for summary in summaries {
                lines.push(encode_summary_json(summary)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::JsonPretty => {
            let envelopes: Vec<SummaryEnvelope> = summaries
                .iter()
                .cloned()
                .map(SummaryEnvelope::new)
                .collect();
            Ok(serde_json::to_string_pretty(&envelopes)? + "\n")
        }
    }
}

// Error types

#[derive(Debug)]
enum TrackerCliError {
    Io(io::Error),
    Tracker(TrackerError),
    Json(serde_json::Error),
    NoSessions,
    ValidationFailed(usize),
}

impl From<io::Error> for TrackerCliError {
    fn from(e: io::Error) -> Self {
        TrackerCliError::Io(e)
    }
}

impl From<TrackerError> for TrackerCliError {
    fn from(e: TrackerError) -> Self {
        TrackerCliError::Tracker(e)
    }
}

impl From<serde_json::Error> for TrackerCliError {
    fn from(e: serde_json::Error) -> Self {
        TrackerCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrackerCliError> for CliError {
    fn from(e: TrackerCliError) -> Self {
        match e {
            TrackerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            TrackerCliError::Tracker(e @ TrackerError::UnknownActivity(_)) => CliError {
                code: "UNKNOWN_ACTIVITY".to_string(),
                message: e.to_string(),
                hint: Some("Use Бег, Ходьба, Плавание or running, walking, swimming".to_string()),
            },
            TrackerCliError::Tracker(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure each session has activity, action, duration_h and weight_kg".to_string()),
            },
            TrackerCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            TrackerCliError::NoSessions => CliError {
                code: "NO_SESSIONS".to_string(),
                message: "No sessions found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            TrackerCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} sessions failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_sessions: usize,
    valid_sessions: usize,
    invalid_sessions: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    error: String,
}
