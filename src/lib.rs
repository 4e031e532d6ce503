//! Shell Lab - an interactive shell tutorial
//!
//! This library provides the engine behind Shell Lab: a simulated shell
//! terminal that answers a fixed set of commands with plausible, canned
//! output, and a lesson tracker that follows the learner through an ordered
//! checklist of commands.
//!
//! ## Module Organization
//!
//! - [`commands`] - Classifying raw lines into supported commands
//! - [`execution`] - Simulated responses for classified commands
//! - [`models`] - The terminal session and its transcript entries
//! - [`progress`] - Lesson plans and progress tracking
//! - [`lessons`] - Built-in and imported lessons
//! - [`tutor`] - One lesson view: session, progress and listener together
//! - [`config`] - Configuration loading and runtime configuration
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use shell_lab::{init, Tutor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runtime_config = init()?;
//! let lesson = runtime_config.catalog().get("lab1")?.clone();
//!
//! let mut tutor = Tutor::for_lesson(lesson, &runtime_config.config().terminal)
//!     .on_command_complete(|line, matched| println!("{line}: {matched}"));
//! tutor.submit("pwd");
//! println!("{:.0}%", tutor.progress().percent);
//! # Ok(())
//! # }
//! ```
//!
//! ## Simulation Model
//!
//! Nothing is executed. There is no file system, no process table and no
//! variable storage: `mkdir` reports success without creating anything and
//! `ls` always prints the same listing. Every supported command succeeds;
//! the only failure is an unrecognized command.
//!
//! Everything is single-threaded and synchronous. Each submitted line is
//! classified, answered, appended to the transcript and matched against the
//! lesson before the next one is accepted.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod execution;
pub mod lessons;
pub mod models;
pub mod progress;
pub mod tutor;

// Re-exports for core functionality
pub use commands::{classify, Command, CommandClassifier};
pub use config::{Config, RuntimeConfig};
pub use error::{Error, Result};
pub use execution::{render, CommandResult, SimulatedExecutor};
pub use lessons::{Lesson, LessonCatalog};
pub use models::{EntryKind, TerminalSession, TranscriptEntry};
pub use progress::{LessonPlan, MatchOutcome, ProgressReport, ProgressTracker};
pub use tutor::{Submission, Tutor};

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;

// Version information
/// The current version of Shell Lab from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize Shell Lab with default settings
///
/// Loads configuration from the default locations (or `SHELL_LAB_CONFIG`),
/// falling back to the built-in defaults when the file cannot be used, and
/// builds the lesson catalog it selects.
///
/// # Errors
///
/// Returns an error if the configured lesson catalog cannot be loaded or
/// names an unknown default lesson.
pub fn init() -> Result<RuntimeConfig> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    let runtime_config = RuntimeConfig::from_config(config)?;
    info!(
        "{} initialization complete ({} lessons)",
        NAME,
        runtime_config.catalog().len()
    );
    Ok(runtime_config)
}

/// Initialize Shell Lab from a specific configuration file
///
/// Unlike [`init`], a file that cannot be loaded is an error rather than a
/// reason to fall back to defaults.
pub fn init_with_config(config_path: &std::path::Path) -> Result<RuntimeConfig> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "Configuration file does not exist".to_string(),
        });
    }

    let runtime_config = RuntimeConfig::load_from_file(config_path)?;
    info!("Custom configuration loaded from: {}", config_path.display());
    Ok(runtime_config)
}

/// Human-readable explanation of a startup error, with hints
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the file path and permissions\n• Run without --config to use defaults",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Ensure file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Remove the field to use its default",
                field, reason
            )
        }
        Error::LessonNotFound { lesson_id } => {
            format!(
                "Lesson Error: No lesson named '{}'\n\nTry:\n• Run with --list to see available lessons",
                lesson_id
            )
        }
        Error::LessonImportFailed { reason } | Error::LessonValidationFailed { reason, .. } => {
            format!(
                "Lesson Error: {}\n\nTry:\n• Check the lesson catalog file\n• Give every exercise the same command as its expected command",
                reason
            )
        }
        _ => format!("Unexpected Error: {}", error),
    }
}
