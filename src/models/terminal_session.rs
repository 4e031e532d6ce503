//! Terminal Session Model
//!
//! One simulated terminal: the transcript shown to the learner, the pending
//! input line and the executor that answers submitted lines. A session is
//! owned by a single lesson view and is never persisted.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use super::TranscriptEntry;
use crate::config::TerminalConfig;
use crate::execution::{CommandResult, SimulatedExecutor};
use crate::commands::CommandClassifier;
use crate::error::Result;

/// Represents a simulated terminal session and its transcript
#[derive(Debug, Clone)]
pub struct TerminalSession {
    /// Session identifier
    pub id: String,

    /// When session started
    pub start_time: DateTime<Utc>,

    /// Answers submitted lines
    executor: SimulatedExecutor,

    /// Text between the working directory and the typed line
    prompt_delimiter: String,

    /// Lines a fresh transcript starts with
    welcome_banner: Vec<String>,

    /// Re-seed the banner on `clear` instead of emptying the transcript
    restore_banner_on_clear: bool,

    /// Ordered transcript entries
    entries: Vec<TranscriptEntry>,

    /// Line currently being typed
    input_buffer: String,

    /// Maximum number of entries to keep
    max_entries: usize,

    /// Counters since the session started
    statistics: SessionStatistics,
}

impl TerminalSession {
    /// Create a new session with default settings and the given working directory label
    pub fn new(working_directory: impl Into<String>) -> Self {
        let config = TerminalConfig {
            working_directory: working_directory.into(),
            ..TerminalConfig::default()
        };
        Self::from_config(&config)
    }

    /// Create a new session from terminal configuration
    pub fn from_config(config: &TerminalConfig) -> Self {
        let classifier = CommandClassifier::with_lowercase_arguments(config.legacy_lowercase_arguments);
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            start_time: Utc::now(),
            executor: SimulatedExecutor::new(config.working_directory.clone())
                .with_classifier(classifier),
            prompt_delimiter: config.prompt_delimiter.clone(),
            welcome_banner: config.welcome_banner.clone(),
            restore_banner_on_clear: config.restore_banner_on_clear,
            entries: Vec::new(),
            input_buffer: String::new(),
            max_entries: config.max_transcript_entries.max(1),
            statistics: SessionStatistics::default(),
        };
        session.seed_banner();
        debug!("Created terminal session {} in {}", session.id, session.working_directory());
        session
    }

    /// Working directory label
    pub fn working_directory(&self) -> &str {
        self.executor.working_directory()
    }

    /// Prompt shown before typed lines, e.g. `/home/user$ `
    pub fn prompt(&self) -> String {
        format!("{}{}", self.working_directory(), self.prompt_delimiter)
    }

    /// Full ordered transcript
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of transcript entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Line currently being typed
    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    /// Replace the line currently being typed
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input_buffer = input.into();
    }

    /// Append text to the line currently being typed
    pub fn push_input(&mut self, text: &str) {
        self.input_buffer.push_str(text);
    }

    /// Submit the pending input line
    pub fn submit_input(&mut self) -> Option<CommandResult> {
        let line = self.input_buffer.clone();
        self.submit(&line)
    }

    /// Submit a raw line
    ///
    /// Blank lines are ignored entirely and return `None`. Otherwise the
    /// prompt and line are appended, the line is answered, and the answer is
    /// appended (or the transcript is cleared). The pending input is reset.
    pub fn submit(&mut self, raw: &str) -> Option<CommandResult> {
        if raw.trim().is_empty() {
            return None;
        }

        let input = format!("{}{}", self.prompt(), raw);
        self.push_entry(TranscriptEntry::input(input));

        let (command, result) = self.executor.execute(raw);
        debug!(
            "Session {}: {:?} -> success={}",
            self.id,
            command,
            result.is_success()
        );

        match TranscriptEntry::from_result(&result) {
            Some(entry) => self.push_entry(entry),
            None => self.clear_transcript(),
        }

        self.statistics.record(&result);
        self.input_buffer.clear();
        Some(result)
    }

    /// Session counters
    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Export the transcript as JSON
    pub fn export_transcript_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Export the transcript as plain text, one display line per line
    pub fn export_transcript_text(&self) -> String {
        let mut output = format!("Terminal Session: {}\n", self.id);
        output.push_str(&format!("Started: {}\n\n", self.start_time));
        for entry in &self.entries {
            output.push_str(&entry.text);
            output.push('\n');
        }
        output
    }

    /// Write the transcript to a file: JSON for `.json`, plain text otherwise
    pub fn save_transcript(&self, path: &Path) -> Result<()> {
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.export_transcript_json()?,
            _ => self.export_transcript_text(),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!(
            "Saved {} transcript entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    fn push_entry(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
    }

    fn clear_transcript(&mut self) {
        self.entries.clear();
        if self.restore_banner_on_clear {
            self.seed_banner();
        }
    }

    fn seed_banner(&mut self) {
        let banner: Vec<TranscriptEntry> = self
            .welcome_banner
            .iter()
            .map(|line| TranscriptEntry::output(line.as_str()))
            .collect();
        for entry in banner {
            self.push_entry(entry);
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::from_config(&TerminalConfig::default())
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStatistics {
    pub total_commands: usize,
    pub successful_commands: usize,
    pub failed_commands: usize,
    pub clears: usize,
}

impl SessionStatistics {
    fn record(&mut self, result: &CommandResult) {
        self.total_commands += 1;
        if result.is_clear() {
            self.clears += 1;
        }
        if result.is_success() {
            self.successful_commands += 1;
        } else {
            self.failed_commands += 1;
        }
    }
}
