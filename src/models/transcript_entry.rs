//! Transcript Entry Model
//!
//! A single line of the simulated terminal: either what the learner typed
//! (with its prompt) or what the simulator answered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::execution::CommandResult;

/// Kind of transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Prompt plus the line the learner typed
    Input,
    /// Output of a successful command
    Output,
    /// Output of a failed command
    Error,
}

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// What produced this entry
    pub kind: EntryKind,

    /// Displayed text; may span several lines
    pub text: String,

    /// When this entry was appended
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    /// Create a new entry
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an input entry
    pub fn input(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Input, text)
    }

    /// Create an output entry
    pub fn output(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, text)
    }

    /// Create an error entry
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, text)
    }

    /// Entry for a rendered result; `None` for the clear sentinel
    pub fn from_result(result: &CommandResult) -> Option<Self> {
        match result {
            CommandResult::Output(text) => Some(Self::output(text.as_str())),
            CommandResult::Error(text) => Some(Self::error(text.as_str())),
            CommandResult::Clear => None,
        }
    }

    /// Check if this entry is an error
    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }

    /// Individual display lines of this entry
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}
