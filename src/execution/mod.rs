//! Simulated command execution
//!
//! Nothing here touches the real file system. Every recognized command
//! answers with canned, deterministic text and always succeeds; the only
//! failure is an unrecognized command.

use crate::commands::{Command, CommandClassifier, SUPPORTED_COMMANDS};
use serde::{Deserialize, Serialize};

/// Fixed output of `ls`
pub const DIRECTORY_LISTING: &str =
    "Documents  Downloads  Pictures  Videos\nexample.txt  script.sh  notes.md";

/// Text carried by the clear-screen result
pub const CLEAR_SENTINEL: &str = "CLEAR";

/// Outcome of simulating one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResult {
    /// Successful command with its output
    Output(String),
    /// Failed command with its error message
    Error(String),
    /// The transcript should be wiped; nothing is printed
    Clear,
}

impl CommandResult {
    /// Text of the result
    pub fn text(&self) -> &str {
        match self {
            CommandResult::Output(text) | CommandResult::Error(text) => text,
            CommandResult::Clear => CLEAR_SENTINEL,
        }
    }

    /// Whether the simulated command succeeded
    pub fn is_success(&self) -> bool {
        !matches!(self, CommandResult::Error(_))
    }

    /// Whether this is the clear-screen sentinel
    pub fn is_clear(&self) -> bool {
        matches!(self, CommandResult::Clear)
    }
}

/// Render the response for a classified command
pub fn render(command: &Command, working_directory: &str) -> CommandResult {
    match command {
        Command::Help => CommandResult::Output(help_text()),
        Command::Clear => CommandResult::Clear,
        Command::PrintWorkingDirectory => CommandResult::Output(working_directory.to_string()),
        Command::ListDirectory => CommandResult::Output(DIRECTORY_LISTING.to_string()),
        Command::ChangeDirectory(dir) if dir == ".." => {
            CommandResult::Output("Changed to parent directory".to_string())
        }
        Command::ChangeDirectory(dir) => {
            CommandResult::Output(format!("Changed to directory: {}", dir))
        }
        Command::MakeDirectory(name) => {
            CommandResult::Output(format!("Directory '{}' created successfully", name))
        }
        Command::CreateFile(name) => {
            CommandResult::Output(format!("File '{}' created successfully", name))
        }
        Command::Echo(text) => CommandResult::Output(text.replace(['\'', '"'], "")),
        Command::ReadFile(name) => CommandResult::Output(format!(
            "Content of {}:\nThis is a sample file content.\nYou can view file contents using the cat command.",
            name
        )),
        Command::RemoveFile(name) => {
            CommandResult::Output(format!("File '{}' removed successfully", name))
        }
        Command::CopyFile {
            source,
            destination,
        } => CommandResult::Output(format!("Copied '{}' to '{}'", source, destination)),
        Command::MoveFile {
            source,
            destination,
        } => CommandResult::Output(format!("Moved '{}' to '{}'", source, destination)),
        Command::Unknown(raw) => {
            CommandResult::Error(format!("bash: {}: command not found", raw))
        }
    }
}

/// The `help` reference text
fn help_text() -> String {
    let mut text = String::from("Available commands:");
    for (usage, summary) in SUPPORTED_COMMANDS {
        text.push_str(&format!("\n• {} - {}", usage, summary));
    }
    text
}

/// Classifies and answers command lines for one working directory
#[derive(Debug, Clone)]
pub struct SimulatedExecutor {
    /// Working directory label shown by `pwd`
    working_dir: String,
    /// Classifier used for incoming lines
    classifier: CommandClassifier,
}

impl SimulatedExecutor {
    /// Create a new executor for the given working directory label
    pub fn new(working_dir: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            classifier: CommandClassifier::new(),
        }
    }

    /// Use a specific classifier
    pub fn with_classifier(mut self, classifier: CommandClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Working directory label
    pub fn working_directory(&self) -> &str {
        &self.working_dir
    }

    /// Classify and render a raw line
    pub fn execute(&self, raw: &str) -> (Command, CommandResult) {
        let command = self.classifier.classify(raw);
        let result = render(&command, &self.working_dir);
        (command, result)
    }
}

impl Default for SimulatedExecutor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_WORKING_DIRECTORY)
    }
}
