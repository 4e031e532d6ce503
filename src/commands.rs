//! Command classification
//!
//! Turns a raw line typed by the learner into one of the command categories
//! the simulator understands. Matching is keyword/prefix based: the keyword
//! is compared case-insensitively and the arguments are taken from the
//! remainder of the line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Commands listed by `help`, as `(usage, summary)` pairs
pub const SUPPORTED_COMMANDS: [(&str, &str); 11] = [
    ("ls", "list directory contents"),
    ("cd <directory>", "change directory"),
    ("pwd", "print working directory"),
    ("mkdir <name>", "create directory"),
    ("touch <file>", "create file"),
    ("cat <file>", "display file contents"),
    ("echo <text>", "display text"),
    ("rm <file>", "remove file"),
    ("cp <source> <dest>", "copy file"),
    ("mv <source> <dest>", "move file"),
    ("clear", "clear terminal"),
];

/// A classified command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `help`
    Help,
    /// `clear`
    Clear,
    /// `pwd`
    PrintWorkingDirectory,
    /// `ls`
    ListDirectory,
    /// `cd <directory>`
    ChangeDirectory(String),
    /// `mkdir <name>`
    MakeDirectory(String),
    /// `touch <file>`
    CreateFile(String),
    /// `echo <text>`
    Echo(String),
    /// `cat <file>`
    ReadFile(String),
    /// `rm <file>`
    RemoveFile(String),
    /// `cp <source> <destination>`
    CopyFile { source: String, destination: String },
    /// `mv <source> <destination>`
    MoveFile { source: String, destination: String },
    /// Anything else; holds the line exactly as typed
    Unknown(String),
}

impl Command {
    /// The shell keyword for this command, `None` for unrecognized input
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Help => Some("help"),
            Command::Clear => Some("clear"),
            Command::PrintWorkingDirectory => Some("pwd"),
            Command::ListDirectory => Some("ls"),
            Command::ChangeDirectory(_) => Some("cd"),
            Command::MakeDirectory(_) => Some("mkdir"),
            Command::CreateFile(_) => Some("touch"),
            Command::Echo(_) => Some("echo"),
            Command::ReadFile(_) => Some("cat"),
            Command::RemoveFile(_) => Some("rm"),
            Command::CopyFile { .. } => Some("cp"),
            Command::MoveFile { .. } => Some("mv"),
            Command::Unknown(_) => None,
        }
    }

    /// Check if the line was recognized as a supported command
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Command::Unknown(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ChangeDirectory(arg)
            | Command::MakeDirectory(arg)
            | Command::CreateFile(arg)
            | Command::Echo(arg)
            | Command::ReadFile(arg)
            | Command::RemoveFile(arg) => {
                write!(f, "{} {}", self.keyword().unwrap_or_default(), arg)
            }
            Command::CopyFile {
                source,
                destination,
            }
            | Command::MoveFile {
                source,
                destination,
            } => write!(
                f,
                "{} {} {}",
                self.keyword().unwrap_or_default(),
                source,
                destination
            ),
            Command::Unknown(raw) => write!(f, "{}", raw),
            _ => write!(f, "{}", self.keyword().unwrap_or_default()),
        }
    }
}

/// Classifies raw input lines into [`Command`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandClassifier {
    /// Lower-case the whole line before extracting arguments
    lowercase_arguments: bool,
}

impl CommandClassifier {
    /// Create a classifier that keeps argument case as typed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier that lower-cases arguments too
    ///
    /// Older lesson recordings were captured with this behavior, where
    /// `mkdir MyProject` reports `Directory 'myproject' created successfully`.
    pub fn with_lowercase_arguments(lowercase_arguments: bool) -> Self {
        Self {
            lowercase_arguments,
        }
    }

    /// Whether arguments are lower-cased before extraction
    pub fn lowercases_arguments(&self) -> bool {
        self.lowercase_arguments
    }

    /// Classify a raw input line
    pub fn classify(&self, raw: &str) -> Command {
        let lowered;
        let line = if self.lowercase_arguments {
            lowered = raw.trim().to_lowercase();
            lowered.as_str()
        } else {
            raw.trim()
        };

        let command = if line.eq_ignore_ascii_case("help") {
            Command::Help
        } else if line.eq_ignore_ascii_case("clear") {
            Command::Clear
        } else if line.eq_ignore_ascii_case("pwd") {
            Command::PrintWorkingDirectory
        } else if line.eq_ignore_ascii_case("ls") {
            Command::ListDirectory
        } else if let Some(arg) = strip_keyword(line, "cd ") {
            Command::ChangeDirectory(arg.to_string())
        } else if let Some(arg) = strip_keyword(line, "mkdir ") {
            Command::MakeDirectory(arg.to_string())
        } else if let Some(arg) = strip_keyword(line, "touch ") {
            Command::CreateFile(arg.to_string())
        } else if let Some(arg) = strip_keyword(line, "echo ") {
            Command::Echo(arg.to_string())
        } else if let Some(arg) = strip_keyword(line, "cat ") {
            Command::ReadFile(arg.to_string())
        } else if let Some(arg) = strip_keyword(line, "rm ") {
            Command::RemoveFile(arg.to_string())
        } else if let Some((source, destination)) =
            strip_keyword(line, "cp ").and_then(two_operands)
        {
            Command::CopyFile {
                source,
                destination,
            }
        } else if let Some((source, destination)) =
            strip_keyword(line, "mv ").and_then(two_operands)
        {
            Command::MoveFile {
                source,
                destination,
            }
        } else {
            Command::Unknown(raw.to_string())
        };

        trace!("Classified {:?} as {:?}", raw, command);
        command
    }
}

/// Classify a raw input line, keeping argument case as typed
pub fn classify(raw: &str) -> Command {
    CommandClassifier::new().classify(raw)
}

/// Strip a keyword prefix (including its trailing space), ignoring ASCII case
fn strip_keyword<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(line[prefix.len()..].trim())
    } else {
        None
    }
}

/// First two whitespace-separated operands; extra operands are ignored
fn two_operands(arg: &str) -> Option<(String, String)> {
    let mut parts = arg.split_whitespace();
    let source = parts.next()?;
    let destination = parts.next()?;
    Some((source.to_string(), destination.to_string()))
}
