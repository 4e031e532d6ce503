//! Core data models for Shell Lab
//!
//! The transcript of a simulated terminal session and the entries it is
//! made of.

pub mod terminal_session;
pub mod transcript_entry;

// Re-exports for convenience
pub use terminal_session::{SessionStatistics, TerminalSession};
pub use transcript_entry::{EntryKind, TranscriptEntry};
