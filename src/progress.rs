//! Lesson progress tracking
//!
//! A lesson is an ordered list of expected command lines. The tracker keeps
//! a cursor on the next expected line and advances it when the learner types
//! exactly that line (ignoring case and surrounding whitespace). Lines typed
//! out of order never change anything.

use serde::{Deserialize, Serialize};

/// Progress state of one lesson view
///
/// `cursor` always points at the next expected command and stays on the last
/// one once it is reached. `completed` only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    expected_commands: Vec<String>,
    cursor: usize,
    completed: Vec<String>,
}

impl LessonPlan {
    /// Create a fresh plan at state 0
    pub fn new<I, S>(expected_commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_commands: expected_commands.into_iter().map(Into::into).collect(),
            cursor: 0,
            completed: Vec::new(),
        }
    }

    /// Expected commands, in order
    pub fn expected_commands(&self) -> &[String] {
        &self.expected_commands
    }

    /// Index of the next expected command
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Completed commands, in completion order
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    /// Number of expected commands
    pub fn len(&self) -> usize {
        self.expected_commands.len()
    }

    /// Whether the plan has no expected commands (tracking disabled)
    pub fn is_empty(&self) -> bool {
        self.expected_commands.is_empty()
    }

    /// The command the learner should type next
    pub fn current_target(&self) -> Option<&str> {
        self.expected_commands.get(self.cursor).map(String::as_str)
    }

    /// Whether `command` has been completed
    pub fn is_completed(&self, command: &str) -> bool {
        self.completed.iter().any(|c| c == command)
    }

    /// Completion percentage in `0.0..=100.0`
    pub fn percent_complete(&self) -> f64 {
        if self.expected_commands.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 / self.expected_commands.len() as f64 * 100.0
    }

    /// Whether every expected command has been completed
    pub fn is_complete(&self) -> bool {
        !self.expected_commands.is_empty() && self.completed.len() == self.expected_commands.len()
    }

    /// Whether the current target repeats an already completed command
    ///
    /// A stalled plan can never advance again: matching the target only
    /// reports [`MatchOutcome::AlreadyCompleted`].
    pub fn is_stalled(&self) -> bool {
        !self.is_complete()
            && self
                .current_target()
                .is_some_and(|target| self.is_completed(target))
    }

    /// Match a submitted line against the current target and advance
    pub fn advance(&mut self, raw: &str) -> MatchOutcome {
        let Some(target) = self.current_target() else {
            return MatchOutcome::Untracked;
        };

        if raw.trim().to_lowercase() != target.to_lowercase() {
            return MatchOutcome::NotExpected;
        }

        let target = target.to_string();
        if self.is_completed(&target) {
            return MatchOutcome::AlreadyCompleted { command: target };
        }

        let index = self.cursor;
        self.completed.push(target.clone());
        if self.cursor + 1 < self.expected_commands.len() {
            self.cursor += 1;
        }
        MatchOutcome::Advanced {
            command: target,
            index,
        }
    }
}

/// Result of matching one submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Matched the current target, which is now completed
    Advanced { command: String, index: usize },
    /// Matched the current target, but an identical command was already completed
    AlreadyCompleted { command: String },
    /// Did not match the current target
    NotExpected,
    /// The plan has no expected commands
    Untracked,
}

impl MatchOutcome {
    /// Whether the line was the one the lesson expected next
    pub fn is_match(&self) -> bool {
        matches!(
            self,
            MatchOutcome::Advanced { .. } | MatchOutcome::AlreadyCompleted { .. }
        )
    }

    /// Whether the plan changed
    pub fn advanced(&self) -> bool {
        matches!(self, MatchOutcome::Advanced { .. })
    }
}

/// Snapshot of lesson progress for a progress indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

impl ProgressReport {
    /// Whether the lesson is finished
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Drives a [`LessonPlan`] from submitted lines
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    plan: LessonPlan,
}

impl ProgressTracker {
    /// Create a tracker for a fresh plan
    pub fn new(plan: LessonPlan) -> Self {
        Self { plan }
    }

    /// Current plan
    pub fn plan(&self) -> &LessonPlan {
        &self.plan
    }

    /// Handle one non-empty submitted line
    pub fn on_command_submitted(&mut self, raw: &str) -> MatchOutcome {
        let outcome = self.plan.advance(raw);
        match &outcome {
            MatchOutcome::Advanced { command, index } => info!(
                "Completed step {} '{}' ({:.0}%)",
                index + 1,
                command,
                self.plan.percent_complete()
            ),
            MatchOutcome::AlreadyCompleted { command } if self.plan.is_stalled() => info!(
                "Step {} repeats completed command '{}'; the lesson cannot advance",
                self.plan.cursor() + 1,
                command
            ),
            _ => trace!("{:?} for {:?}", outcome, raw),
        }
        outcome
    }

    /// Completion percentage
    pub fn percent_complete(&self) -> f64 {
        self.plan.percent_complete()
    }

    /// Progress snapshot
    pub fn report(&self) -> ProgressReport {
        ProgressReport {
            completed: self.plan.completed().len(),
            total: self.plan.len(),
            percent: self.plan.percent_complete(),
        }
    }
}
