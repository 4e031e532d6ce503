//! One active lesson view
//!
//! A [`Tutor`] owns the simulated terminal session and the progress of the
//! lesson being practiced. Every non-empty submitted line goes through the
//! transcript first, then the progress tracker, then the optional listener.

use std::fmt;

use crate::config::TerminalConfig;
use crate::execution::CommandResult;
use crate::lessons::{Exercise, Lesson};
use crate::models::TerminalSession;
use crate::progress::{LessonPlan, MatchOutcome, ProgressReport, ProgressTracker};

/// Listener called once per non-empty submission with `(raw_line, matched_expected)`
pub type CommandListener = Box<dyn FnMut(&str, bool)>;

/// Everything that happened for one submitted line
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Simulated response
    pub result: CommandResult,
    /// How the line compared to the lesson's next expected command
    pub outcome: MatchOutcome,
}

impl Submission {
    /// Whether the line was the one the lesson expected next
    pub fn matched(&self) -> bool {
        self.outcome.is_match()
    }
}

/// Terminal session plus lesson progress for one lesson view
pub struct Tutor {
    session: TerminalSession,
    tracker: ProgressTracker,
    lesson: Option<Lesson>,
    listener: Option<CommandListener>,
}

impl Tutor {
    /// Free practice: no expected commands, progress tracking disabled
    pub fn new(terminal: &TerminalConfig) -> Self {
        Self {
            session: TerminalSession::from_config(terminal),
            tracker: ProgressTracker::default(),
            lesson: None,
            listener: None,
        }
    }

    /// Practice a lesson; its working directory overrides the configured one
    pub fn for_lesson(lesson: Lesson, terminal: &TerminalConfig) -> Self {
        let terminal = TerminalConfig {
            working_directory: lesson.working_directory.clone(),
            ..terminal.clone()
        };
        info!("Starting lesson '{}': {}", lesson.id, lesson.title);
        Self {
            session: TerminalSession::from_config(&terminal),
            tracker: ProgressTracker::new(lesson.plan()),
            lesson: Some(lesson),
            listener: None,
        }
    }

    /// Practice an ad-hoc list of expected commands
    pub fn with_plan(plan: LessonPlan, terminal: &TerminalConfig) -> Self {
        Self {
            session: TerminalSession::from_config(terminal),
            tracker: ProgressTracker::new(plan),
            lesson: None,
            listener: None,
        }
    }

    /// Register the per-submission listener
    pub fn on_command_complete<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&str, bool) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Submit a raw line; `None` for blank lines, which change nothing
    pub fn submit(&mut self, raw: &str) -> Option<Submission> {
        let result = self.session.submit(raw)?;
        let was_complete = self.tracker.report().is_complete();
        let outcome = self.tracker.on_command_submitted(raw);

        if !was_complete && self.tracker.report().is_complete() {
            match &self.lesson {
                Some(lesson) => info!("Lesson '{}' complete", lesson.id),
                None => info!("All expected commands complete"),
            }
        }

        if let Some(listener) = self.listener.as_mut() {
            listener(raw, outcome.is_match());
        }

        Some(Submission { result, outcome })
    }

    /// Submit the session's pending input line
    pub fn submit_input(&mut self) -> Option<Submission> {
        let line = self.session.input().to_string();
        self.submit(&line)
    }

    /// The simulated terminal
    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Mutable access for editing the pending input line
    pub fn session_mut(&mut self) -> &mut TerminalSession {
        &mut self.session
    }

    /// Lesson being practiced, if any
    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// Lesson progress
    pub fn plan(&self) -> &LessonPlan {
        self.tracker.plan()
    }

    /// Progress snapshot
    pub fn progress(&self) -> ProgressReport {
        self.tracker.report()
    }

    /// Exercise at the cursor, if the lesson describes its steps
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.lesson.as_ref()?.exercise(self.plan().cursor())
    }
}

impl fmt::Debug for Tutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tutor")
            .field("session", &self.session.id)
            .field("lesson", &self.lesson.as_ref().map(|l| l.id.as_str()))
            .field("progress", &self.tracker.report())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
