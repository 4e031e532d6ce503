//! Lesson definitions and the lesson catalog
//!
//! The catalog ships with eight built-in labs and can be extended with
//! lessons imported from TOML or JSON files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::DEFAULT_WORKING_DIRECTORY;
use crate::error::{Error, Result};
use crate::progress::LessonPlan;

/// Lesson difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        };
        f.write_str(name)
    }
}

/// One step of a lesson, as shown to the learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Command line to type
    pub command: String,
    /// What the step asks for
    pub description: String,
    /// Why the command works
    pub explanation: String,
}

/// A lesson: an ordered list of command lines to practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Catalog identifier, e.g. `lab1`
    pub id: String,

    /// Lesson title
    pub title: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Difficulty level
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Working directory label shown in the prompt
    #[serde(default = "default_working_directory")]
    pub working_directory: String,

    /// Command lines the learner is guided to type, in order
    #[serde(default)]
    pub expected_commands: Vec<String>,

    /// Per-step descriptions; empty or one per expected command
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

fn default_working_directory() -> String {
    DEFAULT_WORKING_DIRECTORY.to_string()
}

impl Lesson {
    /// Create a lesson whose exercises define its expected commands
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        difficulty: Difficulty,
        exercises: Vec<Exercise>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            difficulty,
            working_directory: default_working_directory(),
            expected_commands: exercises.iter().map(|e| e.command.clone()).collect(),
            exercises,
        }
    }

    /// Fresh progress plan for this lesson
    pub fn plan(&self) -> LessonPlan {
        LessonPlan::new(self.expected_commands.iter().cloned())
    }

    /// Exercise for the step at `index`
    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    /// Index of the first expected command that repeats an earlier one
    ///
    /// Progress cannot get past such a step, since a command is only
    /// completed once.
    pub fn repeated_step(&self) -> Option<usize> {
        self.expected_commands
            .iter()
            .enumerate()
            .position(|(i, command)| self.expected_commands[..i].contains(command))
    }

    /// Check that the lesson is self-consistent
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::LessonValidationFailed {
                lesson_id: self.id.clone(),
                reason: "Lesson id cannot be empty".to_string(),
            });
        }

        if self.exercises.is_empty() {
            return Ok(());
        }

        if self.exercises.len() != self.expected_commands.len() {
            return Err(Error::LessonValidationFailed {
                lesson_id: self.id.clone(),
                reason: format!(
                    "{} exercises for {} expected commands",
                    self.exercises.len(),
                    self.expected_commands.len()
                ),
            });
        }

        if let Some((index, _)) = self
            .exercises
            .iter()
            .zip(&self.expected_commands)
            .enumerate()
            .find(|(_, (exercise, expected))| exercise.command != **expected)
        {
            return Err(Error::LessonValidationFailed {
                lesson_id: self.id.clone(),
                reason: format!("Exercise {} does not match its expected command", index + 1),
            });
        }

        Ok(())
    }
}

/// Lesson file layout: `[[lessons]]` tables or a `lessons` array
#[derive(Debug, Default, Serialize, Deserialize)]
struct LessonFile {
    #[serde(default)]
    lessons: Vec<Lesson>,
}

/// Ordered collection of lessons
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
    /// Ids of lessons that cannot be removed
    builtin_ids: Vec<String>,
}

impl LessonCatalog {
    /// Create a catalog with the built-in labs
    pub fn new() -> Self {
        let lessons = builtin_lessons();
        let builtin_ids = lessons.iter().map(|l| l.id.clone()).collect();
        Self {
            lessons,
            builtin_ids,
        }
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self {
            lessons: Vec::new(),
            builtin_ids: Vec::new(),
        }
    }

    /// Get a lesson by id
    pub fn get(&self, lesson_id: &str) -> Result<&Lesson> {
        self.lessons
            .iter()
            .find(|l| l.id == lesson_id)
            .ok_or_else(|| Error::LessonNotFound {
                lesson_id: lesson_id.to_string(),
            })
    }

    /// All lessons, in catalog order
    pub fn list(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Number of lessons
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether the catalog has no lessons
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Add a lesson
    pub fn add(&mut self, lesson: Lesson) -> Result<()> {
        lesson.validate()?;
        if self.lessons.iter().any(|l| l.id == lesson.id) {
            return Err(Error::LessonAlreadyExists {
                lesson_id: lesson.id.clone(),
            });
        }
        debug!("Adding lesson '{}' ({})", lesson.id, lesson.title);
        self.lessons.push(lesson);
        Ok(())
    }

    /// Remove a custom lesson
    pub fn remove(&mut self, lesson_id: &str) -> Result<Lesson> {
        if self.builtin_ids.iter().any(|id| id == lesson_id) {
            return Err(Error::CannotRemoveBuiltInLesson {
                lesson_id: lesson_id.to_string(),
            });
        }

        let index = self
            .lessons
            .iter()
            .position(|l| l.id == lesson_id)
            .ok_or_else(|| Error::LessonNotFound {
                lesson_id: lesson_id.to_string(),
            })?;
        Ok(self.lessons.remove(index))
    }

    /// Import lessons from TOML text, returning the imported ids
    pub fn import_toml(&mut self, content: &str) -> Result<Vec<String>> {
        let file: LessonFile = toml::from_str(content).map_err(|e| Error::LessonImportFailed {
            reason: e.to_string(),
        })?;
        self.import_all(file.lessons)
    }

    /// Import lessons from JSON text, returning the imported ids
    pub fn import_json(&mut self, content: &str) -> Result<Vec<String>> {
        let file: LessonFile =
            serde_json::from_str(content).map_err(|e| Error::LessonImportFailed {
                reason: e.to_string(),
            })?;
        self.import_all(file.lessons)
    }

    /// Import lessons from a `.toml` or `.json` file
    pub fn load_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)?;
        let ids = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.import_json(&content)?,
            _ => self.import_toml(&content)?,
        };
        info!("Loaded {} lessons from {}", ids.len(), path.display());
        Ok(ids)
    }

    /// Export a lesson as JSON
    pub fn export_json(&self, lesson_id: &str) -> Result<String> {
        let lesson = self.get(lesson_id)?;
        serde_json::to_string_pretty(lesson).map_err(|e| Error::LessonExportFailed {
            lesson_id: lesson_id.to_string(),
            reason: e.to_string(),
        })
    }

    fn import_all(&mut self, lessons: Vec<Lesson>) -> Result<Vec<String>> {
        // Validate everything first so a bad file imports nothing
        for lesson in &lessons {
            lesson.validate()?;
            if self.lessons.iter().any(|l| l.id == lesson.id) {
                return Err(Error::LessonAlreadyExists {
                    lesson_id: lesson.id.clone(),
                });
            }
        }

        let mut ids = Vec::with_capacity(lessons.len());
        for lesson in lessons {
            ids.push(lesson.id.clone());
            self.add(lesson)?;
        }
        Ok(ids)
    }
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn exercise(command: &str, description: &str, explanation: &str) -> Exercise {
    Exercise {
        command: command.to_string(),
        description: description.to_string(),
        explanation: explanation.to_string(),
    }
}

fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            "lab1",
            "Navigation Basics",
            "Learn ls, cd, pwd commands",
            Difficulty::Beginner,
            vec![
                exercise(
                    "pwd",
                    "Print the current working directory",
                    "The pwd command shows you exactly where you are in the file system.",
                ),
                exercise(
                    "ls",
                    "List the contents of the current directory",
                    "The ls command displays all files and folders in your current location.",
                ),
                exercise(
                    "cd Documents",
                    "Change to the Documents directory",
                    "The cd command lets you navigate between directories.",
                ),
                exercise(
                    "pwd",
                    "Verify your new location",
                    "Always good practice to confirm where you are after changing directories.",
                ),
                exercise(
                    "ls",
                    "List contents of the Documents directory",
                    "See what files and folders are in your new location.",
                ),
            ],
        ),
        Lesson::new(
            "lab2",
            "File Operations",
            "Create, copy, move, and delete files",
            Difficulty::Beginner,
            vec![
                exercise(
                    "mkdir myproject",
                    "Create a new directory called \"myproject\"",
                    "mkdir creates directories. Essential for organizing your files.",
                ),
                exercise(
                    "touch readme.txt",
                    "Create an empty file called \"readme.txt\"",
                    "touch creates empty files quickly. Great for creating templates.",
                ),
                exercise(
                    "ls",
                    "List contents to see your new files",
                    "Always verify your file operations were successful.",
                ),
                exercise(
                    "cp readme.txt backup.txt",
                    "Copy readme.txt to create backup.txt",
                    "cp command copies files. Format: cp source destination",
                ),
                exercise(
                    "mv backup.txt archive.txt",
                    "Rename backup.txt to archive.txt",
                    "mv can move files or rename them when used in same directory.",
                ),
                exercise(
                    "rm archive.txt",
                    "Delete the archive.txt file",
                    "rm removes files. Be careful - this is permanent!",
                ),
            ],
        ),
        Lesson::new(
            "lab3",
            "Content Management",
            "View and search file contents",
            Difficulty::Intermediate,
            vec![
                exercise(
                    "echo \"Hello World\"",
                    "Display text on the terminal",
                    "echo prints text to the screen. Basic output command.",
                ),
                exercise(
                    "echo \"Learning Shell\" > learning.txt",
                    "Write text to a new file",
                    "> redirects output to a file, creating or overwriting it.",
                ),
                exercise(
                    "cat learning.txt",
                    "Display the contents of learning.txt",
                    "cat shows the contents of files on your screen.",
                ),
                exercise(
                    "echo \"Advanced Topics\" >> learning.txt",
                    "Append text to the existing file",
                    ">> appends output to a file without overwriting existing content.",
                ),
                exercise(
                    "cat learning.txt",
                    "View the updated file contents",
                    "Verify that your text was appended correctly.",
                ),
            ],
        ),
        Lesson::new(
            "lab4",
            "Variables & Scripts",
            "Shell variables and basic scripting",
            Difficulty::Intermediate,
            vec![
                exercise(
                    "name=\"DevOps\"",
                    "Create a shell variable named \"name\"",
                    "Variables store data that can be reused. No spaces around = sign!",
                ),
                exercise(
                    "echo $name",
                    "Display the value of the name variable",
                    "Use $ prefix to access variable values.",
                ),
                exercise(
                    "echo \"Hello $name\"",
                    "Use the variable in a string",
                    "Variables are expanded inside double quotes.",
                ),
                exercise(
                    "echo \"#!/bin/bash\" > script.sh",
                    "Create a script file with shebang",
                    "Shebang tells system which interpreter to use.",
                ),
                exercise(
                    "echo \"echo Hello from script\" >> script.sh",
                    "Add a command to the script",
                    "Build scripts by adding commands to files.",
                ),
            ],
        ),
        Lesson::new(
            "lab5",
            "Control Flow",
            "Conditionals and loops in shell",
            Difficulty::Advanced,
            vec![
                exercise(
                    "if [ -f \"script.sh\" ]; then echo \"File exists\"; fi",
                    "Check if script.sh file exists using if statement",
                    "if statements allow conditional execution. -f tests for file existence.",
                ),
                exercise(
                    "for i in 1 2 3; do echo \"Number: $i\"; done",
                    "Loop through numbers 1, 2, 3 using for loop",
                    "for loops iterate over lists of items or ranges.",
                ),
                exercise(
                    "count=0",
                    "Initialize a counter variable",
                    "Set up variables for use in loops and conditions.",
                ),
                exercise(
                    "while [ $count -lt 3 ]; do echo \"Count: $count\"; count=$((count + 1)); done",
                    "Use while loop to count from 0 to 2",
                    "while loops continue as long as condition is true. -lt means \"less than\".",
                ),
            ],
        ),
        Lesson::new(
            "lab6",
            "Functions & Parameters",
            "Create reusable shell functions",
            Difficulty::Advanced,
            vec![
                exercise(
                    "greet() { echo \"Hello $1!\"; }",
                    "Create a function that greets someone",
                    "Functions are defined with name() { commands; }. $1 is the first parameter.",
                ),
                exercise(
                    "greet World",
                    "Call the greet function with \"World\" as parameter",
                    "Call functions by name followed by parameters separated by spaces.",
                ),
                exercise(
                    "calculate() { echo $(($1 + $2)); }",
                    "Create a function that adds two numbers",
                    "Use $(( )) for arithmetic operations. $1 and $2 are first and second parameters.",
                ),
                exercise(
                    "calculate 5 3",
                    "Call calculate function with numbers 5 and 3",
                    "Pass multiple parameters separated by spaces.",
                ),
                exercise(
                    "backup_file() { cp \"$1\" \"$1.backup\"; echo \"Backed up $1\"; }",
                    "Create a function to backup files",
                    "Functions can contain multiple commands. Quote parameters to handle spaces.",
                ),
            ],
        ),
        Lesson::new(
            "lab7",
            "Process Management",
            "Managing processes and background jobs",
            Difficulty::Expert,
            vec![
                exercise(
                    "ps aux",
                    "List all running processes",
                    "ps shows process status. aux shows all processes with detailed info.",
                ),
                exercise(
                    "sleep 30 &",
                    "Run sleep command in background",
                    "& at the end runs commands in background, returning control to shell.",
                ),
                exercise(
                    "jobs",
                    "List active background jobs",
                    "jobs shows background processes started from current shell.",
                ),
                exercise(
                    "kill %1",
                    "Kill the first background job",
                    "%1 refers to job number 1. Use kill %n to terminate job n.",
                ),
                exercise(
                    "nohup sleep 60 > /dev/null 2>&1 &",
                    "Run process that survives shell exit",
                    "nohup prevents hangup signal. Redirects output to avoid terminal dependency.",
                ),
            ],
        ),
        Lesson::new(
            "lab8",
            "System Administration",
            "File permissions, users, and system info",
            Difficulty::Expert,
            vec![
                exercise(
                    "ls -la",
                    "List files with detailed permissions",
                    "-l shows long format with permissions, -a shows hidden files starting with .",
                ),
                exercise(
                    "chmod 755 script.sh",
                    "Set file permissions to rwxr-xr-x",
                    "755 means owner can read/write/execute, group and others can read/execute.",
                ),
                exercise(
                    "whoami",
                    "Display current username",
                    "Shows the effective user ID - useful in scripts to check user context.",
                ),
                exercise(
                    "df -h",
                    "Show disk space usage in human-readable format",
                    "df displays filesystem disk space usage. -h makes sizes human-readable.",
                ),
                exercise(
                    "free -h",
                    "Display memory usage information",
                    "free shows RAM and swap usage. -h displays in human-readable format.",
                ),
            ],
        ),
    ]
}
