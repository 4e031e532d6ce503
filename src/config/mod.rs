//! Configuration management for Shell Lab
//!
//! Loading/saving configuration files, plus the runtime configuration that
//! pairs the settings with the lesson catalog they select.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lessons::LessonCatalog;

/// Working directory label used when none is configured
pub const DEFAULT_WORKING_DIRECTORY: &str = "/home/user";

/// Main configuration structure for Shell Lab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated terminal configuration
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Lesson catalog configuration
    #[serde(default)]
    pub lessons: LessonsConfig,
}

/// Simulated terminal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Working directory label shown in the prompt and by `pwd`
    pub working_directory: String,

    /// Text between the working directory and the typed line
    pub prompt_delimiter: String,

    /// Lines a new transcript starts with
    pub welcome_banner: Vec<String>,

    /// Re-seed the welcome banner on `clear` instead of emptying the transcript
    pub restore_banner_on_clear: bool,

    /// Lower-case the whole line before extracting command arguments
    pub legacy_lowercase_arguments: bool,

    /// Maximum number of transcript entries kept
    pub max_transcript_entries: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            working_directory: DEFAULT_WORKING_DIRECTORY.to_string(),
            prompt_delimiter: "$ ".to_string(),
            welcome_banner: vec![
                "Welcome to the DevOps Shell Lab Terminal!".to_string(),
                "Type commands below to practice. Use \"help\" for available commands.".to_string(),
            ],
            restore_banner_on_clear: false,
            legacy_lowercase_arguments: false,
            max_transcript_entries: 10_000,
        }
    }
}

/// Lesson catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonsConfig {
    /// Extra lessons to load on top of the built-in ones
    pub catalog_path: Option<PathBuf>,

    /// Lesson opened when none is requested
    pub default_lesson: Option<String>,
}

/// Configuration plus the lesson catalog it selects
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    config: Config,
    catalog: LessonCatalog,
}

impl RuntimeConfig {
    /// Runtime configuration from the default search locations
    pub fn new() -> Result<Self> {
        let config = loader::ConfigLoader::load()?;
        Self::from_config(config)
    }

    /// Runtime configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config = loader::ConfigLoader::load_from_path(path)?;
        Self::from_config(config)
    }

    /// Runtime configuration from an already loaded config
    pub fn from_config(config: Config) -> Result<Self> {
        let mut catalog = LessonCatalog::new();
        if let Some(path) = &config.lessons.catalog_path {
            catalog.load_file(path)?;
        }
        if let Some(id) = &config.lessons.default_lesson {
            // Fail early on a typo rather than when the lesson is opened
            catalog.get(id)?;
        }
        Ok(Self { config, catalog })
    }

    /// Loaded configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lesson catalog
    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    /// Mutable lesson catalog
    pub fn catalog_mut(&mut self) -> &mut LessonCatalog {
        &mut self.catalog
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            config: Config::default(),
            catalog: LessonCatalog::new(),
        }
    }
}
