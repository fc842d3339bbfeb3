//! Scripted scenario module for automated UI runs
//!
//! A scenario is a TOML file of timed actions (tap the mic, select a nav
//! destination, exit) with optional checks, executed against the live shell.
//! Pass the file path as the first CLI argument to run one.

mod runner;

pub use runner::{CheckContext, CheckResult, ScenarioCommand, ScenarioRunner};

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// A scenario loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Scenario metadata
    pub scenario: ScenarioMetadata,
    /// List of timed actions to execute
    pub actions: Vec<ScenarioAction>,
}

/// Metadata about the scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMetadata {
    /// Name of the scenario
    pub name: String,
    /// Description of what the scenario validates
    #[serde(default)]
    pub description: String,
}

/// A single action with timing
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioAction {
    /// Time in milliseconds after scenario start to execute this action
    pub time_ms: u64,
    /// The action to perform
    pub action: ActionKind,
    /// Optional check to validate after the action
    #[serde(default)]
    pub check: Option<CheckKind>,
}

/// Types of actions that can be performed during a scenario
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Tap the mic button (toggle listening)
    TapMic,
    /// Select a bottom-bar destination by index (0..=4)
    SelectNav {
        /// Destination index
        index: usize,
    },
    /// Log a message for debugging
    Log {
        /// Message to log
        message: String,
    },
    /// Exit the application
    Exit {
        /// Exit code (0 for success, non-zero for failure)
        #[serde(default)]
        code: i32,
    },
}

/// Checks that validate shell state mid-scenario
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckKind {
    /// Assert that the mic is toggled on
    IsListening,
    /// Assert that the mic is idle
    IsIdle,
    /// Assert the selected nav index
    NavIndex {
        /// Expected index
        index: usize,
    },
    /// Assert the exact status label text
    StatusText {
        /// Expected text
        text: String,
    },
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let scenario: Scenario =
            toml::from_str(&content).map_err(|e| ScenarioError::Parse {
                path: path.display().to_string(),
                source: e,
            })?;

        scenario.validate()?;
        Ok(scenario)
    }

    /// Validate the scenario
    fn validate(&self) -> Result<(), ScenarioError> {
        if self.actions.is_empty() {
            return Err(ScenarioError::Validation(
                "Scenario must have at least one action".to_string(),
            ));
        }

        // Actions must be ordered by time
        let mut last_time = 0;
        for action in &self.actions {
            if action.time_ms < last_time {
                return Err(ScenarioError::Validation(format!(
                    "Actions must be ordered by time. Found action at {}ms after action at {}ms",
                    action.time_ms, last_time
                )));
            }
            last_time = action.time_ms;

            // Nav indices must land on one of the five destinations
            if let ActionKind::SelectNav { index } = action.action {
                if index > 4 {
                    return Err(ScenarioError::Validation(format!(
                        "select_nav index {index} out of range (0..=4)"
                    )));
                }
            }
        }

        let has_exit = self
            .actions
            .iter()
            .any(|a| matches!(a.action, ActionKind::Exit { .. }));
        if !has_exit {
            return Err(ScenarioError::Validation(
                "Scenario must have an Exit action".to_string(),
            ));
        }

        Ok(())
    }
}

impl ScenarioAction {
    /// Get the duration from scenario start for this action
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}

/// Errors that can occur when loading or validating scenarios
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// IO error reading the file
    #[error("failed to read scenario '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Error parsing the TOML
    #[error("failed to parse scenario '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// Validation error in the scenario
    #[error("invalid scenario: {0}")]
    Validation(String),
}
