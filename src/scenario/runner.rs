//! Scenario runner
//!
//! Schedules the loaded actions against wall-clock time and checks the shell
//! state after each one. The UI polls the runner once per frame.

use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use super::{ActionKind, CheckKind, Scenario};
use crate::nav::Destination;

/// Commands the runner hands to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioCommand {
    /// Tap the mic button
    TapMic,
    /// Select a bottom-bar destination
    SelectNav(Destination),
    /// Message already logged by the runner; carries only its check
    Log,
    /// Exit the application
    Exit { code: i32 },
}

/// Result of a check
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// Check passed
    Passed,
    /// Check failed with reason
    Failed(String),
}

/// Shell state snapshot handed from the UI to the runner for checks
pub struct CheckContext {
    pub listening: bool,
    pub selected_index: usize,
    pub status_text: &'static str,
}

/// Runner that executes scenario actions at their scheduled times
pub struct ScenarioRunner {
    scenario: Scenario,
    start_time: Option<Instant>,
    current_action_index: usize,
    completed: bool,
    passed: bool,
}

impl ScenarioRunner {
    /// Create a new runner from a loaded scenario
    pub fn new(scenario: Scenario) -> Self {
        info!("[SCENARIO] Loaded scenario: {}", scenario.scenario.name);
        if !scenario.scenario.description.is_empty() {
            info!("[SCENARIO] Description: {}", scenario.scenario.description);
        }
        info!("[SCENARIO] Total actions: {}", scenario.actions.len());

        Self {
            scenario,
            start_time: None,
            current_action_index: 0,
            completed: false,
            passed: true,
        }
    }

    /// Start the clock (call this on the first frame)
    pub fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
            info!("[SCENARIO] Started: {}", self.scenario.scenario.name);
        }
    }

    /// Check if every action has run
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Check if all checks passed (only meaningful after completion)
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Poll for the next command whose time has come.
    ///
    /// Every due action yields a command so its check always reaches the UI;
    /// `log` messages are emitted here and surface as a no-op command.
    pub fn poll(&mut self) -> Option<(ScenarioCommand, Option<CheckKind>)> {
        if self.completed {
            return None;
        }

        let start_time = self.start_time?;

        if self.current_action_index >= self.scenario.actions.len() {
            self.completed = true;
            return None;
        }

        let action = &self.scenario.actions[self.current_action_index];
        if start_time.elapsed() < action.delay() {
            return None;
        }

        debug!(
            "[SCENARIO] Executing action at {}ms: {:?}",
            action.time_ms, action.action
        );
        let check = action.check.clone();

        let command = match &action.action {
            ActionKind::TapMic => ScenarioCommand::TapMic,
            ActionKind::SelectNav { index } => {
                // Index validated at load time
                let destination = Destination::from_index(*index).unwrap_or(Destination::Home);
                ScenarioCommand::SelectNav(destination)
            }
            ActionKind::Log { message } => {
                info!("[SCENARIO] Log: {}", message);
                ScenarioCommand::Log
            }
            ActionKind::Exit { code } => ScenarioCommand::Exit { code: *code },
        };

        self.current_action_index += 1;
        if self.current_action_index >= self.scenario.actions.len() {
            self.completed = true;
        }

        Some((command, check))
    }

    /// Check a scenario check against the current shell state
    pub fn run_check(&mut self, check: &CheckKind, context: &CheckContext) -> CheckResult {
        let result = match check {
            CheckKind::IsListening => {
                if context.listening {
                    CheckResult::Passed
                } else {
                    CheckResult::Failed("Expected mic to be listening".to_string())
                }
            }
            CheckKind::IsIdle => {
                if !context.listening {
                    CheckResult::Passed
                } else {
                    CheckResult::Failed("Expected mic to be idle".to_string())
                }
            }
            CheckKind::NavIndex { index } => {
                if context.selected_index == *index {
                    CheckResult::Passed
                } else {
                    CheckResult::Failed(format!(
                        "Expected nav index {}, got {}",
                        index, context.selected_index
                    ))
                }
            }
            CheckKind::StatusText { text } => {
                if context.status_text == text {
                    CheckResult::Passed
                } else {
                    CheckResult::Failed(format!(
                        "Expected status text '{}', got '{}'",
                        text, context.status_text
                    ))
                }
            }
        };

        match &result {
            CheckResult::Passed => {
                info!("[SCENARIO] PASS: {:?}", check);
            }
            CheckResult::Failed(reason) => {
                error!("[SCENARIO] FAIL: {:?} - {}", check, reason);
                self.passed = false;
            }
        }

        result
    }

    /// Summary line for the end of the run
    pub fn summary(&self) -> String {
        let status = if self.passed { "PASSED" } else { "FAILED" };
        format!(
            "[SCENARIO] '{}' {}: executed {} actions in {:?}",
            self.scenario.scenario.name,
            status,
            self.current_action_index,
            self.elapsed()
        )
    }
}
