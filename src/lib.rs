//! Assister - single-screen voice assistant UI shell
//!
//! This crate renders the Assister placeholder screen: a dark themed page
//! with a microphone toggle button, a pulse-ring animation, a status label,
//! and a five-item bottom navigation bar. Speech capture and real screen
//! routing do not exist yet; navigation taps are forwarded to a logging
//! stub behind [`nav::NavigationPort`].

pub mod nav;
pub mod scenario;
pub mod ui;

// Re-export navigation types
pub use nav::{Destination, LoggingNavigator, NavigationPort};

// Re-export scenario types
pub use scenario::{Scenario, ScenarioError, ScenarioRunner};

// Re-export UI types
pub use ui::{AssisterApp, MicIcon, MicVisuals, ShellState, Theme};
