//! UI components and application module
//!
//! This module provides the egui/eframe-based shell for Assister.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::AssisterApp;
pub use components::{MicButton, NavBar};
pub use state::{MicIcon, MicVisuals, ShellState};
pub use theme::Theme;
