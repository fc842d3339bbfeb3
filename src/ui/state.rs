//! Shell state and its reducer-style transitions
//!
//! All mutation is confined to [`ShellState`]; the visual consequences of the
//! listening flag are computed by the pure [`MicVisuals::for_state`] function
//! so both transitions can be unit tested without a UI runtime.

use egui::Color32;

use crate::nav::Destination;
use crate::ui::theme::Theme;

/// Central state for the Assister shell.
///
/// Both fields are transient presentation state, reset on every launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    /// Whether the mic button is toggled on
    pub listening: bool,
    /// Currently selected bottom-bar destination
    pub selected: Destination,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    /// Create the initial state: idle, Home selected.
    pub fn new() -> Self {
        Self {
            listening: false,
            selected: Destination::Home,
        }
    }

    /// Flip the listening flag. The only way it ever changes.
    pub fn toggle_listening(&mut self) {
        self.listening = !self.listening;
    }

    /// Record the bottom-bar selection.
    pub fn select(&mut self, destination: Destination) {
        self.selected = destination;
    }

    /// Check if the mic is toggled on
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Status label text for the current state.
    pub fn status_text(&self) -> &'static str {
        if self.listening {
            "Listening..."
        } else {
            "Tap to speak"
        }
    }
}

/// Mic glyph variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicIcon {
    /// Outlined glyph shown while idle
    Outline,
    /// Filled glyph shown while listening
    Filled,
}

/// Desired appearance of the mic stack and status label.
///
/// A pure function of the listening flag; the widgets paint whatever this
/// says without consulting any other state.
#[derive(Clone, Debug, PartialEq)]
pub struct MicVisuals {
    /// Which mic glyph to draw
    pub icon: MicIcon,
    /// Mic button fill
    pub button_fill: Color32,
    /// Mic container border width (2px idle, 3px listening)
    pub border_width: f32,
    /// Mic container border color
    pub border_color: Color32,
    /// Status label text
    pub status_text: &'static str,
    /// Status label color
    pub status_color: Color32,
    /// Target pulse ring opacity (0 hidden, 1 visible)
    pub ring_opacity: f32,
}

impl MicVisuals {
    /// Compute the desired visuals for the given listening flag.
    pub fn for_state(theme: &Theme, listening: bool) -> Self {
        if listening {
            Self {
                icon: MicIcon::Filled,
                button_fill: theme.accent,
                border_width: 3.0,
                border_color: theme.accent,
                status_text: "Listening...",
                status_color: theme.accent,
                ring_opacity: 1.0,
            }
        } else {
            Self {
                icon: MicIcon::Outline,
                button_fill: theme.mic_idle,
                border_width: 2.0,
                border_color: theme.mic_border_idle,
                status_text: "Tap to speak",
                status_color: theme.text_muted,
                ring_opacity: 0.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle_home() {
        let state = ShellState::new();
        assert!(!state.is_listening());
        assert_eq!(state.selected, Destination::Home);
        assert_eq!(state.status_text(), "Tap to speak");
    }

    #[test]
    fn test_toggle_parity() {
        let mut state = ShellState::new();
        for n in 1..=8 {
            state.toggle_listening();
            assert_eq!(state.is_listening(), n % 2 == 1);
        }
    }

    #[test]
    fn test_double_toggle_restores_idle_snapshot() {
        let theme = Theme::dark();
        let mut state = ShellState::new();
        let before = MicVisuals::for_state(&theme, state.listening);

        state.toggle_listening();
        state.toggle_listening();

        let after = MicVisuals::for_state(&theme, state.listening);
        assert_eq!(state, ShellState::new());
        assert_eq!(before, after);
    }

    #[test]
    fn test_idle_visuals() {
        let theme = Theme::dark();
        let visuals = MicVisuals::for_state(&theme, false);
        assert_eq!(visuals.icon, MicIcon::Outline);
        assert_eq!(visuals.button_fill, theme.mic_idle);
        assert_eq!(visuals.border_width, 2.0);
        assert_eq!(visuals.border_color, theme.mic_border_idle);
        assert_eq!(visuals.status_text, "Tap to speak");
        assert_eq!(visuals.status_color, theme.text_muted);
        assert_eq!(visuals.ring_opacity, 0.0);
    }

    #[test]
    fn test_listening_visuals() {
        let theme = Theme::dark();
        let visuals = MicVisuals::for_state(&theme, true);
        assert_eq!(visuals.icon, MicIcon::Filled);
        assert_eq!(visuals.button_fill, theme.accent);
        assert_eq!(visuals.border_width, 3.0);
        assert_eq!(visuals.border_color, theme.accent);
        assert_eq!(visuals.status_text, "Listening...");
        assert_eq!(visuals.status_color, theme.accent);
        assert_eq!(visuals.ring_opacity, 1.0);
    }

    #[test]
    fn test_select_destination() {
        let mut state = ShellState::new();
        state.select(Destination::Calendar);
        assert_eq!(state.selected, Destination::Calendar);
        // Selection does not disturb the listening flag
        assert!(!state.is_listening());
    }
}
