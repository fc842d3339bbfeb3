//! Navigation destinations and the port the shell routes through
//!
//! Real screen routing does not exist yet. The shell stays decoupled from it
//! by talking to a [`NavigationPort`], currently satisfied by a stub that
//! logs the selected destination.

use std::fmt;

use tracing::info;

/// One of the five fixed bottom-bar destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Home,
    History,
    Notes,
    Calendar,
    Settings,
}

impl Destination {
    /// All destinations in bottom-bar order.
    pub const ALL: [Destination; 5] = [
        Destination::Home,
        Destination::History,
        Destination::Notes,
        Destination::Calendar,
        Destination::Settings,
    ];

    /// Bottom-bar label shown under the icon.
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::History => "History",
            Destination::Notes => "Notes",
            Destination::Calendar => "Calendar",
            Destination::Settings => "Settings",
        }
    }

    /// Lowercase name used on the diagnostic channel.
    pub fn name(&self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::History => "history",
            Destination::Notes => "notes",
            Destination::Calendar => "calendar",
            Destination::Settings => "settings",
        }
    }

    /// Position of this destination in the bar (0..=4).
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or(0)
    }

    /// Look up a destination by bar position.
    pub fn from_index(index: usize) -> Option<Destination> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Port through which the shell requests a screen change.
///
/// Keeping this behind a trait lets a real router replace the logging stub
/// without touching shell logic.
pub trait NavigationPort {
    /// Request navigation to the given destination.
    fn navigate_to(&mut self, destination: Destination);
}

/// Placeholder navigator: logs the destination and does nothing else.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl LoggingNavigator {
    /// Create a new logging navigator.
    pub fn new() -> Self {
        Self
    }
}

impl NavigationPort for LoggingNavigator {
    fn navigate_to(&mut self, destination: Destination) {
        info!("Navigating to: {}", destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, destination) in Destination::ALL.iter().enumerate() {
            assert_eq!(destination.index(), i);
            assert_eq!(Destination::from_index(i), Some(*destination));
        }
        assert_eq!(Destination::from_index(5), None);
    }

    #[test]
    fn test_diagnostic_names_match_table() {
        let expected = ["home", "history", "notes", "calendar", "settings"];
        for (destination, name) in Destination::ALL.iter().zip(expected) {
            assert_eq!(destination.name(), name);
            assert_eq!(destination.to_string(), name);
        }
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Destination::default(), Destination::Home);
        assert_eq!(Destination::default().index(), 0);
    }
}
