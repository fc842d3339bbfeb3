//! Reusable UI components for the Assister shell

pub mod mic_button;
pub mod nav_bar;

pub use mic_button::MicButton;
pub use nav_bar::NavBar;
