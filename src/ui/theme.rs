//! Theme and styling for the Assister UI
//!
//! This module is the single token table for the shell's colors and metrics.
//! The hex values mirror the product mockups and must stay bit-exact.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary accent color (#6366f1)
    pub accent: Color32,

    /// Page background (#0a0a0f)
    pub bg_primary: Color32,
    /// Bottom navigation bar background (#12121a)
    pub nav_bar: Color32,
    /// Selection indicator tint behind the active nav icon (#6366f130)
    pub nav_indicator: Color32,

    /// Mic button fill while idle (#2a2a3e)
    pub mic_idle: Color32,
    /// Mic container border while idle (#3a3a4e)
    pub mic_border_idle: Color32,
    /// Soft glow under the mic container (#6366f120)
    pub mic_shadow: Color32,

    /// Primary text (#ffffff)
    pub text_primary: Color32,
    /// Muted text: subtitle, idle status, inactive nav labels (#64748b)
    pub text_muted: Color32,
    /// Icon glyph color (#ffffff)
    pub icon: Color32,

    /// Fixed window size in logical units
    pub window_size: Vec2,
    /// Mic glyph size
    pub mic_icon_size: f32,
    /// Mic button/container diameter
    pub mic_diameter: f32,
    /// Pulse ring diameter (also the mic stack region)
    pub ring_diameter: f32,
    /// Pulse ring stroke width
    pub ring_stroke: f32,
    /// Bottom navigation bar height
    pub nav_height: f32,

    /// Pulse ring opacity transition, seconds (ease-out)
    pub ring_transition: f32,
    /// Mic container border transition, seconds (ease-out)
    pub mic_transition: f32,

    /// Border radius for the nav selection indicator
    pub indicator_rounding: Rounding,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the dark theme (the only theme the shell ships)
    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(99, 102, 241), // #6366f1

            bg_primary: Color32::from_rgb(10, 10, 15), // #0a0a0f
            nav_bar: Color32::from_rgb(18, 18, 26),    // #12121a
            nav_indicator: Color32::from_rgba_unmultiplied(99, 102, 241, 0x30),

            mic_idle: Color32::from_rgb(42, 42, 62),        // #2a2a3e
            mic_border_idle: Color32::from_rgb(58, 58, 78), // #3a3a4e
            mic_shadow: Color32::from_rgba_unmultiplied(99, 102, 241, 0x20),

            text_primary: Color32::from_rgb(255, 255, 255),
            text_muted: Color32::from_rgb(100, 116, 139), // #64748b
            icon: Color32::from_rgb(255, 255, 255),

            window_size: Vec2::new(400.0, 750.0),
            mic_icon_size: 80.0,
            mic_diameter: 160.0,
            ring_diameter: 200.0,
            ring_stroke: 2.0,
            nav_height: 70.0,

            ring_transition: 0.3,
            mic_transition: 0.2,

            indicator_rounding: Rounding::same(16.0),
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        // Panel backgrounds
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.nav_bar;
        visuals.extreme_bg_color = self.mic_idle;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.nav_bar;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);

        visuals.widgets.inactive.bg_fill = self.mic_idle;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_muted);

        visuals.widgets.hovered.bg_fill = self.accent.gamma_multiply(0.8);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Text selection
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        // Hyperlinks
        visuals.hyperlink_color = self.accent;

        ctx.set_visuals(visuals);

        // Zero page padding: panel frames are provided explicitly by the app
        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::ZERO;
        style.spacing.window_margin = egui::Margin::ZERO;

        // Text styles
        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(32.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_values_are_exact() {
        let theme = Theme::dark();
        assert_eq!(theme.accent, Color32::from_rgb(0x63, 0x66, 0xf1));
        assert_eq!(theme.bg_primary, Color32::from_rgb(0x0a, 0x0a, 0x0f));
        assert_eq!(theme.nav_bar, Color32::from_rgb(0x12, 0x12, 0x1a));
        assert_eq!(theme.mic_idle, Color32::from_rgb(0x2a, 0x2a, 0x3e));
        assert_eq!(theme.mic_border_idle, Color32::from_rgb(0x3a, 0x3a, 0x4e));
        assert_eq!(theme.text_muted, Color32::from_rgb(0x64, 0x74, 0x8b));
        assert_eq!(
            theme.nav_indicator,
            Color32::from_rgba_unmultiplied(0x63, 0x66, 0xf1, 0x30)
        );
    }

    #[test]
    fn test_window_and_layout_metrics() {
        let theme = Theme::dark();
        assert_eq!(theme.window_size, Vec2::new(400.0, 750.0));
        assert_eq!(theme.mic_icon_size, 80.0);
        assert_eq!(theme.mic_diameter, 160.0);
        assert_eq!(theme.ring_diameter, 200.0);
        assert_eq!(theme.nav_height, 70.0);
    }
}
