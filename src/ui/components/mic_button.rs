//! Mic button component
//!
//! The layered mic stack: pulse ring behind a circular bordered button with a
//! painted mic glyph. Clicking (or pressing Space) toggles the listening flag.

use egui::{Rect, Sense, Stroke, Vec2};
use tracing::debug;

use crate::ui::state::{MicIcon, MicVisuals, ShellState};
use crate::ui::theme::Theme;

/// Quadratic ease-out over a 0..=1 animation phase.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Mic toggle button with pulse ring
pub struct MicButton<'a> {
    state: &'a mut ShellState,
    theme: &'a Theme,
}

impl<'a> MicButton<'a> {
    /// Create a new mic button component
    pub fn new(state: &'a mut ShellState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Show the mic stack and return the response
    pub fn show(mut self, ui: &mut egui::Ui) -> egui::Response {
        // The stack region is the pulse ring's bounding square
        let size = Vec2::splat(self.theme.ring_diameter);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &response);
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Microphone")
        });

        self.handle_interactions(ui, &response);
        self.show_tooltip(&response);

        response
    }

    /// Paint ring, shadow, button circle, border and glyph
    fn paint(&self, ui: &mut egui::Ui, rect: Rect, response: &egui::Response) {
        let center = rect.center();
        let visuals = MicVisuals::for_state(self.theme, self.state.listening);

        // Pulse ring opacity, 300ms ease-out toward the target
        let ring_phase = ui.ctx().animate_bool_with_time(
            response.id.with("pulse_ring"),
            self.state.listening,
            self.theme.ring_transition,
        );
        let ring_opacity = ease_out(ring_phase);
        if ring_opacity > 0.0 {
            ui.painter().circle_stroke(
                center,
                self.theme.ring_diameter / 2.0,
                Stroke::new(
                    self.theme.ring_stroke,
                    self.theme.accent.gamma_multiply(ring_opacity),
                ),
            );
        }

        // Soft glow under the container, widest layer faintest
        for (i, spread) in [24.0, 16.0, 8.0].into_iter().enumerate() {
            let alpha = 0.4 + i as f32 * 0.3;
            ui.painter().circle_filled(
                center + Vec2::new(0.0, 10.0),
                self.theme.mic_diameter / 2.0 + spread,
                self.theme.mic_shadow.gamma_multiply(alpha * 0.4),
            );
        }

        // Button fill
        let radius = self.theme.mic_diameter / 2.0;
        let mut fill = visuals.button_fill;
        if response.hovered() && !self.state.listening {
            fill = fill.gamma_multiply(1.2);
        }
        ui.painter().circle_filled(center, radius, fill);

        // Container border, 2px idle to 3px listening over 200ms
        let border_phase = ui.ctx().animate_bool_with_time(
            response.id.with("border"),
            self.state.listening,
            self.theme.mic_transition,
        );
        let border_width = 2.0 + ease_out(border_phase);
        ui.painter()
            .circle_stroke(center, radius, Stroke::new(border_width, visuals.border_color));

        // Mic glyph
        match visuals.icon {
            MicIcon::Filled => self.draw_mic_glyph(ui.painter(), center, true),
            MicIcon::Outline => self.draw_mic_glyph(ui.painter(), center, false),
        }
    }

    /// Draw the mic glyph, filled or outlined, scaled to the icon size
    fn draw_mic_glyph(&self, painter: &egui::Painter, center: egui::Pos2, filled: bool) {
        let color = self.theme.icon;
        let scale = self.theme.mic_icon_size / 80.0;
        let stroke = Stroke::new(5.0 * scale, color);

        // Capsule body
        let body_size = Vec2::new(22.0, 38.0) * scale;
        let body = Rect::from_center_size(
            egui::pos2(center.x, center.y - 8.0 * scale),
            body_size,
        );
        let rounding = body_size.x / 2.0;
        if filled {
            painter.rect_filled(body, rounding, color);
        } else {
            painter.rect_stroke(body, rounding, Stroke::new(4.0 * scale, color));
        }

        // Cradle arc below the body
        let arc_center = egui::pos2(center.x, center.y + 2.0 * scale);
        let arc_radius = 28.0 * scale;
        let num_segments = 12;
        for i in 0..num_segments {
            let start_angle = std::f32::consts::PI * (i as f32 / num_segments as f32);
            let end_angle = std::f32::consts::PI * ((i + 1) as f32 / num_segments as f32);
            let start = egui::pos2(
                arc_center.x - arc_radius * start_angle.cos(),
                arc_center.y + arc_radius * start_angle.sin(),
            );
            let end = egui::pos2(
                arc_center.x - arc_radius * end_angle.cos(),
                arc_center.y + arc_radius * end_angle.sin(),
            );
            painter.line_segment([start, end], stroke);
        }

        // Stem and base
        let stem_top = egui::pos2(center.x, arc_center.y + arc_radius);
        let stem_bottom = egui::pos2(center.x, arc_center.y + arc_radius + 8.0 * scale);
        painter.line_segment([stem_top, stem_bottom], stroke);

        let base_half = 16.0 * scale;
        painter.line_segment(
            [
                egui::pos2(center.x - base_half, stem_bottom.y),
                egui::pos2(center.x + base_half, stem_bottom.y),
            ],
            stroke,
        );
    }

    /// Handle click and the Space shortcut
    fn handle_interactions(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.clicked() {
            self.state.toggle_listening();
            debug!("Mic toggled, listening={}", self.state.listening);
            return;
        }

        // Space toggles when no widget holds focus
        let space_pressed = ui.input(|i| i.key_pressed(egui::Key::Space));
        let any_widget_focused = ui.memory(|m| m.focused().is_some());
        if space_pressed && !any_widget_focused {
            self.state.toggle_listening();
            debug!("Mic toggled via keyboard, listening={}", self.state.listening);
        }
    }

    /// Tooltip naming the current action
    fn show_tooltip(&self, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let tooltip_text = if self.state.listening {
            "Listening... tap to stop"
        } else {
            "Tap to speak (Space)"
        };
        response.clone().on_hover_text(tooltip_text);
    }
}
