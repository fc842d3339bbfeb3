//! Bottom navigation bar component
//!
//! Five fixed destinations with always-visible labels and a tinted pill
//! indicator behind the selected icon. Selection is recorded in the shell
//! state; actual routing is the caller's concern.

use egui::{Pos2, Rect, Sense, Shape, Stroke, Vec2};
use tracing::debug;

use crate::nav::Destination;
use crate::ui::state::ShellState;
use crate::ui::theme::Theme;

/// Bottom navigation bar with the five fixed destinations
pub struct NavBar<'a> {
    state: &'a mut ShellState,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    /// Create a new navigation bar component
    pub fn new(state: &'a mut ShellState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Show the bar. Returns the destination the user tapped this frame.
    pub fn show(self, ui: &mut egui::Ui) -> Option<Destination> {
        let mut tapped = None;
        let item_width = ui.available_width() / Destination::ALL.len() as f32;

        ui.horizontal(|ui| {
            for destination in Destination::ALL {
                let size = Vec2::new(item_width, self.theme.nav_height);
                let (rect, response) = ui.allocate_exact_size(size, Sense::click());
                let selected = self.state.selected == destination;

                if ui.is_rect_visible(rect) {
                    self.paint_item(ui, rect, destination, selected, &response);
                }

                response.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Button,
                        true,
                        destination.label(),
                    )
                });

                if response.clicked() {
                    self.state.select(destination);
                    debug!("Nav item tapped: {}", destination);
                    tapped = Some(destination);
                }
            }
        });

        tapped
    }

    /// Paint one destination: indicator pill, icon, label
    fn paint_item(
        &self,
        ui: &egui::Ui,
        rect: Rect,
        destination: Destination,
        selected: bool,
        response: &egui::Response,
    ) {
        let painter = ui.painter();
        let icon_center = Pos2::new(rect.center().x, rect.top() + 26.0);

        // Selection indicator behind the icon
        if selected {
            let pill = Rect::from_center_size(icon_center, Vec2::new(56.0, 30.0));
            painter.rect_filled(pill, self.theme.indicator_rounding, self.theme.nav_indicator);
        } else if response.hovered() {
            let pill = Rect::from_center_size(icon_center, Vec2::new(56.0, 30.0));
            painter.rect_filled(
                pill,
                self.theme.indicator_rounding,
                self.theme.nav_indicator.gamma_multiply(0.4),
            );
        }

        let icon_color = if selected {
            self.theme.text_primary
        } else {
            self.theme.text_muted
        };
        self.draw_icon(painter, icon_center, destination, selected, icon_color);

        // Always-shown label under the icon
        painter.text(
            Pos2::new(rect.center().x, rect.top() + 50.0),
            egui::Align2::CENTER_TOP,
            destination.label(),
            egui::FontId::proportional(11.0),
            if selected {
                self.theme.text_primary
            } else {
                self.theme.text_muted
            },
        );
    }

    /// Draw the destination glyph. Selected destinations get the filled variant.
    fn draw_icon(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        destination: Destination,
        selected: bool,
        color: egui::Color32,
    ) {
        let stroke = Stroke::new(1.6, color);
        match destination {
            Destination::Home => {
                // Roof
                let roof = vec![
                    Pos2::new(center.x - 8.0, center.y),
                    Pos2::new(center.x, center.y - 7.0),
                    Pos2::new(center.x + 8.0, center.y),
                ];
                painter.add(Shape::line(roof, stroke));
                // Body
                let body = Rect::from_min_max(
                    Pos2::new(center.x - 6.0, center.y),
                    Pos2::new(center.x + 6.0, center.y + 7.0),
                );
                if selected {
                    painter.rect_filled(body, 1.0, color);
                } else {
                    painter.rect_stroke(body, 1.0, stroke);
                }
            }
            Destination::History => {
                painter.circle_stroke(center, 8.0, stroke);
                // Clock hands
                painter.line_segment([center, Pos2::new(center.x, center.y - 5.0)], stroke);
                painter.line_segment([center, Pos2::new(center.x + 4.0, center.y + 2.0)], stroke);
                if selected {
                    painter.circle_filled(center, 1.8, color);
                }
            }
            Destination::Notes => {
                let sheet = Rect::from_center_size(center, Vec2::new(13.0, 16.0));
                if selected {
                    painter.rect_filled(sheet, 2.0, color.gamma_multiply(0.35));
                }
                painter.rect_stroke(sheet, 2.0, stroke);
                for dy in [-3.0, 0.0, 3.0] {
                    painter.line_segment(
                        [
                            Pos2::new(center.x - 4.0, center.y + dy),
                            Pos2::new(center.x + 4.0, center.y + dy),
                        ],
                        stroke,
                    );
                }
            }
            Destination::Calendar => {
                let sheet = Rect::from_center_size(center, Vec2::new(16.0, 15.0));
                painter.rect_stroke(sheet, 2.0, stroke);
                // Header band
                let header = Rect::from_min_max(
                    sheet.min,
                    Pos2::new(sheet.max.x, sheet.min.y + 4.0),
                );
                if selected {
                    painter.rect_filled(header, 2.0, color);
                } else {
                    painter.line_segment(
                        [
                            Pos2::new(sheet.min.x, sheet.min.y + 4.0),
                            Pos2::new(sheet.max.x, sheet.min.y + 4.0),
                        ],
                        stroke,
                    );
                }
                // Binder rings
                for dx in [-4.0, 4.0] {
                    painter.line_segment(
                        [
                            Pos2::new(center.x + dx, sheet.min.y - 2.0),
                            Pos2::new(center.x + dx, sheet.min.y + 1.0),
                        ],
                        stroke,
                    );
                }
            }
            Destination::Settings => {
                painter.circle_stroke(center, 7.0, stroke);
                // Gear teeth
                for i in 0..8 {
                    let angle = i as f32 * std::f32::consts::TAU / 8.0;
                    let dir = Vec2::new(angle.cos(), angle.sin());
                    painter.line_segment([center + dir * 7.0, center + dir * 10.0], stroke);
                }
                if selected {
                    painter.circle_filled(center, 3.0, color);
                } else {
                    painter.circle_stroke(center, 3.0, stroke);
                }
            }
        }
    }
}
