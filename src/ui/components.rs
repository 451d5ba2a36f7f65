//! Reusable UI components
//!
//! Small standalone widgets shared by the dashboard states and tabs.

use crate::theme;
use chrono::{DateTime, Local};
use eframe::egui;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Outline,
    Secondary,
}

/// Pill-shaped label
pub fn badge(ui: &mut egui::Ui, text: &str, style: BadgeStyle) -> egui::Response {
    let (fill, stroke, color) = match style {
        BadgeStyle::Outline => (
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
            theme::BADGE_OUTLINE_TEXT,
        ),
        BadgeStyle::Secondary => (
            theme::BADGE_SECONDARY_BG,
            egui::Stroke::NONE,
            theme::BADGE_SECONDARY_TEXT,
        ),
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(theme::RADIUS_PILL)
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .color(color),
                )
                .selectable(false),
            );
        })
        .response
}

/// Wrapped row of badges
pub fn badge_row<'a>(ui: &mut egui::Ui, items: impl IntoIterator<Item = &'a str>, style: BadgeStyle) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_MD, theme::SPACING_MD);
        for item in items {
            badge(ui, item, style);
        }
    });
}

/// Placeholder block shown while the first payload is loading
pub fn skeleton_card(ui: &mut egui::Ui) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, theme::SKELETON_HEIGHT),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        // Slow pulse
        let t = ui.input(|i| i.time);
        let pulse = ((t * 2.0).sin() * 0.5 + 0.5) as f32;
        let fill = theme::BG_SKELETON.gamma_multiply(0.6 + 0.4 * pulse);
        ui.painter().rect_filled(rect, theme::RADIUS_MEDIUM, fill);
        ui.ctx().request_repaint();
    }
}

/// Underlined tab header. Returns true if clicked.
pub fn tab_button(ui: &mut egui::Ui, label: &str, selected: bool, width: f32) -> bool {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, theme::TAB_HEIGHT), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let (bg, text_color) = if selected {
            (theme::BG_SURFACE, theme::TEXT_PRIMARY)
        } else if response.hovered() {
            (theme::BG_ELEVATED, theme::TEXT_SECONDARY)
        } else {
            (egui::Color32::TRANSPARENT, theme::TEXT_MUTED)
        };
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, bg);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(theme::FONT_LABEL),
            text_color,
        );
        if selected {
            let underline = egui::Rect::from_min_max(
                egui::pos2(rect.left() + 6.0, rect.bottom() - 2.0),
                egui::pos2(rect.right() - 6.0, rect.bottom()),
            );
            painter.rect_filled(underline, 1.0, theme::ACCENT);
        }
    }

    response.clicked()
}

/// "Updated 14:05" for today, otherwise with the date
pub fn format_last_updated(at: DateTime<Local>, now: DateTime<Local>) -> String {
    if at.date_naive() == now.date_naive() {
        format!("Updated {}", at.format("%H:%M"))
    } else {
        format!("Updated {}", at.format("%Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_updated_today_shows_time_only() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap();
        let at = Local.with_ymd_and_hms(2024, 5, 1, 14, 5, 0).unwrap();
        assert_eq!(format_last_updated(at, now), "Updated 14:05");
    }

    #[test]
    fn last_updated_earlier_day_shows_date() {
        let now = Local.with_ymd_and_hms(2024, 5, 2, 0, 10, 0).unwrap();
        let at = Local.with_ymd_and_hms(2024, 5, 1, 23, 55, 0).unwrap();
        assert_eq!(format_last_updated(at, now), "Updated 2024-05-01 23:55");
    }
}
