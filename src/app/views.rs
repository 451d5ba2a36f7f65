//! View rendering (loading, error, loaded tabs)

use super::App;
use crate::theme;
use crate::ui::components::{
    badge, badge_row, format_last_updated, skeleton_card, tab_button, BadgeStyle,
};
use eframe::egui;
use global_news_dashboard::constants::APP_NAME;
use global_news_dashboard::types::{AggregationResult, DashboardTab, Perspective, ViewState};
use global_news_dashboard::views::{keywords_view, perspectives_view, sources_view};

fn page_title(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_PAGE_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
}

impl App {
    pub(crate) fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.set_max_width(theme::CONTENT_MAX_WIDTH);
        match self.dashboard.state() {
            ViewState::Loading => self.render_loading(ui),
            ViewState::Error(message) => self.render_error(ui, &message),
            ViewState::Loaded(data) => self.render_loaded(ui, &data),
        }
    }

    fn render_loading(&self, ui: &mut egui::Ui) {
        page_title(ui, APP_NAME);
        ui.add_space(theme::SPACING_XL);
        for _ in 0..theme::SKELETON_COUNT {
            skeleton_card(ui);
            ui.add_space(theme::SPACING_XL);
        }
    }

    fn render_error(&self, ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                        .size(theme::FONT_ERROR_ICON)
                        .color(theme::STATUS_ERROR),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XL);
            ui.label(
                egui::RichText::new(message)
                    .size(theme::FONT_BODY)
                    .color(theme::STATUS_ERROR),
            );
        });
    }

    fn render_loaded(&mut self, ui: &mut egui::Ui, data: &AggregationResult) {
        page_title(ui, "Global News Perspectives");
        ui.add_space(theme::SPACING_MD);

        ui.horizontal(|ui| {
            badge(
                ui,
                &format!("Total Articles: {}", data.total_articles),
                BadgeStyle::Outline,
            );
            badge(
                ui,
                &format!("Topic Clusters: {}", data.topic_clusters),
                BadgeStyle::Outline,
            );
            if let Some(at) = self.dashboard.last_updated() {
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(format_last_updated(at, chrono::Local::now()))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            }
        });
        ui.add_space(theme::SPACING_XXL);

        self.render_tab_bar(ui);
        ui.add_space(theme::SPACING_LG);

        egui::ScrollArea::vertical()
            .id_salt("dashboard_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| match self.active_tab {
                DashboardTab::Perspectives => {
                    for perspective in perspectives_view(data) {
                        render_perspective_card(ui, perspective);
                        ui.add_space(theme::SPACING_XL);
                    }
                }
                DashboardTab::Sources => {
                    render_list_card(ui, "News Sources", &sources_view(data), "No sources reported");
                }
                DashboardTab::Keywords => {
                    render_list_card(ui, "Key Topics", &keywords_view(data), "No topics reported");
                }
            });
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        theme::card_frame()
            .inner_margin(egui::Margin::same(theme::SPACING_SM as i8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    let count = DashboardTab::ALL.len() as f32;
                    let width =
                        (ui.available_width() - theme::SPACING_SM * (count - 1.0)) / count;
                    for tab in DashboardTab::ALL {
                        if tab_button(ui, tab.label(), self.active_tab == tab, width) {
                            self.active_tab = tab;
                        }
                    }
                });
            });
    }
}

fn render_perspective_card(ui: &mut egui::Ui, perspective: &Perspective) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new(&perspective.title)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );
        ui.add_space(theme::SPACING_MD);
        badge_row(
            ui,
            perspective.sources.iter().map(String::as_str),
            BadgeStyle::Secondary,
        );
        ui.add_space(theme::SPACING_LG);
        ui.add(
            egui::Label::new(
                egui::RichText::new(&perspective.summary)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            )
            .wrap(),
        );
        ui.add_space(theme::SPACING_XL);
        badge_row(
            ui,
            perspective.keywords.iter().map(String::as_str),
            BadgeStyle::Outline,
        );
    });
}

fn render_list_card(ui: &mut egui::Ui, title: &str, items: &[&str], empty_hint: &str) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_LG);
        if items.is_empty() {
            ui.label(
                egui::RichText::new(empty_hint)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_DIM),
            );
        } else {
            badge_row(ui, items.iter().copied(), BadgeStyle::Outline);
        }
    });
}
