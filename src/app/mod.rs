//! App module - contains the main application state and logic

mod views;

use crate::theme;
use eframe::egui;
use global_news_dashboard::settings::Settings;
use global_news_dashboard::{Dashboard, DashboardTab, NewsClient};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) dashboard: Dashboard,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) active_tab: DashboardTab,
    pub(crate) started: bool,
    pub(crate) needs_center: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for the error state
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let base_url = settings.api_base_url();
        let client = NewsClient::new(&base_url, settings.request_timeout())?;
        info!(
            url = %client.aggregate_url(),
            timeout_secs = settings.request_timeout().as_secs(),
            "News client ready"
        );

        let ctx = cc.egui_ctx.clone();
        let dashboard = Dashboard::new(Arc::new(client), settings.refresh_interval())
            .on_change(move || ctx.request_repaint());
        info!(
            refresh_mins = dashboard.refresh_interval().as_secs() / 60,
            "Dashboard ready"
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("news-fetch")
            .enable_all()
            .build()?;

        Ok(Self {
            dashboard,
            runtime,
            active_tab: settings.last_tab,
            started: false,
            needs_center: false,
            window_pos: None,
            window_size: None,
            settings,
            data_dir,
        })
    }

    /// Mount: first fetch plus the refresh timer
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.dashboard.activate(self.runtime.handle());
    }

    /// Unmount: stop refreshing and persist window/tab state
    pub fn shutdown(&mut self) {
        self.dashboard.deactivate();
        self.save_settings();
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_tab = self.active_tab;
        self.settings.save(&self.data_dir);
    }
}
