//! User settings stored as settings.json in the app data directory

use crate::constants::{
    API_BASE_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_REFRESH_INTERVAL, DEFAULT_REQUEST_TIMEOUT,
};
use crate::types::DashboardTab;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Service
    pub api_base_url: Option<String>,
    pub refresh_interval_minutes: u64,
    pub request_timeout_secs: u64,

    // View
    pub last_tab: DashboardTab,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            api_base_url: None,
            refresh_interval_minutes: DEFAULT_REFRESH_INTERVAL.as_secs() / 60,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            last_tab: DashboardTab::default(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Base URL from the environment, then settings.json, then the local default
    pub fn api_base_url(&self) -> String {
        self.api_base_url_with_env(std::env::var(API_BASE_URL_ENV).ok())
    }

    pub fn api_base_url_with_env(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                self.api_base_url
                    .clone()
                    .filter(|v| !v.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_minutes.max(1) * 60)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_dashboard_constants() {
        let settings = Settings::default();
        assert_eq!(settings.refresh_interval(), Duration::from_secs(15 * 60));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.api_base_url_with_env(None), "http://localhost:8000");
    }

    #[test]
    fn env_overrides_settings_file() {
        let settings = Settings {
            api_base_url: Some("http://from-settings:9000".into()),
            ..Settings::default()
        };
        assert_eq!(
            settings.api_base_url_with_env(Some("http://from-env:8080".into())),
            "http://from-env:8080"
        );
        assert_eq!(settings.api_base_url_with_env(None), "http://from-settings:9000");
        assert_eq!(
            settings.api_base_url_with_env(Some("   ".into())),
            "http://from-settings:9000"
        );
    }

    #[test]
    fn zero_intervals_are_clamped() {
        let settings = Settings {
            refresh_interval_minutes: 0,
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert_eq!(settings.refresh_interval(), Duration::from_secs(60));
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1200.0),
            api_base_url: Some("http://news.internal".into()),
            last_tab: DashboardTab::Keywords,
            ..Settings::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn missing_or_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());

        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "refresh_interval_minutes": 5 }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.refresh_interval_minutes, 5);
        assert_eq!(settings.last_tab, DashboardTab::Perspectives);
    }
}
