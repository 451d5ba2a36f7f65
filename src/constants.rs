//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Global News Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that overrides the aggregation service address
pub const API_BASE_URL_ENV: &str = "NEWS_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const AGGREGATE_PATH: &str = "/news/aggregate";

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shown in place of any fetch failure; details only go to the log
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch news. Please try again later.";
