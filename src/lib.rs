//! Global News Dashboard
//!
//! Fetches a pre-aggregated news payload from the aggregation service and
//! keeps it fresh for the desktop UI. The UI itself lives in the binary.

pub mod api;
pub mod constants;
pub mod controller;
pub mod error;
pub mod settings;
pub mod types;
pub mod views;

pub use api::{AggregateSource, NewsClient};
pub use controller::Dashboard;
pub use error::NetworkError;
pub use types::{AggregationResult, DashboardTab, Perspective, ViewState};
