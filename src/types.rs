//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Aggregation payload returned by `GET /news/aggregate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub total_articles: u64,
    pub topic_clusters: u64,
    pub global_perspectives: Vec<Perspective>,
}

/// One aggregated viewpoint on a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspective {
    pub title: String,
    pub summary: String,
    pub sources: Vec<String>,
    pub keywords: Vec<String>,
}

/// What the dashboard is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String), // user-facing message
    Loaded(AggregationResult),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&AggregationResult> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Tabs shown once data is loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardTab {
    #[default]
    Perspectives,
    Sources,
    Keywords,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Perspectives,
        DashboardTab::Sources,
        DashboardTab::Keywords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Perspectives => "Global Perspectives",
            DashboardTab::Sources => "News Sources",
            DashboardTab::Keywords => "Key Topics",
        }
    }
}
