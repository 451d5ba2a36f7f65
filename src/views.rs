//! Derived views over a loaded aggregation payload
//!
//! Recomputed on every frame. The payloads are small and the renderer never
//! holds on to the results, so nothing here is cached.

use crate::types::{AggregationResult, Perspective};
use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first occurrence of every item, preserving input order.
pub fn unique_in_order<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Every source across all perspectives, de-duplicated
pub fn sources_view(data: &AggregationResult) -> Vec<&str> {
    unique_in_order(
        data.global_perspectives
            .iter()
            .flat_map(|p| p.sources.iter().map(String::as_str)),
    )
}

/// Every keyword across all perspectives, de-duplicated
pub fn keywords_view(data: &AggregationResult) -> Vec<&str> {
    unique_in_order(
        data.global_perspectives
            .iter()
            .flat_map(|p| p.keywords.iter().map(String::as_str)),
    )
}

/// Perspectives exactly as the server ordered them
pub fn perspectives_view(data: &AggregationResult) -> &[Perspective] {
    &data.global_perspectives
}
