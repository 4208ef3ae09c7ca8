//! In-memory report caching using moka
//!
//! Reports are pure views over current data, so they are cached with short
//! TTLs and invalidated whenever a booking changes (see `events`).

use chrono::NaiveDate;
use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::reports::responses::{CustomReport, DailyReport};

/// Application cache holding computed reports
#[derive(Clone)]
pub struct ReportCache {
    /// Daily reports (date key -> report)
    pub daily: Cache<String, Arc<DailyReport>>,
    /// Custom range reports (range+filter key -> report)
    pub custom: Cache<String, Arc<CustomReport>>,
}

impl ReportCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Daily reports: one entry per recently viewed day, 5 min TTL
            daily: Cache::builder()
                .max_capacity(64)
                .time_to_live(Duration::from_secs(5 * 60))
                .build(),

            // Custom reports: range/filter combinations, 5 min TTL, 2 min idle
            custom: Cache::builder()
                .max_capacity(128)
                .time_to_live(Duration::from_secs(5 * 60))
                .time_to_idle(Duration::from_secs(2 * 60))
                .build(),
        }
    }

    /// Drop every cached report. Called when any booking changes, since a
    /// single appointment can affect an unknown number of cached ranges.
    pub fn invalidate_all(&self) {
        self.daily.invalidate_all();
        self.custom.invalidate_all();
        info!("Report caches invalidated");
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            daily_size: self.daily.entry_count(),
            custom_size: self.custom.entry_count(),
        }
    }

    /// Generate cache key for a daily report
    pub fn daily_key(date: NaiveDate) -> String {
        format!("daily:{}", date)
    }

    /// Generate cache key for a custom report
    pub fn custom_key(
        start: NaiveDate,
        end: NaiveDate,
        unit_ids: Option<&[i32]>,
        court_ids: Option<&[i32]>,
    ) -> String {
        let fmt_ids = |ids: Option<&[i32]>| match ids {
            Some(ids) => ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            None => "all".to_string(),
        };
        format!("custom:{}:{}:u={}:q={}", start, end, fmt_ids(unit_ids), fmt_ids(court_ids))
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub daily_size: u64,
    pub custom_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn daily_key_includes_the_date() {
        assert_eq!(ReportCache::daily_key(date("2025-01-20")), "daily:2025-01-20");
    }

    #[test]
    fn custom_key_distinguishes_filters() {
        let start = date("2025-01-01");
        let end = date("2025-01-02");
        let unfiltered = ReportCache::custom_key(start, end, None, None);
        let by_unit = ReportCache::custom_key(start, end, Some(&[1, 2]), None);
        let by_court = ReportCache::custom_key(start, end, None, Some(&[1, 2]));
        assert_ne!(unfiltered, by_unit);
        assert_ne!(unfiltered, by_court);
        assert_ne!(by_unit, by_court);
        assert_eq!(by_unit, "custom:2025-01-01:2025-01-02:u=1,2:q=all");
    }
}
