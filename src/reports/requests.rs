//! Request DTOs for report endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for the daily report
#[derive(Debug, Deserialize)]
pub struct DailyReportParams {
    pub data: NaiveDate,
}

/// Request body for the custom report
#[derive(Debug, Deserialize)]
pub struct CustomReportRequest {
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    /// Restrict to these units; absent or empty means no restriction.
    #[serde(default)]
    pub unidades: Option<Vec<i32>>,
    /// Restrict to these courts; absent or empty means no restriction.
    #[serde(default)]
    pub quadras: Option<Vec<i32>>,
}

impl CustomReportRequest {
    /// Normalize a filter: an empty list means "no restriction", same as
    /// absent.
    pub fn unit_filter(&self) -> Option<&[i32]> {
        self.unidades.as_deref().filter(|ids| !ids.is_empty())
    }

    pub fn court_filter(&self) -> Option<&[i32]> {
        self.quadras.as_deref().filter(|ids| !ids.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_means_no_restriction() {
        let req = CustomReportRequest {
            data_inicio: "2025-01-01".parse().unwrap(),
            data_fim: "2025-01-02".parse().unwrap(),
            unidades: Some(vec![]),
            quadras: None,
        };
        assert!(req.unit_filter().is_none());
        assert!(req.court_filter().is_none());
    }

    #[test]
    fn populated_filter_is_kept() {
        let req = CustomReportRequest {
            data_inicio: "2025-01-01".parse().unwrap(),
            data_fim: "2025-01-02".parse().unwrap(),
            unidades: Some(vec![1, 2]),
            quadras: Some(vec![7]),
        };
        assert_eq!(req.unit_filter(), Some(&[1, 2][..]));
        assert_eq!(req.court_filter(), Some(&[7][..]));
    }
}
