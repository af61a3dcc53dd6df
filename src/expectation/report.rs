use serde::Serialize;

use super::sport::Sport;

/// Snapshot of a team-season's expectation metrics, for JSON output.
///
/// Percentages are fractions in `[0, 1]` except `win_percentage_delta`,
/// which is in percentage points. The actual-result fields are omitted when
/// no win total was supplied.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub sport: Sport,
    pub points_scored: u32,
    pub points_allowed: u32,
    pub total_games: u32,
    pub exponent: f64,
    pub expected_win_percentage: f64,
    pub expected_wins: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_win_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_percentage_delta: Option<f64>,
}
