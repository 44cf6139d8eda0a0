//! Dashboard: four stat tiles and the preceptors-vs-students chart.
//!
//! Both calls are made on every load. When either fails the page still shows
//! what it has: the successful half as fetched and the failed half zeroed.

use crate::api::{AdminClient, ApiError};
use crate::fetch::FetchState;
use crate::models::{ChartPayload, StatCounter, StatsPayload};
use crate::view;

/// Chart axis, always all twelve months.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: String,
    /// Signed month-over-month change, e.g. `+12.5%`.
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub month: &'static str,
    pub students: u64,
    pub preceptors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub tiles: Vec<StatTile>,
    pub chart: Vec<ChartPoint>,
}

impl DashboardView {
    /// Builds the view from whatever halves were fetched; a missing half
    /// is zeroed.
    #[must_use]
    pub fn build(stats: Option<&StatsPayload>, chart: Option<&ChartPayload>) -> Self {
        let zero = StatsPayload::default();
        let stats = stats.unwrap_or(&zero);
        let tiles = [
            ("Active Connections", &stats.active_connections),
            ("Active Clinical Rotations", &stats.active_clinical_rotations),
            ("Total Preceptors", &stats.total_preceptors),
            ("Total Students", &stats.total_students),
        ]
        .into_iter()
        .map(|(title, counter)| tile(title, counter))
        .collect();

        Self {
            tiles,
            chart: chart_points(chart),
        }
    }

    /// Largest bar in the chart, for scaling.
    #[must_use]
    pub fn chart_peak(&self) -> u64 {
        self.chart
            .iter()
            .map(|point| point.students.max(point.preceptors))
            .max()
            .unwrap_or_default()
    }
}

fn tile(title: &'static str, counter: &StatCounter) -> StatTile {
    StatTile {
        title,
        value: view::format_count(counter.count),
        change: view::format_change(counter.change),
    }
}

/// Twelve points, January first; series values are taken by index and
/// missing entries are zero.
fn chart_points(chart: Option<&ChartPayload>) -> Vec<ChartPoint> {
    let at = |series: Option<&Vec<u64>>, index: usize| {
        series
            .and_then(|values| values.get(index))
            .copied()
            .unwrap_or_default()
    };
    MONTHS
        .into_iter()
        .enumerate()
        .map(|(index, month)| ChartPoint {
            month,
            students: at(chart.map(|chart| &chart.students), index),
            preceptors: at(chart.map(|chart| &chart.preceptors), index),
        })
        .collect()
}

/// Loads stats and chart data.
pub async fn load(client: &AdminClient) -> FetchState<DashboardView> {
    let stats = client.stats().await;
    let chart = client.preceptors_vs_students().await;
    settle(stats, chart)
}

fn settle(
    stats: Result<StatsPayload, ApiError>,
    chart: Result<ChartPayload, ApiError>,
) -> FetchState<DashboardView> {
    let failure = stats.as_ref().err().or(chart.as_ref().err()).cloned();
    let view = DashboardView::build(stats.as_ref().ok(), chart.as_ref().ok());
    match failure {
        None => FetchState::Ready(view),
        Some(err) => FetchState::settle(Err(err), "Failed to load dashboard data", || Some(view)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchStatus;

    fn stats() -> StatsPayload {
        serde_json::from_value(serde_json::json!({
            "activeConnections": {"count": 1250, "change": 12.5},
            "activeClinicalRotations": {"count": 40, "change": -3},
            "totalPreceptors": {"count": 310},
            "totalStudents": {"count": 980, "change": "4.04%"}
        }))
        .unwrap()
    }

    fn chart() -> ChartPayload {
        ChartPayload {
            months: vec!["Jan".into(), "Feb".into()],
            students: vec![5, 7],
            preceptors: vec![2],
        }
    }

    #[test]
    fn test_both_halves_ready() {
        let state = settle(Ok(stats()), Ok(chart()));
        assert_eq!(state.status(), FetchStatus::Ready);
        let view = state.data().unwrap();
        assert_eq!(view.tiles.len(), 4);
        assert_eq!(view.tiles[0].value, "1,250");
        assert_eq!(view.tiles[0].change, "+12.5%");
        assert_eq!(view.tiles[1].change, "-3.0%");
        assert_eq!(view.tiles[2].change, "+0.0%");
        assert_eq!(view.chart.len(), 12);
        assert_eq!(view.chart[1].students, 7);
        assert_eq!(view.chart[1].preceptors, 0);
        assert_eq!(view.chart[11].month, "December");
        assert_eq!(view.chart_peak(), 7);
    }

    #[test]
    fn test_chart_failure_keeps_stats() {
        let state = settle(Ok(stats()), Err(ApiError::Network("down".into())));
        assert_eq!(state.status(), FetchStatus::Error);
        assert!(state.is_fallback());
        let view = state.data().unwrap();
        assert_eq!(view.tiles[3].value, "980");
        assert!(
            view.chart
                .iter()
                .all(|point| point.students == 0 && point.preceptors == 0)
        );
        assert!(state.error_message().unwrap().contains("down"));
    }

    #[test]
    fn test_stats_failure_keeps_chart() {
        let state = settle(
            Err(ApiError::Http {
                status: 500,
                message: None,
            }),
            Ok(chart()),
        );
        let view = state.data().unwrap();
        assert!(view.tiles.iter().all(|tile| tile.value == "0"));
        assert_eq!(view.chart[0].students, 5);
    }
}
