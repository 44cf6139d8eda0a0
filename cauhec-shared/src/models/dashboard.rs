use serde::{Deserialize, Serialize};

use super::lenient;

/// A headline number with its period-over-period change in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StatCounter {
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub change: Option<f64>,
}

/// `data` of `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    #[serde(default)]
    pub active_connections: StatCounter,
    #[serde(default)]
    pub active_clinical_rotations: StatCounter,
    #[serde(default)]
    pub total_preceptors: StatCounter,
    #[serde(default)]
    pub total_students: StatCounter,
}

/// `data` of `GET /admin/charts/preceptors-vs-students`. All three series are
/// required; a payload missing one is treated as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartPayload {
    pub months: Vec<String>,
    pub students: Vec<u64>,
    pub preceptors: Vec<u64>,
}
