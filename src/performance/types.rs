use serde::{Deserialize, Serialize};

/// Roster identity supplied by the issue source collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
}

/// Aggregate workload and historical compliance for one assignee.
///
/// Recomputed wholesale from a batch of (issue, SLA status) pairs whenever
/// the batch changes; there is no partial-update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperPerformance {
    pub developer_id: String,
    pub developer_name: String,
    /// Unresolved issue counts, broken down by canonical priority.
    pub active_total: usize,
    pub active_critical: usize,
    pub active_high: usize,
    pub active_medium: usize,
    pub active_low: usize,
    pub active_at_risk: usize,
    pub active_breached: usize,
    pub resolved_total: usize,
    /// Percentage of resolved issues whose resolution met its deadline.
    /// 0 when nothing has been resolved yet, never NaN.
    pub compliance_rate: f64,
    pub avg_first_response_minutes: f64,
    pub avg_resolution_hours: f64,
}

/// Team-wide arithmetic means across per-developer results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamAverages {
    pub compliance_rate: f64,
    pub avg_first_response_minutes: f64,
    pub avg_resolution_hours: f64,
}
