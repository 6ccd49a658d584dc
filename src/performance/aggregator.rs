use super::types::{Developer, DeveloperPerformance, TeamAverages};
use crate::rules::Priority;
use crate::sla::{ComplianceStatus, IssueSnapshot, SlaStatus};

/// Fold a batch of (issue, SLA status) pairs into per-developer aggregates.
///
/// Issues whose assignee is not in the roster are silently excluded. No I/O,
/// no failure path; empty inputs produce zeroed results.
pub fn aggregate(
    pairs: &[(IssueSnapshot, SlaStatus)],
    roster: &[Developer],
) -> Vec<DeveloperPerformance> {
    roster
        .iter()
        .map(|developer| aggregate_for(developer, pairs))
        .collect()
}

fn aggregate_for(
    developer: &Developer,
    pairs: &[(IssueSnapshot, SlaStatus)],
) -> DeveloperPerformance {
    let assigned: Vec<&SlaStatus> = pairs
        .iter()
        .filter(|(issue, _)| issue.assignee_id.as_deref() == Some(developer.id.as_str()))
        .map(|(_, status)| status)
        .collect();

    // Response time averages over every issue that got a response, whether
    // or not it has been resolved since.
    let response_times: Vec<f64> = assigned
        .iter()
        .filter(|status| status.first_response.event_occurred)
        .map(|status| status.first_response.elapsed_minutes)
        .collect();
    let avg_first_response_minutes = mean(&response_times);

    let (resolved, active): (Vec<&SlaStatus>, Vec<&SlaStatus>) = assigned
        .into_iter()
        .partition(|status| status.resolution.event_occurred);

    let count_priority = |priority: Priority| {
        active
            .iter()
            .filter(|status| status.priority == priority)
            .count()
    };

    let met_resolutions = resolved
        .iter()
        .filter(|status| status.resolution.status == ComplianceStatus::Met)
        .count();
    let compliance_rate = if resolved.is_empty() {
        0.0
    } else {
        met_resolutions as f64 / resolved.len() as f64 * 100.0
    };

    let resolution_times: Vec<f64> = resolved
        .iter()
        .map(|status| status.resolution.elapsed_minutes)
        .collect();
    let avg_resolution_hours = mean(&resolution_times) / 60.0;

    DeveloperPerformance {
        developer_id: developer.id.clone(),
        developer_name: developer.name.clone(),
        active_total: active.len(),
        active_critical: count_priority(Priority::Critical),
        active_high: count_priority(Priority::High),
        active_medium: count_priority(Priority::Medium),
        active_low: count_priority(Priority::Low),
        active_at_risk: active.iter().filter(|status| status.is_at_risk).count(),
        active_breached: active.iter().filter(|status| status.is_breached).count(),
        resolved_total: resolved.len(),
        compliance_rate,
        avg_first_response_minutes,
        avg_resolution_hours,
    }
}

/// Arithmetic means of the per-developer aggregates; all zero for an empty
/// roster.
pub fn team_averages(developers: &[DeveloperPerformance]) -> TeamAverages {
    if developers.is_empty() {
        return TeamAverages::default();
    }
    let count = developers.len() as f64;
    TeamAverages {
        compliance_rate: developers.iter().map(|d| d.compliance_rate).sum::<f64>() / count,
        avg_first_response_minutes: developers
            .iter()
            .map(|d| d.avg_first_response_minutes)
            .sum::<f64>()
            / count,
        avg_resolution_hours: developers
            .iter()
            .map(|d| d.avg_resolution_hours)
            .sum::<f64>()
            / count,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
