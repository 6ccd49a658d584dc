use chrono::{DateTime, Utc};

use super::types::{
    ComplianceStatus, IssueSnapshot, SlaLeg, SlaStatus, SlaTransition, StatusCategory,
};
use crate::rules::{RuleSet, SlaRule};

/// Raw status labels treated as terminal regardless of status category.
/// Guards against sources whose category field lags the actual status.
const TERMINAL_STATUS_NAMES: [&str; 3] = ["Done", "Resolved", "Closed"];

const AT_RISK_THRESHOLD_PCT: f64 = 75.0;
const BREACH_THRESHOLD_PCT: f64 = 100.0;

impl IssueSnapshot {
    /// Whether this issue counts as resolved for SLA purposes.
    pub fn is_resolved(&self) -> bool {
        self.status_category == StatusCategory::Done
            || TERMINAL_STATUS_NAMES
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&self.status_name))
    }
}

fn minutes_between(since: DateTime<Utc>, until: DateTime<Utc>) -> f64 {
    (until - since).num_seconds() as f64 / 60.0
}

/// Status for a clock whose event has not happened yet.
fn pending_status(percentage_used: f64) -> ComplianceStatus {
    if percentage_used >= BREACH_THRESHOLD_PCT {
        ComplianceStatus::Breached
    } else if percentage_used >= AT_RISK_THRESHOLD_PCT {
        ComplianceStatus::AtRisk
    } else {
        ComplianceStatus::OnTrack
    }
}

fn first_response_leg(issue: &IssueSnapshot, rule: &SlaRule, now: DateTime<Utc>) -> SlaLeg {
    let has_response = issue.first_comment_at.is_some();
    let measured_until = issue.first_comment_at.unwrap_or(now);

    let deadline_minutes = rule.first_response_hours * 60.0;
    let elapsed_minutes = minutes_between(issue.created_at, measured_until);
    let percentage_used = elapsed_minutes / deadline_minutes * 100.0;

    // Once any response exists the clock reads `met`, even when the response
    // arrived past the deadline; lateness stays visible only through
    // `percentage_used`. Resolution below does re-check lateness, and the
    // asymmetry is kept on purpose.
    let status = if has_response {
        ComplianceStatus::Met
    } else {
        pending_status(percentage_used)
    };

    SlaLeg {
        deadline_hours: rule.first_response_hours,
        event_at: issue.first_comment_at,
        event_occurred: has_response,
        elapsed_minutes,
        remaining_minutes: deadline_minutes - elapsed_minutes,
        percentage_used,
        status,
    }
}

fn resolution_leg(issue: &IssueSnapshot, rule: &SlaRule, now: DateTime<Utc>) -> SlaLeg {
    let is_resolved = issue.is_resolved();
    // A terminal status without a resolution timestamp measures against
    // `now`; the source is expected to backfill the timestamp eventually.
    let measured_until = if is_resolved {
        issue.resolved_at.unwrap_or(now)
    } else {
        now
    };

    let deadline_minutes = rule.resolution_hours * 60.0;
    let elapsed_minutes = minutes_between(issue.created_at, measured_until);
    let percentage_used = elapsed_minutes / deadline_minutes * 100.0;

    let status = if is_resolved {
        if percentage_used <= BREACH_THRESHOLD_PCT {
            ComplianceStatus::Met
        } else {
            ComplianceStatus::Breached
        }
    } else {
        pending_status(percentage_used)
    };

    SlaLeg {
        deadline_hours: rule.resolution_hours,
        event_at: if is_resolved { issue.resolved_at } else { None },
        event_occurred: is_resolved,
        elapsed_minutes,
        remaining_minutes: deadline_minutes - elapsed_minutes,
        percentage_used,
        status,
    }
}

/// Compute the SLA status of one issue against a rule set at instant `now`.
///
/// Pure and deterministic for a fixed `now`: no I/O, no ambient state, no
/// failure path for normal inputs. Unknown priority labels fall back to the
/// Medium rule inside `RuleSet::resolve`.
pub fn calculate(issue: &IssueSnapshot, rules: &RuleSet, now: DateTime<Utc>) -> SlaStatus {
    let rule = rules.resolve(&issue.priority_name);

    let first_response = first_response_leg(issue, rule, now);
    let resolution = resolution_leg(issue, rule, now);

    // Worse leg wins; on equal severity the resolution leg's status stands.
    let overall_status =
        if first_response.status.severity_rank() > resolution.status.severity_rank() {
            first_response.status
        } else {
            resolution.status
        };

    tracing::debug!(
        issue_key = %issue.key,
        priority = %rule.priority,
        overall = %overall_status,
        "evaluated SLA status"
    );

    SlaStatus {
        issue_key: issue.key.clone(),
        priority_raw: issue.priority_name.clone(),
        priority: rule.priority,
        created_at: issue.created_at,
        first_response,
        resolution,
        overall_status,
        is_at_risk: overall_status == ComplianceStatus::AtRisk,
        is_breached: overall_status == ComplianceStatus::Breached,
    }
}

/// Evaluate a whole batch against a single captured `now`.
///
/// Dashboard renders must not re-read the clock per issue: cards evaluated
/// at slightly different instants would visibly disagree.
pub fn calculate_batch(
    issues: &[IssueSnapshot],
    rules: &RuleSet,
    now: DateTime<Utc>,
) -> Vec<SlaStatus> {
    issues
        .iter()
        .map(|issue| calculate(issue, rules, now))
        .collect()
}

/// Compare two successive evaluations of the same issue and report an entry
/// into at-risk or breached, if any. Improvements and unchanged states yield
/// `None`.
pub fn detect_transition(previous: &SlaStatus, current: &SlaStatus) -> Option<SlaTransition> {
    if current.overall_status.severity_rank() <= previous.overall_status.severity_rank() {
        return None;
    }
    match current.overall_status {
        ComplianceStatus::AtRisk => Some(SlaTransition::EnteredAtRisk),
        ComplianceStatus::Breached => Some(SlaTransition::EnteredBreached),
        _ => None,
    }
}
