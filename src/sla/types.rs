use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::Priority;

/// Coarse workflow position derived from the tracker's native status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCategory {
    Todo,
    InProgress,
    Done,
}

/// Immutable view of an external issue at evaluation time.
///
/// Mapped from the tracker's native representation by the (out-of-scope)
/// issue source collaborator. `first_comment_at` and `resolved_at`, when
/// present, are expected to be >= `created_at`; that is an upstream
/// data-quality guarantee, not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSnapshot {
    pub key: String,
    /// Raw priority label from the source system, normalized by the rules
    /// module; never interpreted anywhere else.
    pub priority_name: String,
    pub created_at: DateTime<Utc>,
    pub first_comment_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    /// Raw status label, checked against terminal names as a guard against
    /// sources whose status category lags the actual status.
    pub status_name: String,
    pub status_category: StatusCategory,
    pub assignee_id: Option<String>,
    pub assignee_name: Option<String>,
}

/// Categorical compliance state of one SLA clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    OnTrack,
    Met,
    AtRisk,
    Breached,
}

impl ComplianceStatus {
    /// Severity rank used to pick the overall status:
    /// breached > at-risk > met > on-track.
    pub fn severity_rank(self) -> u8 {
        match self {
            ComplianceStatus::OnTrack => 1,
            ComplianceStatus::Met => 2,
            ComplianceStatus::AtRisk => 3,
            ComplianceStatus::Breached => 4,
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplianceStatus::OnTrack => "on-track",
            ComplianceStatus::Met => "met",
            ComplianceStatus::AtRisk => "at-risk",
            ComplianceStatus::Breached => "breached",
        };
        write!(f, "{}", label)
    }
}

/// One SLA clock (first response or resolution) after evaluation.
///
/// `percentage_used` can exceed 100 and `remaining_minutes` can go negative;
/// presentation collaborators clamp for display if they need to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaLeg {
    pub deadline_hours: f64,
    pub event_at: Option<DateTime<Utc>>,
    pub event_occurred: bool,
    pub elapsed_minutes: f64,
    pub remaining_minutes: f64,
    pub percentage_used: f64,
    pub status: ComplianceStatus,
}

/// Computed SLA state for one issue at one evaluation instant.
///
/// A value object: recomputed wholesale on every evaluation pass, never
/// mutated in place, no identity beyond its source issue + evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaStatus {
    pub issue_key: String,
    pub priority_raw: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub first_response: SlaLeg,
    pub resolution: SlaLeg,
    pub overall_status: ComplianceStatus,
    pub is_at_risk: bool,
    pub is_breached: bool,
}

/// A transition into a worse state between two successive evaluations of
/// the same issue, for notification collaborators. The engine keeps no
/// history; callers retain the previous status themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlaTransition {
    EnteredAtRisk,
    EnteredBreached,
}
