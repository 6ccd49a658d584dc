//! End-to-end flow a dashboard collaborator runs on every data refresh:
//! snapshot batch -> SLA statuses -> per-developer aggregates -> team row.

use chrono::{DateTime, Duration, TimeZone, Utc};
use slatrack::{
    aggregate, calculate_batch, team_averages, ComplianceStatus, Developer, IssueSnapshot,
    RuleSet, StatusCategory,
};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()
}

fn snapshot(key: &str, priority: &str, assignee: &str) -> IssueSnapshot {
    IssueSnapshot {
        key: key.to_string(),
        priority_name: priority.to_string(),
        created_at: base_time(),
        first_comment_at: None,
        resolved_at: None,
        status_name: "In Progress".to_string(),
        status_category: StatusCategory::InProgress,
        assignee_id: Some(assignee.to_string()),
        assignee_name: Some(assignee.to_string()),
    }
}

#[test]
fn test_refresh_pass_produces_consistent_dashboard_state() {
    let rules = RuleSet::default();
    let now = base_time() + Duration::hours(3);

    let mut resolved_on_time = snapshot("PROJ-1", "Critical", "dev-1");
    resolved_on_time.first_comment_at = Some(base_time() + Duration::minutes(15));
    resolved_on_time.resolved_at = Some(base_time() + Duration::hours(2));
    resolved_on_time.status_name = "Done".to_string();
    resolved_on_time.status_category = StatusCategory::Done;

    let breached_response = snapshot("PROJ-2", "Critical", "dev-1");
    let quiet_low = snapshot("PROJ-3", "Low", "dev-2");

    let issues = vec![resolved_on_time, breached_response, quiet_low];
    let statuses = calculate_batch(&issues, &rules, now);

    assert_eq!(statuses[0].overall_status, ComplianceStatus::Met);
    assert_eq!(statuses[1].overall_status, ComplianceStatus::Breached);
    assert_eq!(statuses[2].overall_status, ComplianceStatus::OnTrack);

    let pairs: Vec<_> = issues.into_iter().zip(statuses).collect();
    let roster = vec![
        Developer {
            id: "dev-1".to_string(),
            name: "Dana".to_string(),
        },
        Developer {
            id: "dev-2".to_string(),
            name: "Miguel".to_string(),
        },
    ];

    let developers = aggregate(&pairs, &roster);
    assert_eq!(developers.len(), 2);

    let dana = &developers[0];
    assert_eq!(dana.active_total, 1);
    assert_eq!(dana.active_breached, 1);
    assert_eq!(dana.resolved_total, 1);
    assert!((dana.compliance_rate - 100.0).abs() < 1e-9);
    assert!((dana.avg_first_response_minutes - 15.0).abs() < 1e-9);
    assert!((dana.avg_resolution_hours - 2.0).abs() < 1e-9);

    let miguel = &developers[1];
    assert_eq!(miguel.active_total, 1);
    assert_eq!(miguel.active_low, 1);
    assert_eq!(miguel.compliance_rate, 0.0);

    let team = team_averages(&developers);
    assert!((team.compliance_rate - 50.0).abs() < 1e-9);
    assert!(!team.avg_first_response_minutes.is_nan());
}

#[test]
fn test_recomputation_with_identical_inputs_is_idempotent() {
    let rules = RuleSet::default();
    let now = base_time() + Duration::minutes(100);
    let issues = vec![
        snapshot("PROJ-1", "Critical", "dev-1"),
        snapshot("PROJ-2", "Blocker", "dev-1"),
    ];

    let first_pass = calculate_batch(&issues, &rules, now);
    let second_pass = calculate_batch(&issues, &rules, now);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_new_rule_set_changes_statuses_without_touching_snapshots() {
    let issues = vec![snapshot("PROJ-1", "Critical", "dev-1")];
    let now = base_time() + Duration::hours(3);

    let default_pass = calculate_batch(&issues, &RuleSet::default(), now);
    assert_eq!(default_pass[0].overall_status, ComplianceStatus::Breached);

    // Apply a more lenient rule set, recompute wholesale.
    let mut lenient = RuleSet::default();
    let mut critical = lenient.get(slatrack::Priority::Critical).unwrap().clone();
    critical.first_response_hours = 8.0;
    lenient.insert(critical);

    let lenient_pass = calculate_batch(&issues, &lenient, now);
    assert_eq!(lenient_pass[0].overall_status, ComplianceStatus::OnTrack);
}
