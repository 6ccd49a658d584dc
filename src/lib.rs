// Slatrack Library - SLA Compliance Engine
// Pure computation core; issue fetching, dashboards, and notification
// delivery live in the embedding application.

pub mod error;
pub mod performance;
pub mod rules;
pub mod settings;
pub mod sla;
pub mod telemetry;

// Re-export key types for easy access
pub use error::SlaError;
pub use performance::{aggregate, team_averages, Developer, DeveloperPerformance, TeamAverages};
pub use rules::{Priority, RuleSet, SlaRule};
pub use settings::{BusinessHours, SlaSettings};
pub use sla::{
    calculate, calculate_batch, detect_transition, ComplianceStatus, IssueSnapshot, SlaLeg,
    SlaStatus, SlaTransition, StatusCategory,
};
pub use telemetry::{init_telemetry, shutdown_telemetry};
