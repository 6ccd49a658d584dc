pub mod calculator;
pub mod types;

pub use calculator::{calculate, calculate_batch, detect_transition};
pub use types::{
    ComplianceStatus, IssueSnapshot, SlaLeg, SlaStatus, SlaTransition, StatusCategory,
};
