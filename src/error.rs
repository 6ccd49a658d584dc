use thiserror::Error;

use crate::rules::Priority;

/// Configuration errors surfaced when an SLA rule set is loaded or edited.
///
/// Runtime evaluation never produces these: an unknown priority label falls
/// back to the Medium rule with a warning instead of failing the calculation.
#[derive(Debug, Error)]
pub enum SlaError {
    #[error("invalid SLA rule for {priority}: {field} must be a positive number of hours, got {value}")]
    InvalidRule {
        priority: Priority,
        field: &'static str,
        value: f64,
    },
    #[error("settings validation failed: {reason}")]
    InvalidSettings { reason: String },
}
