use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SlaError;

/// Canonical priority levels after normalizing tracker-specific labels.
/// Higher values = more urgent deadlines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
    Critical = 3,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Normalize a raw tracker label to a canonical level.
    ///
    /// Recognizes the fixed lookup table Highest→Critical, Critical→Critical,
    /// High→High, Medium→Medium, Low→Low, Lowest→Low (case-insensitive).
    /// Returns `None` for anything else; callers decide the fallback.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "highest" | "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" | "lowest" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// Per-priority deadline configuration.
///
/// `resolution_with_dependencies_hours` and `business_hours_only` are carried
/// in the rule shape and serialized with it, but the default calculation path
/// uses naive wall-clock elapsed time and never consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaRule {
    pub priority: Priority,
    pub first_response_hours: f64,
    pub resolution_hours: f64,
    pub resolution_with_dependencies_hours: f64,
    pub business_hours_only: bool,
}

/// Last-resort rule when a rule set carries no Medium entry at all.
static FALLBACK_MEDIUM: SlaRule = SlaRule {
    priority: Priority::Medium,
    first_response_hours: 8.0,
    resolution_hours: 72.0,
    resolution_with_dependencies_hours: 96.0,
    business_hours_only: true,
};

/// The active rule set, one optional entry per canonical level.
///
/// Caller-supplied on every calculation so deployments can customize
/// deadlines without code changes; `RuleSet::default()` provides the
/// built-in constants. Missing entries fall back to Medium at resolve time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub critical: Option<SlaRule>,
    pub high: Option<SlaRule>,
    pub medium: Option<SlaRule>,
    pub low: Option<SlaRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            critical: Some(SlaRule {
                priority: Priority::Critical,
                first_response_hours: 2.0,
                resolution_hours: 8.0,
                resolution_with_dependencies_hours: 16.0,
                business_hours_only: false,
            }),
            high: Some(SlaRule {
                priority: Priority::High,
                first_response_hours: 4.0,
                resolution_hours: 24.0,
                resolution_with_dependencies_hours: 48.0,
                business_hours_only: false,
            }),
            medium: Some(FALLBACK_MEDIUM.clone()),
            low: Some(SlaRule {
                priority: Priority::Low,
                first_response_hours: 24.0,
                resolution_hours: 168.0,
                resolution_with_dependencies_hours: 336.0,
                business_hours_only: true,
            }),
        }
    }
}

impl RuleSet {
    /// A rule set with no entries at all; every lookup falls back to the
    /// built-in Medium rule.
    pub fn empty() -> Self {
        Self {
            critical: None,
            high: None,
            medium: None,
            low: None,
        }
    }

    pub fn get(&self, priority: Priority) -> Option<&SlaRule> {
        match priority {
            Priority::Critical => self.critical.as_ref(),
            Priority::High => self.high.as_ref(),
            Priority::Medium => self.medium.as_ref(),
            Priority::Low => self.low.as_ref(),
        }
    }

    /// Insert or replace the rule for its canonical priority.
    pub fn insert(&mut self, rule: SlaRule) {
        let slot = match rule.priority {
            Priority::Critical => &mut self.critical,
            Priority::High => &mut self.high,
            Priority::Medium => &mut self.medium,
            Priority::Low => &mut self.low,
        };
        *slot = Some(rule);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlaRule> {
        Priority::ALL.iter().filter_map(|p| self.get(*p))
    }

    /// Resolve a raw tracker priority label to its rule.
    ///
    /// Unknown labels and missing rule entries fall back to the Medium rule
    /// with a warning; a rule set that lacks Medium entirely falls back to
    /// the built-in Medium constants. Never fails.
    pub fn resolve(&self, raw_label: &str) -> &SlaRule {
        let priority = match Priority::from_label(raw_label) {
            Some(priority) => priority,
            None => {
                tracing::warn!(
                    priority_label = raw_label,
                    "unrecognized priority label, falling back to Medium rule"
                );
                Priority::Medium
            }
        };

        if let Some(rule) = self.get(priority) {
            return rule;
        }

        if priority != Priority::Medium {
            tracing::warn!(
                priority = %priority,
                "no rule configured for priority, falling back to Medium rule"
            );
        }
        match self.medium.as_ref() {
            Some(rule) => rule,
            None => {
                tracing::warn!("rule set has no Medium entry, using built-in Medium defaults");
                &FALLBACK_MEDIUM
            }
        }
    }

    /// Reject rules whose deadlines would divide by zero (or worse) in the
    /// percentage math. Run at rule-load time, not per calculation.
    pub fn validate(&self) -> Result<(), SlaError> {
        for rule in self.iter() {
            for (field, value) in [
                ("first_response_hours", rule.first_response_hours),
                ("resolution_hours", rule.resolution_hours),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SlaError::InvalidRule {
                        priority: rule.priority,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
