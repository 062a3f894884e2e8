use serde::Serialize;
use std::fmt;

/// Rule that produced a compatibility issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityRule {
    Socket,
    Memory,
    Power,
}

/// Human readable diagnostic produced by one compatibility rule
///
/// Issues carry no identity across evaluations; they are rebuilt from
/// scratch every time the build is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityIssue {
    rule: CompatibilityRule,
    message: String,
}

impl CompatibilityIssue {
    pub fn new(rule: CompatibilityRule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    pub fn rule(&self) -> CompatibilityRule {
        self.rule
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CompatibilityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
