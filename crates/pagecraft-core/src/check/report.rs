//! Check report, serialized for `pagecraft check --json`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    /// Combine two statuses (Error > Warning > Pass)
    pub fn worst(self, other: CheckStatus) -> CheckStatus {
        match (self, other) {
            (CheckStatus::Error, _) | (_, CheckStatus::Error) => CheckStatus::Error,
            (CheckStatus::Warning, _) | (_, CheckStatus::Warning) => CheckStatus::Warning,
            _ => CheckStatus::Pass,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub id: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub schema_version: String,
    pub overall_status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_filter: Option<String>,
    pub checks: Vec<Check>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.overall_status != CheckStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_status() {
        use CheckStatus::*;
        assert_eq!(Pass.worst(Pass), Pass);
        assert_eq!(Pass.worst(Warning), Warning);
        assert_eq!(Error.worst(Warning), Error);
        assert_eq!(Warning.worst(Error), Error);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CheckStatus::Warning).unwrap(),
            "\"warning\""
        );
    }
}
