//! Scheduled rule DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::severity::Severity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledRuleModifiableAttributes {
    pub display_name: String,
    pub body: String,
    pub description: String,
    pub severity: Severity,
    pub enabled: bool,
    pub dedup_period_minutes: i64,
    pub runbook: String,
    pub threshold: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scheduled_queries: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Body of `POST /scheduled-rules`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduledRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: ScheduledRuleModifiableAttributes,
}

/// Body of `PUT /scheduled-rules/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduledRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: ScheduledRuleModifiableAttributes,
}

impl Identified for UpdateScheduledRuleInput {
    fn id(&self) -> &str {
        &self.id
    }
}
