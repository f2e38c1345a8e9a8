//! Simple rule DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::severity::Severity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRuleModifiableAttributes {
    pub display_name: String,
    pub detection: String,
    pub description: String,
    pub severity: Severity,
    pub enabled: bool,
    pub dedup_period_minutes: i64,
    pub runbook: String,
    pub threshold: i64,
    pub alert_context: String,
    pub alert_title: String,
    pub dynamic_severities: String,
    pub group_by: String,
    pub inline_filters: String,
    pub python_body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Body of `POST /simple-rules`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSimpleRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: SimpleRuleModifiableAttributes,
}

/// Body of `PUT /simple-rules/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSimpleRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: SimpleRuleModifiableAttributes,
}

impl Identified for UpdateSimpleRuleInput {
    fn id(&self) -> &str {
        &self.id
    }
}
