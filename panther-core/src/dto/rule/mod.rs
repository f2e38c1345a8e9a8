//! Rule DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::severity::Severity;

/// Attributes shared by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleModifiableAttributes {
    pub display_name: String,
    pub body: String,
    pub description: String,
    pub severity: Severity,
    pub enabled: bool,
    pub dedup_period_minutes: i64,
    pub runbook: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Body of `POST /rules`
///
/// Rules are keyed by a caller-chosen id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: RuleModifiableAttributes,
}

/// Body of `PUT /rules/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: RuleModifiableAttributes,
}

impl Identified for UpdateRuleInput {
    fn id(&self) -> &str {
        &self.id
    }
}
