//! Detection operations: rules, scheduled rules and simple rules
//!
//! The three detection kinds live under separate paths but share the same
//! status codes.

use panther_core::domain::rule::Rule;
use panther_core::domain::scheduled_rule::ScheduledRule;
use panther_core::domain::simple_rule::SimpleRule;
use panther_core::dto::rule::{CreateRuleInput, UpdateRuleInput};
use panther_core::dto::scheduled_rule::{CreateScheduledRuleInput, UpdateScheduledRuleInput};
use panther_core::dto::simple_rule::{CreateSimpleRuleInput, UpdateSimpleRuleInput};
use tokio_util::sync::CancellationToken;

use super::{RestClient, RestFamily};
use crate::error::Result;

pub const RULES: RestFamily = RestFamily::standard("rule", "/rules");

pub const SCHEDULED_RULES: RestFamily = RestFamily::standard("scheduled rule", "/scheduled-rules");

pub const SIMPLE_RULES: RestFamily = RestFamily::standard("simple rule", "/simple-rules");

impl RestClient {
    // =============================================================================
    // Rules
    // =============================================================================

    /// Create a streaming rule; the caller picks its id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The rule id and its attributes
    ///
    /// # Returns
    /// The created rule
    pub async fn create_rule(&self, cancel: &CancellationToken, input: &CreateRuleInput) -> Result<Rule> {
        self.create(cancel, &RULES, input).await
    }

    /// Replace the attributes of a streaming rule
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The rule id and the full set of new attributes
    ///
    /// # Returns
    /// The rule as stored after the update
    pub async fn update_rule(&self, cancel: &CancellationToken, input: &UpdateRuleInput) -> Result<Rule> {
        self.update(cancel, &RULES, input).await
    }

    /// Get a streaming rule by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The rule id, e.g. `AWS.Console.Login`
    ///
    /// # Returns
    /// The rule details
    pub async fn get_rule(&self, cancel: &CancellationToken, id: &str) -> Result<Rule> {
        self.get(cancel, &RULES, id).await
    }

    /// Delete a streaming rule
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The rule id
    pub async fn delete_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &RULES, id).await
    }

    // =============================================================================
    // Scheduled Rules
    // =============================================================================

    /// Create a rule that runs against the results of scheduled queries
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The rule id, its queries and attributes
    ///
    /// # Returns
    /// The created scheduled rule
    pub async fn create_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        input: &CreateScheduledRuleInput,
    ) -> Result<ScheduledRule> {
        self.create(cancel, &SCHEDULED_RULES, input).await
    }

    /// Replace the attributes of a scheduled rule
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The rule id and the full set of new attributes
    ///
    /// # Returns
    /// The scheduled rule as stored after the update
    pub async fn update_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        input: &UpdateScheduledRuleInput,
    ) -> Result<ScheduledRule> {
        self.update(cancel, &SCHEDULED_RULES, input).await
    }

    /// Get a scheduled rule by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The rule id
    ///
    /// # Returns
    /// The scheduled rule details
    pub async fn get_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<ScheduledRule> {
        self.get(cancel, &SCHEDULED_RULES, id).await
    }

    /// Delete a scheduled rule
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The rule id
    pub async fn delete_scheduled_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &SCHEDULED_RULES, id).await
    }

    // =============================================================================
    // Simple Rules
    // =============================================================================

    /// Create a rule written as a YAML detection
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The rule id, its detection and attributes
    ///
    /// # Returns
    /// The created simple rule, including the generated Python body
    pub async fn create_simple_rule(
        &self,
        cancel: &CancellationToken,
        input: &CreateSimpleRuleInput,
    ) -> Result<SimpleRule> {
        self.create(cancel, &SIMPLE_RULES, input).await
    }

    /// Replace the attributes of a simple rule
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The rule id and the full set of new attributes
    ///
    /// # Returns
    /// The simple rule as stored after the update
    pub async fn update_simple_rule(
        &self,
        cancel: &CancellationToken,
        input: &UpdateSimpleRuleInput,
    ) -> Result<SimpleRule> {
        self.update(cancel, &SIMPLE_RULES, input).await
    }

    /// Get a simple rule by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The rule id
    ///
    /// # Returns
    /// The simple rule details
    pub async fn get_simple_rule(&self, cancel: &CancellationToken, id: &str) -> Result<SimpleRule> {
        self.get(cancel, &SIMPLE_RULES, id).await
    }

    /// Delete a simple rule
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The rule id
    pub async fn delete_simple_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &SIMPLE_RULES, id).await
    }
}
