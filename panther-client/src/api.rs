//! Collaborator interface
//!
//! Code that manages Panther resources depends on [`PantherApi`] rather than
//! on [`PantherClient`], so it can be driven by a fake in tests.

use async_trait::async_trait;
use panther_core::domain::cloud_account::CloudAccount;
use panther_core::domain::http_source::HttpSource;
use panther_core::domain::policy::Policy;
use panther_core::domain::role::Role;
use panther_core::domain::rule::Rule;
use panther_core::domain::s3_source::S3LogIntegration;
use panther_core::domain::scheduled_rule::ScheduledRule;
use panther_core::domain::schema::Schema;
use panther_core::domain::simple_rule::SimpleRule;
use panther_core::domain::user::User;
use panther_core::dto::cloud_account::{
    CloudAccountOutput, CreateCloudAccountInput, DeleteCloudAccountInput,
    DeleteCloudAccountOutput, UpdateCloudAccountInput,
};
use panther_core::dto::http_source::{CreateHttpSourceInput, UpdateHttpSourceInput};
use panther_core::dto::policy::{CreatePolicyInput, UpdatePolicyInput};
use panther_core::dto::role::{CreateRoleInput, UpdateRoleInput};
use panther_core::dto::rule::{CreateRuleInput, UpdateRuleInput};
use panther_core::dto::s3_source::{
    CreateS3SourceInput, DeleteSourceInput, DeleteSourceOutput, S3SourceOutput, UpdateS3SourceInput,
};
use panther_core::dto::scheduled_rule::{CreateScheduledRuleInput, UpdateScheduledRuleInput};
use panther_core::dto::schema::{
    CreateSchemaInput, DeleteSchemaInput, DeleteSchemaOutput, SchemaOutput, SchemaPage,
    UpdateSchemaInput,
};
use panther_core::dto::simple_rule::{CreateSimpleRuleInput, UpdateSimpleRuleInput};
use panther_core::dto::user::{CreateUserInput, UpdateUserInput};
use tokio_util::sync::CancellationToken;

use crate::PantherClient;
use crate::error::Result;

/// Every operation the Panther API client offers
#[async_trait]
pub trait PantherApi: Send + Sync {
    // S3 log sources (GraphQL)
    async fn create_s3_source(
        &self,
        cancel: &CancellationToken,
        input: &CreateS3SourceInput,
    ) -> Result<S3SourceOutput>;
    async fn update_s3_source(
        &self,
        cancel: &CancellationToken,
        input: &UpdateS3SourceInput,
    ) -> Result<S3SourceOutput>;
    async fn get_s3_source(&self, cancel: &CancellationToken, id: &str) -> Result<S3LogIntegration>;
    async fn delete_source(
        &self,
        cancel: &CancellationToken,
        input: &DeleteSourceInput,
    ) -> Result<DeleteSourceOutput>;

    // Cloud accounts (GraphQL)
    async fn create_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &CreateCloudAccountInput,
    ) -> Result<CloudAccountOutput>;
    async fn update_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &UpdateCloudAccountInput,
    ) -> Result<CloudAccountOutput>;
    async fn get_cloud_account(&self, cancel: &CancellationToken, id: &str) -> Result<CloudAccount>;
    async fn delete_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &DeleteCloudAccountInput,
    ) -> Result<DeleteCloudAccountOutput>;

    // Schemas (GraphQL)
    async fn create_schema(
        &self,
        cancel: &CancellationToken,
        input: &CreateSchemaInput,
    ) -> Result<SchemaOutput>;
    async fn update_schema(
        &self,
        cancel: &CancellationToken,
        input: &UpdateSchemaInput,
    ) -> Result<SchemaOutput>;
    async fn get_schema(&self, cancel: &CancellationToken, name: &str) -> Result<Option<Schema>>;
    async fn list_schemas(
        &self,
        cancel: &CancellationToken,
        cursor: Option<&str>,
    ) -> Result<SchemaPage>;
    async fn delete_schema(
        &self,
        cancel: &CancellationToken,
        input: &DeleteSchemaInput,
    ) -> Result<DeleteSchemaOutput>;

    // HTTP log sources (REST)
    async fn create_http_source(
        &self,
        cancel: &CancellationToken,
        input: &CreateHttpSourceInput,
    ) -> Result<HttpSource>;
    async fn update_http_source(
        &self,
        cancel: &CancellationToken,
        input: &UpdateHttpSourceInput,
    ) -> Result<HttpSource>;
    async fn get_http_source(&self, cancel: &CancellationToken, id: &str) -> Result<HttpSource>;
    async fn delete_http_source(&self, cancel: &CancellationToken, id: &str) -> Result<()>;

    // Rules (REST)
    async fn create_rule(&self, cancel: &CancellationToken, input: &CreateRuleInput) -> Result<Rule>;
    async fn update_rule(&self, cancel: &CancellationToken, input: &UpdateRuleInput) -> Result<Rule>;
    async fn get_rule(&self, cancel: &CancellationToken, id: &str) -> Result<Rule>;
    async fn delete_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()>;

    // Policies (REST)
    async fn create_policy(
        &self,
        cancel: &CancellationToken,
        input: &CreatePolicyInput,
    ) -> Result<Policy>;
    async fn update_policy(
        &self,
        cancel: &CancellationToken,
        input: &UpdatePolicyInput,
    ) -> Result<Policy>;
    async fn get_policy(&self, cancel: &CancellationToken, id: &str) -> Result<Policy>;
    async fn delete_policy(&self, cancel: &CancellationToken, id: &str) -> Result<()>;

    // Scheduled rules (REST)
    async fn create_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        input: &CreateScheduledRuleInput,
    ) -> Result<ScheduledRule>;
    async fn update_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        input: &UpdateScheduledRuleInput,
    ) -> Result<ScheduledRule>;
    async fn get_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<ScheduledRule>;
    async fn delete_scheduled_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()>;

    // Simple rules (REST)
    async fn create_simple_rule(
        &self,
        cancel: &CancellationToken,
        input: &CreateSimpleRuleInput,
    ) -> Result<SimpleRule>;
    async fn update_simple_rule(
        &self,
        cancel: &CancellationToken,
        input: &UpdateSimpleRuleInput,
    ) -> Result<SimpleRule>;
    async fn get_simple_rule(&self, cancel: &CancellationToken, id: &str) -> Result<SimpleRule>;
    async fn delete_simple_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()>;

    // Users (REST)
    async fn create_user(&self, cancel: &CancellationToken, input: &CreateUserInput) -> Result<User>;
    async fn update_user(&self, cancel: &CancellationToken, input: &UpdateUserInput) -> Result<User>;
    async fn get_user(&self, cancel: &CancellationToken, id: &str) -> Result<User>;
    async fn delete_user(&self, cancel: &CancellationToken, id: &str) -> Result<()>;

    // Roles (REST)
    async fn create_role(&self, cancel: &CancellationToken, input: &CreateRoleInput) -> Result<Role>;
    async fn update_role(&self, cancel: &CancellationToken, input: &UpdateRoleInput) -> Result<Role>;
    async fn get_role(&self, cancel: &CancellationToken, id: &str) -> Result<Role>;
    async fn delete_role(&self, cancel: &CancellationToken, id: &str) -> Result<()>;
}

#[async_trait]
impl PantherApi for PantherClient {
    async fn create_s3_source(
        &self,
        cancel: &CancellationToken,
        input: &CreateS3SourceInput,
    ) -> Result<S3SourceOutput> {
        self.graphql().create_s3_source(cancel, input).await
    }

    async fn update_s3_source(
        &self,
        cancel: &CancellationToken,
        input: &UpdateS3SourceInput,
    ) -> Result<S3SourceOutput> {
        self.graphql().update_s3_source(cancel, input).await
    }

    async fn get_s3_source(&self, cancel: &CancellationToken, id: &str) -> Result<S3LogIntegration> {
        self.graphql().get_s3_source(cancel, id).await
    }

    async fn delete_source(
        &self,
        cancel: &CancellationToken,
        input: &DeleteSourceInput,
    ) -> Result<DeleteSourceOutput> {
        self.graphql().delete_source(cancel, input).await
    }

    async fn create_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &CreateCloudAccountInput,
    ) -> Result<CloudAccountOutput> {
        self.graphql().create_cloud_account(cancel, input).await
    }

    async fn update_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &UpdateCloudAccountInput,
    ) -> Result<CloudAccountOutput> {
        self.graphql().update_cloud_account(cancel, input).await
    }

    async fn get_cloud_account(&self, cancel: &CancellationToken, id: &str) -> Result<CloudAccount> {
        self.graphql().get_cloud_account(cancel, id).await
    }

    async fn delete_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &DeleteCloudAccountInput,
    ) -> Result<DeleteCloudAccountOutput> {
        self.graphql().delete_cloud_account(cancel, input).await
    }

    async fn create_schema(
        &self,
        cancel: &CancellationToken,
        input: &CreateSchemaInput,
    ) -> Result<SchemaOutput> {
        self.graphql().create_schema(cancel, input).await
    }

    async fn update_schema(
        &self,
        cancel: &CancellationToken,
        input: &UpdateSchemaInput,
    ) -> Result<SchemaOutput> {
        self.graphql().update_schema(cancel, input).await
    }

    async fn get_schema(&self, cancel: &CancellationToken, name: &str) -> Result<Option<Schema>> {
        self.graphql().get_schema(cancel, name).await
    }

    async fn list_schemas(
        &self,
        cancel: &CancellationToken,
        cursor: Option<&str>,
    ) -> Result<SchemaPage> {
        self.graphql().list_schemas(cancel, cursor).await
    }

    async fn delete_schema(
        &self,
        cancel: &CancellationToken,
        input: &DeleteSchemaInput,
    ) -> Result<DeleteSchemaOutput> {
        self.graphql().delete_schema(cancel, input).await
    }

    async fn create_http_source(
        &self,
        cancel: &CancellationToken,
        input: &CreateHttpSourceInput,
    ) -> Result<HttpSource> {
        self.rest().create_http_source(cancel, input).await
    }

    async fn update_http_source(
        &self,
        cancel: &CancellationToken,
        input: &UpdateHttpSourceInput,
    ) -> Result<HttpSource> {
        self.rest().update_http_source(cancel, input).await
    }

    async fn get_http_source(&self, cancel: &CancellationToken, id: &str) -> Result<HttpSource> {
        self.rest().get_http_source(cancel, id).await
    }

    async fn delete_http_source(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_http_source(cancel, id).await
    }

    async fn create_rule(&self, cancel: &CancellationToken, input: &CreateRuleInput) -> Result<Rule> {
        self.rest().create_rule(cancel, input).await
    }

    async fn update_rule(&self, cancel: &CancellationToken, input: &UpdateRuleInput) -> Result<Rule> {
        self.rest().update_rule(cancel, input).await
    }

    async fn get_rule(&self, cancel: &CancellationToken, id: &str) -> Result<Rule> {
        self.rest().get_rule(cancel, id).await
    }

    async fn delete_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_rule(cancel, id).await
    }

    async fn create_policy(
        &self,
        cancel: &CancellationToken,
        input: &CreatePolicyInput,
    ) -> Result<Policy> {
        self.rest().create_policy(cancel, input).await
    }

    async fn update_policy(
        &self,
        cancel: &CancellationToken,
        input: &UpdatePolicyInput,
    ) -> Result<Policy> {
        self.rest().update_policy(cancel, input).await
    }

    async fn get_policy(&self, cancel: &CancellationToken, id: &str) -> Result<Policy> {
        self.rest().get_policy(cancel, id).await
    }

    async fn delete_policy(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_policy(cancel, id).await
    }

    async fn create_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        input: &CreateScheduledRuleInput,
    ) -> Result<ScheduledRule> {
        self.rest().create_scheduled_rule(cancel, input).await
    }

    async fn update_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        input: &UpdateScheduledRuleInput,
    ) -> Result<ScheduledRule> {
        self.rest().update_scheduled_rule(cancel, input).await
    }

    async fn get_scheduled_rule(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<ScheduledRule> {
        self.rest().get_scheduled_rule(cancel, id).await
    }

    async fn delete_scheduled_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_scheduled_rule(cancel, id).await
    }

    async fn create_simple_rule(
        &self,
        cancel: &CancellationToken,
        input: &CreateSimpleRuleInput,
    ) -> Result<SimpleRule> {
        self.rest().create_simple_rule(cancel, input).await
    }

    async fn update_simple_rule(
        &self,
        cancel: &CancellationToken,
        input: &UpdateSimpleRuleInput,
    ) -> Result<SimpleRule> {
        self.rest().update_simple_rule(cancel, input).await
    }

    async fn get_simple_rule(&self, cancel: &CancellationToken, id: &str) -> Result<SimpleRule> {
        self.rest().get_simple_rule(cancel, id).await
    }

    async fn delete_simple_rule(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_simple_rule(cancel, id).await
    }

    async fn create_user(&self, cancel: &CancellationToken, input: &CreateUserInput) -> Result<User> {
        self.rest().create_user(cancel, input).await
    }

    async fn update_user(&self, cancel: &CancellationToken, input: &UpdateUserInput) -> Result<User> {
        self.rest().update_user(cancel, input).await
    }

    async fn get_user(&self, cancel: &CancellationToken, id: &str) -> Result<User> {
        self.rest().get_user(cancel, id).await
    }

    async fn delete_user(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_user(cancel, id).await
    }

    async fn create_role(&self, cancel: &CancellationToken, input: &CreateRoleInput) -> Result<Role> {
        self.rest().create_role(cancel, input).await
    }

    async fn update_role(&self, cancel: &CancellationToken, input: &UpdateRoleInput) -> Result<Role> {
        self.rest().update_role(cancel, input).await
    }

    async fn get_role(&self, cancel: &CancellationToken, id: &str) -> Result<Role> {
        self.rest().get_role(cancel, id).await
    }

    async fn delete_role(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.rest().delete_role(cancel, id).await
    }
}
