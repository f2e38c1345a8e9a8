//! REST client tests against a wiremock server.
//!
//! The mock server stands in for an API gateway that serves the Panther API
//! under `/v1`, so every path below carries that prefix.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/v1/log-sources/http` | `create_http_source_*` |
//! | PUT    | `/v1/log-sources/http/{id}` | `update_http_source_*` |
//! | GET    | `/v1/rules/{id}` | `get_rule_*` |
//! | POST   | `/v1/policies` | `create_policy_*` |
//! | PUT    | `/v1/policies/{id}` | `update_policy_*` |
//! | GET    | `/v1/policies/{id}` | `get_policy_*` |
//! | PUT    | `/v1/scheduled-rules/{id}` | `update_scheduled_rule_*` |
//! | GET    | `/v1/scheduled-rules/{id}` | `get_scheduled_rule_*` |
//! | POST   | `/v1/simple-rules` | `create_simple_rule_*` |
//! | GET    | `/v1/simple-rules/{id}` | `get_simple_rule_*` |
//! | DELETE | `/v1/simple-rules/{id}` | `delete_simple_rule_*` |
//! | DELETE | `/v1/users/{id}` | `delete_user_*` |
//! | POST   | `/v1/roles` | `create_role_*` |
//! | PUT    | `/v1/roles/{id}` | `update_role_*` |
//! | GET    | `/v1/roles/{id}` | `get_role_*` |

use std::time::Duration;

use panther_client::{ClientConfig, ClientError, PantherApi, PantherClient, RetryPolicy};
use panther_core::domain::severity::Severity;
use panther_core::dto::http_source::{
    CreateHttpSourceInput, HttpSourceModifiableAttributes, UpdateHttpSourceInput,
};
use panther_core::dto::policy::{CreatePolicyInput, PolicyModifiableAttributes, UpdatePolicyInput};
use panther_core::dto::role::{CreateRoleInput, RoleModifiableAttributes, UpdateRoleInput};
use panther_core::dto::scheduled_rule::{
    ScheduledRuleModifiableAttributes, UpdateScheduledRuleInput,
};
use panther_core::dto::simple_rule::{CreateSimpleRuleInput, SimpleRuleModifiableAttributes};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client whose base URL is the mock server plus a `/v1` gateway stage.
fn test_client(mock_server: &MockServer) -> PantherClient {
    let policy = RetryPolicy {
        max_retries: 1,
        min_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(2),
        attempt_timeout: Duration::from_secs(5),
        timeout: Duration::from_secs(5),
    };
    let config =
        ClientConfig::new(format!("{}/v1", mock_server.uri()), "test-token").with_retry(policy);
    PantherClient::new(&config).unwrap()
}

fn http_source_attributes() -> HttpSourceModifiableAttributes {
    HttpSourceModifiableAttributes {
        integration_label: "webhook".into(),
        log_stream_type: "JSON".into(),
        log_types: vec!["Custom.Webhook".into()],
        auth_method: "Bearer".into(),
        auth_bearer_token: "s3cr3t".into(),
        ..Default::default()
    }
}

// ── POST /v1/log-sources/http ────────────────────────────────────────

#[tokio::test]
async fn create_http_source_accepts_201() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/log-sources/http"))
        .and(header("x-api-key", "test-token"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "integrationLabel": "webhook",
            "logTypes": ["Custom.Webhook"],
            "authMethod": "Bearer"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "integrationId": "hs-1",
            "integrationLabel": "webhook",
            "logStreamType": "JSON",
            "logTypes": ["Custom.Webhook"],
            "authMethod": "Bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreateHttpSourceInput {
        attributes: http_source_attributes(),
    };

    let source = client
        .create_http_source(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(source.integration_id, "hs-1");
    assert_eq!(source.log_types, vec!["Custom.Webhook"]);
}

#[tokio::test]
async fn create_http_source_rejects_unexpected_status() {
    let mock_server = MockServer::start().await;

    // A 200 is still a failure: creation must answer 201.
    Mock::given(method("POST"))
        .and(path("/v1/log-sources/http"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"integrationId": "hs-1"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreateHttpSourceInput {
        attributes: http_source_attributes(),
    };

    let err = client
        .create_http_source(&CancellationToken::new(), &input)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(200));
    let message = err.to_string();
    assert!(message.starts_with("create HTTP source failed"), "{message}");
    assert!(message.contains("200"), "{message}");
}

#[tokio::test]
async fn create_http_source_reports_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/log-sources/http"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "log type not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreateHttpSourceInput {
        attributes: http_source_attributes(),
    };

    let err = client
        .create_http_source(&CancellationToken::new(), &input)
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("400"), "{message}");
    assert!(message.contains("log type not found"), "{message}");
    assert!(err.is_client_error());
}

// ── PUT /v1/log-sources/http/{id} ────────────────────────────────────

#[tokio::test]
async fn update_http_source_puts_to_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/log-sources/http/hs-1"))
        .and(body_partial_json(json!({"integrationId": "hs-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "integrationId": "hs-1",
            "integrationLabel": "renamed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut attributes = http_source_attributes();
    attributes.integration_label = "renamed".into();
    let input = UpdateHttpSourceInput {
        integration_id: "hs-1".into(),
        attributes,
    };

    let source = client
        .update_http_source(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(source.integration_label, "renamed");
}

// ── GET /v1/rules/{id} ───────────────────────────────────────────────

#[tokio::test]
async fn get_rule_decodes_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules/AWS.Console.Login"))
        .and(header("x-api-key", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "AWS.Console.Login",
            "displayName": "Console login",
            "body": "def rule(event): return True",
            "severity": "HIGH",
            "enabled": true,
            "dedupPeriodMinutes": 60,
            "logTypes": ["AWS.CloudTrail"],
            "lastModified": "2024-01-01T00:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let rule = client
        .get_rule(&CancellationToken::new(), "AWS.Console.Login")
        .await
        .unwrap();

    assert_eq!(rule.display_name, "Console login");
    assert_eq!(rule.severity, Severity::High);
    assert_eq!(rule.dedup_period_minutes, 60);
    assert_eq!(rule.updated_at, "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn get_rule_with_invalid_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules/missing"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .get_rule(&CancellationToken::new(), "missing")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("502"), "{message}");
    assert!(message.contains("failed to decode error response"), "{message}");
    assert!(err.is_server_error());
}

#[tokio::test]
async fn get_rule_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .get_rule(&CancellationToken::new(), "gone")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn get_rule_with_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules/r-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .get_rule(&CancellationToken::new(), "r-1")
        .await
        .unwrap_err();
    assert!(matches!(err.root_cause(), ClientError::ParseError(_)));
    let message = err.to_string();
    assert!(message.starts_with("get rule failed: Failed to parse response: "), "{message}");
    assert_eq!(message.to_lowercase().matches("failed to parse response").count(), 1);
}

#[tokio::test]
async fn get_rule_with_null_attributes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/rules/R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "R1",
            "runbook": null,
            "description": null,
            "tags": null,
            "severity": "LOW",
            "logTypes": ["AWS.CloudTrail"]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let rule = client
        .get_rule(&CancellationToken::new(), "R1")
        .await
        .unwrap();

    assert_eq!(rule.id, "R1");
    assert!(rule.runbook.is_empty());
    assert!(rule.description.is_empty());
    assert!(rule.tags.is_empty());
    assert_eq!(rule.severity, Severity::Low);
}

// ── POST /v1/policies ────────────────────────────────────────────────

#[tokio::test]
async fn create_policy_sends_id_and_attributes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/policies"))
        .and(body_partial_json(json!({
            "id": "S3.Bucket.Encrypted",
            "resourceTypes": ["AWS.S3.Bucket"],
            "severity": "MEDIUM"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "S3.Bucket.Encrypted",
            "resourceTypes": ["AWS.S3.Bucket"],
            "severity": "MEDIUM"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreatePolicyInput {
        id: "S3.Bucket.Encrypted".into(),
        attributes: PolicyModifiableAttributes {
            body: "def policy(resource): return True".into(),
            severity: Severity::Medium,
            resource_types: vec!["AWS.S3.Bucket".into()],
            ..Default::default()
        },
    };

    let policy = client
        .create_policy(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(policy.id, "S3.Bucket.Encrypted");
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/policies"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "try later"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreatePolicyInput {
        id: "p-1".into(),
        ..Default::default()
    };

    let err = client
        .create_policy(&CancellationToken::new(), &input)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

// ── PUT|GET /v1/policies/{id} ────────────────────────────────────────

#[tokio::test]
async fn update_policy_puts_to_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/policies/S3.Bucket.Encrypted"))
        .and(body_partial_json(json!({
            "id": "S3.Bucket.Encrypted",
            "enabled": false,
            "severity": "HIGH"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "S3.Bucket.Encrypted",
            "enabled": false,
            "severity": "HIGH",
            "lastModified": "2024-02-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = UpdatePolicyInput {
        id: "S3.Bucket.Encrypted".into(),
        attributes: PolicyModifiableAttributes {
            severity: Severity::High,
            enabled: false,
            ..Default::default()
        },
    };

    let policy = client
        .update_policy(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(policy.severity, Severity::High);
    assert_eq!(policy.updated_at, "2024-02-01T00:00:00Z");
}

#[tokio::test]
async fn get_policy_decodes_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/policies/S3.Bucket.Encrypted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "S3.Bucket.Encrypted",
            "displayName": "Bucket encryption",
            "resourceTypes": ["AWS.S3.Bucket"],
            "description": null,
            "enabled": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let policy = client
        .get_policy(&CancellationToken::new(), "S3.Bucket.Encrypted")
        .await
        .unwrap();

    assert_eq!(policy.display_name, "Bucket encryption");
    assert_eq!(policy.resource_types, vec!["AWS.S3.Bucket"]);
    assert!(policy.description.is_empty());
    assert!(policy.enabled);
}

// ── PUT|GET /v1/scheduled-rules/{id} ─────────────────────────────────

#[tokio::test]
async fn update_scheduled_rule_puts_to_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/scheduled-rules/SR1"))
        .and(body_partial_json(json!({
            "id": "SR1",
            "scheduledQueries": ["Hourly Logins"],
            "threshold": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "SR1",
            "scheduledQueries": ["Hourly Logins"],
            "threshold": 5
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = UpdateScheduledRuleInput {
        id: "SR1".into(),
        attributes: ScheduledRuleModifiableAttributes {
            scheduled_queries: vec!["Hourly Logins".into()],
            threshold: 5,
            ..Default::default()
        },
    };

    let rule = client
        .update_scheduled_rule(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(rule.threshold, 5);
}

#[tokio::test]
async fn get_scheduled_rule_decodes_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/scheduled-rules/SR1"))
        .and(header("x-api-key", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "SR1",
            "displayName": "Login burst",
            "severity": "CRITICAL",
            "scheduledQueries": ["Hourly Logins"],
            "threshold": 10,
            "runbook": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let rule = client
        .get_scheduled_rule(&CancellationToken::new(), "SR1")
        .await
        .unwrap();

    assert_eq!(rule.display_name, "Login burst");
    assert_eq!(rule.severity, Severity::Critical);
    assert_eq!(rule.scheduled_queries, vec!["Hourly Logins"]);
    assert_eq!(rule.threshold, 10);
}

// ── /v1/simple-rules ─────────────────────────────────────────────────

#[tokio::test]
async fn create_simple_rule_posts_detection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/simple-rules"))
        .and(body_partial_json(json!({
            "id": "Okta.Admin",
            "detection": "Key: eventType\nCondition: Equals\nValue: admin",
            "logTypes": ["Okta.SystemLog"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "Okta.Admin",
            "detection": "Key: eventType\nCondition: Equals\nValue: admin",
            "pythonBody": "def rule(event): ...",
            "logTypes": ["Okta.SystemLog"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreateSimpleRuleInput {
        id: "Okta.Admin".into(),
        attributes: SimpleRuleModifiableAttributes {
            detection: "Key: eventType\nCondition: Equals\nValue: admin".into(),
            log_types: vec!["Okta.SystemLog".into()],
            ..Default::default()
        },
    };

    let rule = client
        .create_simple_rule(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(rule.python_body, "def rule(event): ...");
}

#[tokio::test]
async fn get_simple_rule_decodes_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/simple-rules/Okta.Admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "Okta.Admin",
            "alertTitle": "Admin granted",
            "groupBy": null,
            "logTypes": ["Okta.SystemLog"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let rule = client
        .get_simple_rule(&CancellationToken::new(), "Okta.Admin")
        .await
        .unwrap();

    assert_eq!(rule.alert_title, "Admin granted");
    assert!(rule.group_by.is_empty());
    assert_eq!(rule.log_types, vec!["Okta.SystemLog"]);
}

#[tokio::test]
async fn delete_simple_rule_expects_204() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/simple-rules/Okta.Admin"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .delete_simple_rule(&CancellationToken::new(), "Okta.Admin")
        .await
        .unwrap();
}

// ── DELETE /v1/users/{id} ────────────────────────────────────────────

#[tokio::test]
async fn delete_user_expects_204() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/u-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .delete_user(&CancellationToken::new(), "u-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_user_rejects_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .delete_user(&CancellationToken::new(), "u-1")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(200));
    assert!(err.to_string().starts_with("delete user failed"));
}

#[tokio::test]
async fn empty_id_is_rejected_without_a_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .delete_user(&CancellationToken::new(), "")
        .await
        .unwrap_err();
    assert!(matches!(err.root_cause(), ClientError::InvalidRequest(_)));
}

// ── /v1/roles ────────────────────────────────────────────────────────

#[tokio::test]
async fn create_role_posts_to_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/roles"))
        .and(body_partial_json(json!({
            "name": "Analyst",
            "permissions": ["RuleRead", "AlertRead"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "role-1",
            "name": "Analyst",
            "permissions": ["RuleRead", "AlertRead"],
            "logTypeAccessKind": "ALLOW_ALL",
            "logTypeAccess": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = CreateRoleInput {
        attributes: RoleModifiableAttributes {
            name: "Analyst".into(),
            permissions: vec!["RuleRead".into(), "AlertRead".into()],
            ..Default::default()
        },
    };

    let role = client
        .create_role(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(role.id, "role-1");
    assert_eq!(role.log_type_access_kind, "ALLOW_ALL");
    assert!(role.log_type_access.is_empty());
}

#[tokio::test]
async fn update_role_puts_to_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/roles/role-1"))
        .and(body_partial_json(json!({"id": "role-1", "name": "Responder"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "role-1",
            "name": "Responder",
            "permissions": ["AlertModify"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let input = UpdateRoleInput {
        id: "role-1".into(),
        attributes: RoleModifiableAttributes {
            name: "Responder".into(),
            permissions: vec!["AlertModify".into()],
            ..Default::default()
        },
    };

    let role = client
        .update_role(&CancellationToken::new(), &input)
        .await
        .unwrap();
    assert_eq!(role.name, "Responder");
    assert_eq!(role.permissions, vec!["AlertModify"]);
}

#[tokio::test]
async fn get_role_decodes_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/roles/role-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "role-1",
            "name": "Analyst",
            "permissions": ["RuleRead"],
            "logTypeAccessKind": "DENY",
            "logTypeAccess": ["AWS.CloudTrail"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let role = client
        .get_role(&CancellationToken::new(), "role-1")
        .await
        .unwrap();

    assert_eq!(role.name, "Analyst");
    assert_eq!(role.log_type_access, vec!["AWS.CloudTrail"]);
}

#[tokio::test]
async fn get_role_can_be_cancelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/roles/r-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "r-1"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client.get_role(&cancel, "r-1").await.unwrap_err();
    assert!(err.is_cancelled());
    assert!(err.to_string().starts_with("get role failed"));
}
