//! Core domain types
//!
//! Server-side records for every resource family managed through the API.
//! Each record carries the fields assigned by the server (ids, timestamps,
//! revisions) in addition to the attributes the operator controls.

pub mod cloud_account;
pub mod error;
pub mod http_source;
pub mod nullable;
pub mod policy;
pub mod role;
pub mod rule;
pub mod s3_source;
pub mod scheduled_rule;
pub mod schema;
pub mod severity;
pub mod simple_rule;
pub mod user;

/// A record that the API identifies by a single string key.
///
/// Endpoints disagree on what that key is called (`id`, `integrationId`,
/// `name`); this trait gives callers one accessor regardless of family.
pub trait Identified {
    /// The identifier used in lookups, updates and deletes
    fn id(&self) -> &str;
}
