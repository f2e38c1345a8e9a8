//! Data Transfer Objects for API requests
//!
//! Each resource family has a create input, an update input and a
//! `*ModifiableAttributes` group shared by both. The group is flattened into
//! the JSON body, so create and update always send the same attribute names.
//! Update inputs additionally carry the identifier of the record to change;
//! create inputs omit everything the server assigns.

pub mod cloud_account;
pub mod http_source;
pub mod policy;
pub mod role;
pub mod rule;
pub mod s3_source;
pub mod scheduled_rule;
pub mod schema;
pub mod simple_rule;
pub mod user;
