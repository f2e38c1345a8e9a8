//! Panther Core
//!
//! Data records exchanged with the Panther management API.
//!
//! This crate contains:
//! - Domain types: Server-side records as returned by the API (rules, sources, users, ...)
//! - DTOs: Request inputs sent to the API, with the mutable attributes of each
//!   resource family factored into a shared `*ModifiableAttributes` group
//!
//! Nothing here performs I/O. The records are built right before a request and
//! dropped once the response has been mapped.

pub mod domain;
pub mod dto;

pub use domain::Identified;
