//! Wire-facing data transfer objects.
//!
//! These types define the JSON shapes accepted and returned by the HTTP API. Field names
//! are serialized in camelCase. Each resource has a read DTO carrying every field, a create
//! DTO without server-assigned fields, and an update DTO carrying the identity explicitly.

pub mod address;
pub mod api;
pub mod student;
