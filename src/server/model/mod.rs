//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Every conversion is an explicit
//! field-by-field copy; fields that exist on only one side are left out.

pub mod address;
pub mod student;
