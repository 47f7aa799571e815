//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of the mapping layer and for
//! stubbing repository responses. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//!
//! let address = fixture::address::entity_builder()
//!     .student_id(student.student_id)
//!     .city("Wellington")
//!     .build();
//! ```

pub mod address;
pub mod student;

pub use address::{entity as address_entity, entity_builder as address_entity_builder};
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
