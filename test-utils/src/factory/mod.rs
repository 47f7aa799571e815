//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take care of foreign key relationships through
//! the helpers module.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let student = factory::create_student(&db).await?;
//!     let address = factory::create_address(&db, student.student_id).await?;
//!
//!     let (student, addresses) =
//!         factory::helpers::create_student_with_addresses(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .first_name("Ada")
//!     .last_name("Lovelace")
//!     .build()
//!     .await?;
//! ```

pub mod address;
pub mod helpers;
pub mod student;

pub use address::create_address;
pub use student::create_student;
