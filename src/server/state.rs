//! Application state shared across all request handlers.
//!
//! The state holds the two repositories as trait objects. It is built once during
//! startup and cloned for each request through Axum's state extraction; clones share
//! the same underlying connection pool.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::data::{
    address::{AddressRepository, SeaOrmAddressRepository},
    student::{SeaOrmStudentRepository, StudentRepository},
};

/// Application state containing the repositories used by request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Persistence operations over student records.
    pub students: Arc<dyn StudentRepository>,

    /// Persistence operations over address records.
    pub addresses: Arc<dyn AddressRepository>,
}

impl AppState {
    /// Creates a new application state from already constructed repositories.
    ///
    /// Tests use this to substitute repositories that do not touch a database.
    pub fn new(
        students: Arc<dyn StudentRepository>,
        addresses: Arc<dyn AddressRepository>,
    ) -> Self {
        Self {
            students,
            addresses,
        }
    }

    /// Creates the application state backed by SeaORM repositories sharing one pool.
    pub fn from_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmStudentRepository::new(db.clone())),
            Arc::new(SeaOrmAddressRepository::new(db)),
        )
    }
}
