//! Address factory for creating test address entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test addresses with customizable fields.
///
/// The owning student must already exist; SQLite enforces the foreign key.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::address::AddressFactory;
///
/// let address = AddressFactory::new(&db, student.student_id)
///     .city("Auckland")
///     .post_code(1010)
///     .build()
///     .await?;
/// ```
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    street_number: i32,
    street: String,
    suburb: String,
    city: String,
    post_code: i32,
    country: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - street_number: auto-incremented counter value
    /// - street: `"Street {id}"`
    /// - suburb: `"Suburb"`, city: `"City"`, country: `"Country"`
    /// - post_code: `1010`
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            street_number: id as i32,
            street: format!("Street {}", id),
            suburb: "Suburb".to_string(),
            city: "City".to_string(),
            post_code: 1010,
            country: "Country".to_string(),
        }
    }

    pub fn street_number(mut self, street_number: i32) -> Self {
        self.street_number = street_number;
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn suburb(mut self, suburb: impl Into<String>) -> Self {
        self.suburb = suburb.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn post_code(mut self, post_code: i32) -> Self {
        self.post_code = post_code;
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Created address entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert, including a missing student
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            street_number: ActiveValue::Set(self.street_number),
            street: ActiveValue::Set(self.street),
            suburb: ActiveValue::Set(self.suburb),
            city: ActiveValue::Set(self.city),
            post_code: ActiveValue::Set(self.post_code),
            country: ActiveValue::Set(self.country),
            time_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values for the given student.
///
/// Shorthand for `AddressFactory::new(db, student_id).build().await`.
pub async fn create_address(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, student_id).build().await
}
