//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .email_address(Some("ada@example.com"))
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    email_address: Option<String>,
    phone_number: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"` where id is auto-incremented
    /// - last_name: `"Last {id}"`
    /// - middle_name, email_address, phone_number: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            middle_name: None,
            last_name: format!("Last {}", id),
            email_address: None,
            phone_number: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn middle_name(mut self, middle_name: Option<&str>) -> Self {
        self.middle_name = middle_name.map(str::to_string);
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email_address(mut self, email_address: Option<&str>) -> Self {
        self.email_address = email_address.map(str::to_string);
        self
    }

    pub fn phone_number(mut self, phone_number: Option<&str>) -> Self {
        self.phone_number = phone_number.map(str::to_string);
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            middle_name: ActiveValue::Set(self.middle_name),
            last_name: ActiveValue::Set(self.last_name),
            email_address: ActiveValue::Set(self.email_address),
            phone_number: ActiveValue::Set(self.phone_number),
            time_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with the provided first name.
///
/// Useful for ordering tests on the student list.
pub async fn create_student_named(
    db: &DatabaseConnection,
    first_name: impl Into<String>,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).first_name(first_name).build().await
}
