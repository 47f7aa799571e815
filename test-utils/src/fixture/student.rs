//! Student fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::student;

/// Default student ID.
pub const DEFAULT_STUDENT_ID: i32 = 1;

/// Default first name.
pub const DEFAULT_FIRST_NAME: &str = "Ada";

/// Default last name.
pub const DEFAULT_LAST_NAME: &str = "Lovelace";

/// Fixed creation timestamp so fixtures compare equal across calls.
pub fn default_time_created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 7, 21, 14, 40, 27)
        .single()
        .unwrap_or_default()
}

/// Creates a student entity model with default values.
///
/// # Default Values
/// - student_id: `1`
/// - first_name: `"Ada"`
/// - last_name: `"Lovelace"`
/// - middle_name, email_address, phone_number: `None`
/// - time_created: 2020-07-21 14:40:27 UTC
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    student_id: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    email_address: Option<String>,
    phone_number: Option<String>,
    time_created: DateTime<Utc>,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            student_id: DEFAULT_STUDENT_ID,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            middle_name: None,
            last_name: DEFAULT_LAST_NAME.to_string(),
            email_address: None,
            phone_number: None,
            time_created: default_time_created(),
        }
    }
}

impl StudentEntityBuilder {
    pub fn student_id(mut self, student_id: i32) -> Self {
        self.student_id = student_id;
        self
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

    pub fn time_created(mut self, time_created: DateTime<Utc>) -> Self {
        self.time_created = time_created;
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            student_id: self.student_id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            time_created: self.time_created,
        }
    }
}
