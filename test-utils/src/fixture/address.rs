//! Address fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::address;

use crate::fixture::student::{default_time_created, DEFAULT_STUDENT_ID};

/// Default address ID.
pub const DEFAULT_ADDRESS_ID: i32 = 1;

/// Default street number.
pub const DEFAULT_STREET_NUMBER: i32 = 12;

/// Default street.
pub const DEFAULT_STREET: &str = "Symonds Street";

/// Default suburb.
pub const DEFAULT_SUBURB: &str = "Grafton";

/// Default city.
pub const DEFAULT_CITY: &str = "Auckland";

/// Default post code.
pub const DEFAULT_POST_CODE: i32 = 1010;

/// Default country.
pub const DEFAULT_COUNTRY: &str = "New Zealand";

/// Creates an address entity model with default values owned by the default student.
pub fn entity() -> address::Model {
    entity_builder().build()
}

/// Creates an address entity builder for customization.
pub fn entity_builder() -> AddressEntityBuilder {
    AddressEntityBuilder::default()
}

/// Builder for creating customized address entity models.
pub struct AddressEntityBuilder {
    address_id: i32,
    student_id: i32,
    street_number: i32,
    street: String,
    suburb: String,
    city: String,
    post_code: i32,
    country: String,
    time_created: DateTime<Utc>,
}

impl Default for AddressEntityBuilder {
    fn default() -> Self {
        Self {
            address_id: DEFAULT_ADDRESS_ID,
            student_id: DEFAULT_STUDENT_ID,
            street_number: DEFAULT_STREET_NUMBER,
            street: DEFAULT_STREET.to_string(),
            suburb: DEFAULT_SUBURB.to_string(),
            city: DEFAULT_CITY.to_string(),
            post_code: DEFAULT_POST_CODE,
            country: DEFAULT_COUNTRY.to_string(),
            time_created: default_time_created(),
        }
    }
}

impl AddressEntityBuilder {
    pub fn address_id(mut self, address_id: i32) -> Self {
        self.address_id = address_id;
        self
    }

    pub fn student_id(mut self, student_id: i32) -> Self {
        self.student_id = student_id;
        self
    }

    pub fn street_number(mut self, street_number: i32) -> Self {
        self.street_number = street_number;
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
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

    /// Builds and returns the address entity model.
    pub fn build(self) -> address::Model {
        address::Model {
            address_id: self.address_id,
            student_id: self.student_id,
            street_number: self.street_number,
            street: self.street,
            suburb: self.suburb,
            city: self.city,
            post_code: self.post_code,
            country: self.country,
            time_created: self.time_created,
        }
    }
}
