//! Domain & parameter models for address operations
//!
//! Defines the address domain model, the create/update parameter models with their
//! validation rules, and the field copies between entity models, parameters and DTOs.

use chrono::{DateTime, Utc};

use crate::{
    model::address::{AddressCreateDto, AddressDto, AddressUpdateDto},
    server::{
        error::repository::RepositoryError,
        util::validate::{require_non_blank, require_non_negative, require_positive_id},
    },
};

/// The address domain model
///
/// Always belongs to exactly one student through `student_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub address_id: i32,
    pub student_id: i32,
    pub street_number: i32,
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub post_code: i32,
    pub country: String,
    pub time_created: DateTime<Utc>,
}

impl Address {
    /// Converts an entity model to the address domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Address` - The converted address domain model
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            address_id: entity.address_id,
            student_id: entity.student_id,
            street_number: entity.street_number,
            street: entity.street,
            suburb: entity.suburb,
            city: entity.city,
            post_code: entity.post_code,
            country: entity.country,
            time_created: entity.time_created,
        }
    }

    /// Converts a read DTO back into the domain model
    pub fn from_dto(dto: AddressDto) -> Self {
        Self {
            address_id: dto.address_id,
            student_id: dto.student_id,
            street_number: dto.street_number,
            street: dto.street,
            suburb: dto.suburb,
            city: dto.city,
            post_code: dto.post_code,
            country: dto.country,
            time_created: dto.time_created,
        }
    }

    /// Converts the address domain model into the read DTO
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
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

    /// Converts the address domain model into an update DTO
    pub fn into_update_dto(self) -> AddressUpdateDto {
        AddressUpdateDto {
            address_id: self.address_id,
            student_id: self.student_id,
            street_number: self.street_number,
            street: self.street,
            suburb: self.suburb,
            city: self.city,
            post_code: self.post_code,
            country: self.country,
        }
    }
}

/// Parameters for creating a new address
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAddressParam {
    pub student_id: i32,
    pub street_number: i32,
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub post_code: i32,
    pub country: String,
}

impl CreateAddressParam {
    /// Checks the field rules for a new address
    ///
    /// Whether `student_id` points at an existing student is left to the store's
    /// foreign key.
    pub fn validate(&self) -> Result<(), RepositoryError> {
        validate_fields(
            self.student_id,
            &self.street,
            &self.suburb,
            &self.city,
            self.post_code,
            &self.country,
        )
    }
}

impl From<AddressCreateDto> for CreateAddressParam {
    fn from(dto: AddressCreateDto) -> Self {
        Self {
            student_id: dto.student_id,
            street_number: dto.street_number,
            street: dto.street,
            suburb: dto.suburb,
            city: dto.city,
            post_code: dto.post_code,
            country: dto.country,
        }
    }
}

/// Parameters for replacing every mutable field of an existing address
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAddressParam {
    pub address_id: i32,
    pub student_id: i32,
    pub street_number: i32,
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub post_code: i32,
    pub country: String,
}

impl UpdateAddressParam {
    /// Checks the field rules for the replacement values
    pub fn validate(&self) -> Result<(), RepositoryError> {
        validate_fields(
            self.student_id,
            &self.street,
            &self.suburb,
            &self.city,
            self.post_code,
            &self.country,
        )
    }
}

impl From<AddressUpdateDto> for UpdateAddressParam {
    fn from(dto: AddressUpdateDto) -> Self {
        Self {
            address_id: dto.address_id,
            student_id: dto.student_id,
            street_number: dto.street_number,
            street: dto.street,
            suburb: dto.suburb,
            city: dto.city,
            post_code: dto.post_code,
            country: dto.country,
        }
    }
}

fn validate_fields(
    student_id: i32,
    street: &str,
    suburb: &str,
    city: &str,
    post_code: i32,
    country: &str,
) -> Result<(), RepositoryError> {
    require_positive_id("studentId", student_id)?;
    require_non_blank("street", street)?;
    require_non_blank("suburb", suburb)?;
    require_non_blank("city", city)?;
    require_non_negative("postCode", post_code)?;
    require_non_blank("country", country)?;

    Ok(())
}
