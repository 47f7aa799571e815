//! Domain & parameter models for student operations
//!
//! Defines the student domain model, the create/update parameter models with their
//! validation rules, and the field copies between entity models, parameters and DTOs.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{StudentCreateDto, StudentDto, StudentUpdateDto},
    server::{
        error::repository::RepositoryError,
        util::validate::{require_max_len, require_non_blank},
    },
};

/// Maximum number of characters allowed in a student's first name.
pub const FIRST_NAME_MAX_LEN: usize = 100;

/// The student domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub time_created: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to the student domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Student` - The converted student domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            student_id: entity.student_id,
            first_name: entity.first_name,
            middle_name: entity.middle_name,
            last_name: entity.last_name,
            email_address: entity.email_address,
            phone_number: entity.phone_number,
            time_created: entity.time_created,
        }
    }

    /// Converts a read DTO back into the domain model
    pub fn from_dto(dto: StudentDto) -> Self {
        Self {
            student_id: dto.student_id,
            first_name: dto.first_name,
            middle_name: dto.middle_name,
            last_name: dto.last_name,
            email_address: dto.email_address,
            phone_number: dto.phone_number,
            time_created: dto.time_created,
        }
    }

    /// Converts the student domain model into the read DTO
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            student_id: self.student_id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            time_created: self.time_created,
        }
    }

    /// Converts the student domain model into an update DTO
    ///
    /// `time_created` has no counterpart on the update shape and is dropped.
    pub fn into_update_dto(self) -> StudentUpdateDto {
        StudentUpdateDto {
            student_id: self.student_id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            email_address: self.email_address,
            phone_number: self.phone_number,
        }
    }
}

/// Parameters for creating a new student
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentParam {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}

impl CreateStudentParam {
    /// Checks the field rules for a new student
    ///
    /// # Returns
    /// - `Ok(())` - The student may be inserted
    /// - `Err(RepositoryError::Validation)` - A name is blank or the first name is too long
    pub fn validate(&self) -> Result<(), RepositoryError> {
        validate_names(&self.first_name, &self.last_name)
    }
}

impl From<StudentCreateDto> for CreateStudentParam {
    fn from(dto: StudentCreateDto) -> Self {
        Self {
            first_name: dto.first_name,
            middle_name: dto.middle_name,
            last_name: dto.last_name,
            email_address: dto.email_address,
            phone_number: dto.phone_number,
        }
    }
}

/// Parameters for replacing every mutable field of an existing student
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudentParam {
    pub student_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateStudentParam {
    /// Checks the field rules for the replacement values
    pub fn validate(&self) -> Result<(), RepositoryError> {
        validate_names(&self.first_name, &self.last_name)
    }
}

impl From<StudentUpdateDto> for UpdateStudentParam {
    fn from(dto: StudentUpdateDto) -> Self {
        Self {
            student_id: dto.student_id,
            first_name: dto.first_name,
            middle_name: dto.middle_name,
            last_name: dto.last_name,
            email_address: dto.email_address,
            phone_number: dto.phone_number,
        }
    }
}

fn validate_names(first_name: &str, last_name: &str) -> Result<(), RepositoryError> {
    require_non_blank("firstName", first_name)?;
    require_max_len("firstName", first_name, FIRST_NAME_MAX_LEN)?;
    require_non_blank("lastName", last_name)?;

    Ok(())
}
