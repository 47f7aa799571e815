use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full representation of a student returned by read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub student_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub time_created: DateTime<Utc>,
}

/// Body of `POST /api/students`.
///
/// Carries no identity or creation time; both are assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreateDto {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}

/// Body of `PATCH /api/students/{student_id}`.
///
/// Replaces every mutable field of the student. `student_id` must match the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdateDto {
    pub student_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
}
