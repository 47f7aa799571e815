use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full representation of an address returned by read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
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

/// Body of `POST /api/addresses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreateDto {
    pub student_id: i32,
    pub street_number: i32,
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub post_code: i32,
    pub country: String,
}

/// Body of `PATCH /api/addresses/{address_id}`.
///
/// Replaces every mutable field of the address. `address_id` must match the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdateDto {
    pub address_id: i32,
    pub student_id: i32,
    pub street_number: i32,
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub post_code: i32,
    pub country: String,
}
