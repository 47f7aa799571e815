use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::address::{AddressCreateDto, AddressDto, AddressUpdateDto},
    server::{
        error::AppError,
        model::address::{Address, CreateAddressParam, UpdateAddressParam},
        state::AppState,
        util::body::require_body,
    },
};

fn into_dtos(addresses: Vec<Address>) -> Vec<AddressDto> {
    addresses.into_iter().map(|a| a.into_dto()).collect()
}

/// Get all addresses.
///
/// # Returns
/// - `200 OK` - List of addresses ordered by ID, empty when none exist
/// - `500 Internal Server Error` - Database error
pub async fn get_addresses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let addresses = state.addresses.list().await?;

    Ok((StatusCode::OK, Json(into_dtos(addresses))))
}

/// Get an address by ID.
///
/// # Returns
/// - `200 OK` - The requested address
/// - `404 Not Found` - No address has the given ID
/// - `500 Internal Server Error` - Database error
pub async fn get_address(
    State(state): State<AppState>,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let address = state
        .addresses
        .get(address_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Address {} not found", address_id)))?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

/// Get the addresses of one student.
///
/// # Arguments
/// - `state` - Application state containing both repositories
/// - `student_id` - ID of the owning student
///
/// # Returns
/// - `200 OK` - The student's addresses ordered by ID, possibly empty
/// - `404 Not Found` - No student has the given ID
/// - `500 Internal Server Error` - Database error
pub async fn get_addresses_of_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !state.students.exists(student_id).await? {
        return Err(AppError::NotFound(format!(
            "Student {} not found",
            student_id
        )));
    }

    let addresses = state.addresses.list_by_student(student_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(addresses))))
}

/// Create a new address.
///
/// The owning student must exist; the store rejects the insert otherwise.
///
/// # Arguments
/// - `state` - Application state containing the address repository
/// - `payload` - Address creation data including the owning student ID
///
/// # Returns
/// - `201 Created` - Successfully created address
/// - `400 Bad Request` - Missing or malformed body, or invalid address data
/// - `500 Internal Server Error` - The address could not be saved
pub async fn create_address(
    State(state): State<AppState>,
    payload: Result<Json<Option<AddressCreateDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = require_body(payload)?;
    let student_id = payload.student_id;

    let address = state
        .addresses
        .create(CreateAddressParam::from(payload))
        .await
        .map_err(|e| {
            AppError::from_write(
                e,
                format!(
                    "Something went wrong when saving the address of student {}",
                    student_id
                ),
            )
        })?;

    tracing::info!(
        "Created address {} for student {}",
        address.address_id,
        address.student_id
    );

    let location = format!("/api/addresses/{}", address.address_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(address.into_dto()),
    ))
}

/// Update an address.
///
/// Replaces every mutable field of the address. The ID in the body must match the
/// route; a mismatch is rejected before the store is touched.
///
/// # Returns
/// - `204 No Content` - Successfully updated address
/// - `400 Bad Request` - Missing or malformed body, ID mismatch, or invalid address data
/// - `404 Not Found` - No address has the given ID
/// - `500 Internal Server Error` - The address could not be saved
pub async fn update_address(
    State(state): State<AppState>,
    Path(address_id): Path<i32>,
    payload: Result<Json<Option<AddressUpdateDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = require_body(payload)?;

    if payload.address_id != address_id {
        return Err(AppError::BadRequest(format!(
            "Address ID {} in body does not match route ID {}",
            payload.address_id, address_id
        )));
    }

    state
        .addresses
        .update(UpdateAddressParam::from(payload))
        .await
        .map_err(|e| {
            AppError::from_write(
                e,
                format!(
                    "Something went wrong when updating the record {}",
                    address_id
                ),
            )
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an address.
///
/// # Returns
/// - `204 No Content` - Successfully deleted address
/// - `404 Not Found` - No address has the given ID
/// - `409 Conflict` - The store refused the delete
/// - `500 Internal Server Error` - The address could not be deleted
pub async fn delete_address(
    State(state): State<AppState>,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !state.addresses.exists(address_id).await? {
        return Err(AppError::NotFound(format!(
            "Address {} not found",
            address_id
        )));
    }

    let address = state
        .addresses
        .get(address_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Address {} not found", address_id)))?;

    state.addresses.delete(address).await.map_err(|e| {
        AppError::from_delete(
            e,
            format!(
                "Something went wrong when deleting the record {}",
                address_id
            ),
        )
    })?;

    Ok(StatusCode::NO_CONTENT)
}
