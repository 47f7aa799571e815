use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::student::{StudentCreateDto, StudentDto, StudentUpdateDto},
    server::{
        error::AppError,
        model::student::{CreateStudentParam, UpdateStudentParam},
        state::AppState,
        util::body::require_body,
    },
};

/// Get all students.
///
/// Returns every stored student ordered by first name.
///
/// # Arguments
/// - `state` - Application state containing the student repository
///
/// # Returns
/// - `200 OK` - List of students, empty when none exist
/// - `500 Internal Server Error` - Database error
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.students.list().await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a student by ID.
///
/// # Arguments
/// - `state` - Application state containing the student repository
/// - `student_id` - ID of the student to fetch
///
/// # Returns
/// - `200 OK` - The requested student
/// - `404 Not Found` - No student has the given ID
/// - `500 Internal Server Error` - Database error
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = state
        .students
        .get(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// The store assigns the ID and the creation time. The response carries the stored
/// student and a `Location` header pointing at it.
///
/// # Arguments
/// - `state` - Application state containing the student repository
/// - `payload` - Student creation data
///
/// # Returns
/// - `201 Created` - Successfully created student
/// - `400 Bad Request` - Missing or malformed body, or invalid student data
/// - `500 Internal Server Error` - The student could not be saved
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<Option<StudentCreateDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = require_body(payload)?;
    let first_name = payload.first_name.clone();

    let student = state
        .students
        .create(CreateStudentParam::from(payload))
        .await
        .map_err(|e| {
            AppError::from_write(
                e,
                format!("Something went wrong when saving the record {}", first_name),
            )
        })?;

    tracing::info!("Created student {}", student.student_id);

    let location = format!("/api/students/{}", student.student_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student.into_dto()),
    ))
}

/// Update a student.
///
/// Replaces every mutable field of the student. The ID in the body must match the
/// route; a mismatch is rejected before the store is touched.
///
/// # Arguments
/// - `state` - Application state containing the student repository
/// - `student_id` - ID of the student to update
/// - `payload` - Full replacement data including the student ID
///
/// # Returns
/// - `204 No Content` - Successfully updated student
/// - `400 Bad Request` - Missing or malformed body, ID mismatch, or invalid student data
/// - `404 Not Found` - No student has the given ID
/// - `500 Internal Server Error` - The student could not be saved
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    payload: Result<Json<Option<StudentUpdateDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = require_body(payload)?;

    if payload.student_id != student_id {
        return Err(AppError::BadRequest(format!(
            "Student ID {} in body does not match route ID {}",
            payload.student_id, student_id
        )));
    }

    let first_name = payload.first_name.clone();

    state
        .students
        .update(UpdateStudentParam::from(payload))
        .await
        .map_err(|e| {
            AppError::from_write(
                e,
                format!(
                    "Something went wrong when updating the record {}",
                    first_name
                ),
            )
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a student.
///
/// Removing a student also removes all of its addresses.
///
/// # Arguments
/// - `state` - Application state containing the student repository
/// - `student_id` - ID of the student to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted student
/// - `404 Not Found` - No student has the given ID
/// - `409 Conflict` - The store refused the delete
/// - `500 Internal Server Error` - The student could not be deleted
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !state.students.exists(student_id).await? {
        return Err(AppError::NotFound(format!(
            "Student {} not found",
            student_id
        )));
    }

    let student = state
        .students
        .get(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;
    let first_name = student.first_name.clone();

    state.students.delete(student).await.map_err(|e| {
        AppError::from_delete(
            e,
            format!(
                "Something went wrong when deleting the record {}",
                first_name
            ),
        )
    })?;

    tracing::info!("Deleted student {}", student_id);

    Ok(StatusCode::NO_CONTENT)
}
