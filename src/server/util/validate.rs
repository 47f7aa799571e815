//! Field-level validation helpers shared by the parameter models.

use crate::server::error::repository::RepositoryError;

/// Rejects empty or whitespace-only values for a required string field.
///
/// # Arguments
/// - `field` - Wire name of the field, used in the error message
/// - `value` - The value to check
///
/// # Returns
/// - `Ok(())` - The value contains at least one non-whitespace character
/// - `Err(RepositoryError::Validation)` - The value is blank
pub fn require_non_blank(field: &str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::Validation(format!("{} is required", field)));
    }

    Ok(())
}

/// Rejects values longer than `max` characters.
///
/// Length is counted in characters, not bytes.
pub fn require_max_len(field: &str, value: &str, max: usize) -> Result<(), RepositoryError> {
    if value.chars().count() > max {
        return Err(RepositoryError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// Rejects negative integers.
pub fn require_non_negative(field: &str, value: i32) -> Result<(), RepositoryError> {
    if value < 0 {
        return Err(RepositoryError::Validation(format!(
            "{} must not be negative",
            field
        )));
    }

    Ok(())
}

/// Rejects ids that can never reference a stored row.
pub fn require_positive_id(field: &str, value: i32) -> Result<(), RepositoryError> {
    if value <= 0 {
        return Err(RepositoryError::Validation(format!(
            "{} must be a positive id",
            field
        )));
    }

    Ok(())
}
