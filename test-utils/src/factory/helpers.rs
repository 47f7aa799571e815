//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student owning `count` addresses.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of addresses to create for the student
///
/// # Returns
/// - `Ok((student, addresses))` - The student and its addresses in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_addresses(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::student::Model, Vec<entity::address::Model>), DbErr> {
    let student = crate::factory::student::create_student(db).await?;

    let mut addresses = Vec::with_capacity(count);
    for _ in 0..count {
        addresses.push(crate::factory::address::create_address(db, student.student_id).await?);
    }

    Ok((student, addresses))
}
