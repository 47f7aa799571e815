use super::*;
use crate::server::data::student::{SeaOrmStudentRepository, StudentRepository};

/// Tests listing only the addresses of one student.
///
/// Expected: Ok with the student's addresses and none of the other student's
#[tokio::test]
async fn returns_only_addresses_of_student() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, addresses) = factory::helpers::create_student_with_addresses(db, 3).await?;
    factory::helpers::create_student_with_addresses(db, 2).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());
    let result = repo.list_by_student(student.student_id).await?;

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|a| a.student_id == student.student_id));

    let ids: Vec<i32> = result.iter().map(|a| a.address_id).collect();
    let expected: Vec<i32> = addresses.iter().map(|a| a.address_id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing addresses of a student without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_student_without_addresses() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());

    assert!(repo.list_by_student(student.student_id).await?.is_empty());

    Ok(())
}

/// Tests that addresses disappear once their student is deleted.
///
/// Expected: Ok with empty list after the cascade
#[tokio::test]
async fn returns_empty_after_student_deleted() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, _) = factory::helpers::create_student_with_addresses(db, 4).await?;

    let students = SeaOrmStudentRepository::new(db.clone());
    let loaded = students.get(student.student_id).await?.unwrap();
    students.delete(loaded).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());

    assert!(repo.list_by_student(student.student_id).await?.is_empty());

    Ok(())
}
