use super::*;

/// Tests getting an existing student by ID.
///
/// Expected: Ok(Some(student))
#[tokio::test]
async fn gets_existing_student() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student_named(db, "Ada").await?;

    let repo = SeaOrmStudentRepository::new(db.clone());
    let result = repo.get(student.student_id).await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.student_id, student.student_id);
    assert_eq!(result.first_name, "Ada");

    Ok(())
}

/// Tests getting a student that doesn't exist.
///
/// Expected: Ok(None), not an error
#[tokio::test]
async fn returns_none_for_nonexistent_student() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmStudentRepository::new(db.clone());
    let result = repo.get(999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the existence check for present and absent students.
///
/// Expected: true for the created student, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmStudentRepository::new(db.clone());

    assert!(repo.exists(student.student_id).await?);
    assert!(!repo.exists(student.student_id + 1).await?);

    Ok(())
}
