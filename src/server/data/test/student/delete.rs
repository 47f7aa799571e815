use super::*;

/// Tests deleting a student.
///
/// Expected: Ok with student deleted
#[tokio::test]
async fn deletes_student() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmStudentRepository::new(db.clone());
    let loaded = repo.get(student.student_id).await?.unwrap();
    repo.delete(loaded).await?;

    assert!(!repo.exists(student.student_id).await?);

    Ok(())
}

/// Tests deleting a student cascades to its addresses.
///
/// Verifies that deleting a student with N addresses also deletes all N addresses
/// due to the CASCADE constraint.
///
/// Expected: Ok with student and addresses deleted
#[tokio::test]
async fn cascades_to_addresses() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, addresses) = factory::helpers::create_student_with_addresses(db, 3).await?;
    let (other, _) = factory::helpers::create_student_with_addresses(db, 1).await?;
    assert_eq!(addresses.len(), 3);

    let repo = SeaOrmStudentRepository::new(db.clone());
    let loaded = repo.get(student.student_id).await?.unwrap();
    repo.delete(loaded).await?;

    let remaining = entity::prelude::Address::find()
        .filter(entity::address::Column::StudentId.eq(student.student_id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let untouched = entity::prelude::Address::find()
        .filter(entity::address::Column::StudentId.eq(other.student_id))
        .count(db)
        .await?;
    assert_eq!(untouched, 1);

    Ok(())
}

/// Tests deleting a student that was already removed.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_when_student_already_deleted() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmStudentRepository::new(db.clone());
    let loaded = repo.get(student.student_id).await?.unwrap();
    repo.delete(loaded.clone()).await?;

    let result = repo.delete(loaded).await;

    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

    Ok(())
}
