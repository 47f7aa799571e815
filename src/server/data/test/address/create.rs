use super::*;

/// Tests creating an address for an existing student.
///
/// Expected: Ok with address created and linked to the student
#[tokio::test]
async fn creates_address() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());
    let address = repo.create(create_param(student.student_id)).await?;

    assert!(address.address_id > 0);
    assert_eq!(address.student_id, student.student_id);
    assert_eq!(address.street, "Symonds Street");
    assert_eq!(address.post_code, 1010);

    let fetched = repo.get(address.address_id).await?.unwrap();
    assert_eq!(fetched, address);

    Ok(())
}

/// Tests creating an address for a student that doesn't exist.
///
/// Verifies that the foreign key rejection from the store is classified as a
/// constraint violation rather than a transport failure.
///
/// Expected: Err(ConstraintViolation)
#[tokio::test]
async fn fails_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAddressRepository::new(db.clone());
    let result = repo.create(create_param(999999)).await;

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let count = entity::prelude::Address::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that a negative post code is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_negative_post_code() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());
    let mut param = create_param(student.student_id);
    param.post_code = -1;
    let result = repo.create(param).await;

    assert!(matches!(result, Err(RepositoryError::Validation(_))));

    Ok(())
}

/// Tests that a blank street is rejected.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_blank_street() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());
    let mut param = create_param(student.student_id);
    param.street = "   ".to_string();
    let result = repo.create(param).await;

    assert!(matches!(result, Err(RepositoryError::Validation(_))));

    Ok(())
}
