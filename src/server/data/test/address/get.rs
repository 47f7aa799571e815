use super::*;

/// Tests getting an existing address by ID.
///
/// Expected: Ok(Some(address))
#[tokio::test]
async fn gets_existing_address() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let address = factory::address::AddressFactory::new(db, student.student_id)
        .city("Wellington")
        .build()
        .await?;

    let repo = SeaOrmAddressRepository::new(db.clone());
    let result = repo.get(address.address_id).await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.address_id, address.address_id);
    assert_eq!(result.city, "Wellington");

    Ok(())
}

/// Tests getting an address that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_address() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAddressRepository::new(db.clone());
    let result = repo.get(999999).await?;

    assert!(result.is_none());
    assert!(!repo.exists(999999).await?);

    Ok(())
}
