use super::*;

/// Tests listing every address across students.
///
/// Expected: Ok with all addresses ordered by address ID
#[tokio::test]
async fn lists_all_addresses_in_id_order() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_student_with_addresses(db, 2).await?;
    let (_, second) = factory::helpers::create_student_with_addresses(db, 2).await?;

    let repo = SeaOrmAddressRepository::new(db.clone());
    let addresses = repo.list().await?;

    let ids: Vec<i32> = addresses.iter().map(|a| a.address_id).collect();
    let mut expected: Vec<i32> = first
        .iter()
        .chain(second.iter())
        .map(|a| a.address_id)
        .collect();
    expected.sort();

    assert_eq!(ids, expected);

    Ok(())
}

/// Tests listing addresses on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_addresses() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAddressRepository::new(db.clone());

    assert!(repo.list().await?.is_empty());

    Ok(())
}
