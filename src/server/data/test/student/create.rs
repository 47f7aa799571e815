use super::*;

/// Tests creating a new student.
///
/// Verifies that the repository inserts the student, assigns a non-zero ID and stamps
/// the creation time.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmStudentRepository::new(db.clone());
    let student = repo.create(create_param("Ada", "Lovelace")).await?;

    assert!(student.student_id > 0);
    assert_eq!(student.first_name, "Ada");
    assert_eq!(student.last_name, "Lovelace");
    assert!(student.time_created <= chrono::Utc::now());

    Ok(())
}

/// Tests that a created student reads back identically.
///
/// Expected: get(create(x).id) returns the same field values as x
#[tokio::test]
async fn created_student_reads_back_unchanged() -> Result<(), RepositoryError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmStudentRepository::new(db.clone());
    let param = CreateStudentParam {
        first_name: "Grace".to_string(),
        middle_name: Some("Brewster".to_string()),
        last_name: "Hopper".to_string(),
        email_address: Some("grace@example.com".to_string()),
        phone_number: Some("0064211234".to_string()),
    };
    let created = repo.create(param.clone()).await?;

    let fetched = repo.get(created.student_id).await?.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.first_name, param.first_name);
    assert_eq!(fetched.middle_name, param.middle_name);
    assert_eq!(fetched.last_name, param.last_name);
    assert_eq!(fetched.email_address, param.email_address);
    assert_eq!(fetched.phone_number.as_deref(), Some("0064211234"));

    Ok(())
}

/// Tests that invalid students are rejected before reaching the database.
///
/// Expected: Err(Validation) and no row inserted
#[tokio::test]
async fn rejects_invalid_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmStudentRepository::new(db.clone());
    let result = repo.create(create_param("", "Lovelace")).await;

    assert!(matches!(result, Err(RepositoryError::Validation(_))));

    let count = entity::prelude::Student::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
