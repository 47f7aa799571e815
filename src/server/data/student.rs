//! Student data repository for database operations
//!
//! Provides the `StudentRepository` trait and its SeaORM implementation for listing,
//! reading, creating, replacing and deleting students.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::repository::RepositoryError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

/// Persistence operations over student records.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Gets every student ordered by first name
    async fn list(&self) -> Result<Vec<Student>, RepositoryError>;

    /// Finds a student by ID
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The requested student if found
    /// - `Ok(None)` - The requested student does not exist
    /// - `Err(RepositoryError::Transport)` - Database error during lookup
    async fn get(&self, student_id: i32) -> Result<Option<Student>, RepositoryError>;

    /// Checks whether a student with the given ID exists
    async fn exists(&self, student_id: i32) -> Result<bool, RepositoryError>;

    /// Inserts a new student, stamping its creation time
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student including its assigned ID
    /// - `Err(RepositoryError::Validation)` - The parameters break a field rule
    /// - `Err(RepositoryError::ConstraintViolation)` - The store rejected the row
    /// - `Err(RepositoryError::Transport)` - Database error during insert
    async fn create(&self, param: CreateStudentParam) -> Result<Student, RepositoryError>;

    /// Replaces every mutable field of an existing student
    ///
    /// The creation time is kept as stored.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(RepositoryError::Validation)` - The parameters break a field rule
    /// - `Err(RepositoryError::NotFound)` - No student has the given ID
    /// - `Err(RepositoryError::Transport)` - Database error during update
    async fn update(&self, param: UpdateStudentParam) -> Result<Student, RepositoryError>;

    /// Deletes a previously loaded student
    ///
    /// The store cascades the delete to the student's addresses.
    ///
    /// # Returns
    /// - `Ok(())` - The student was deleted
    /// - `Err(RepositoryError::NotFound)` - The row was already gone
    /// - `Err(RepositoryError::ConstraintViolation)` - Another row blocks the delete
    /// - `Err(RepositoryError::Transport)` - Database error during delete
    async fn delete(&self, student: Student) -> Result<(), RepositoryError>;
}

/// SeaORM implementation of [`StudentRepository`].
#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    /// Creates a new SeaOrmStudentRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection pool, shared with other repositories
    ///
    /// # Returns
    /// - `SeaOrmStudentRepository` - new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, RepositoryError> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::FirstName)
            .all(&self.db)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    async fn get(&self, student_id: i32) -> Result<Option<Student>, RepositoryError> {
        let student = entity::prelude::Student::find_by_id(student_id)
            .one(&self.db)
            .await?;

        Ok(student.map(Student::from_entity))
    }

    async fn exists(&self, student_id: i32) -> Result<bool, RepositoryError> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentId.eq(student_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, param: CreateStudentParam) -> Result<Student, RepositoryError> {
        param.validate()?;

        let student = entity::student::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            middle_name: ActiveValue::Set(param.middle_name),
            last_name: ActiveValue::Set(param.last_name),
            email_address: ActiveValue::Set(param.email_address),
            phone_number: ActiveValue::Set(param.phone_number),
            time_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::debug!("Inserted student {}", student.student_id);

        Ok(Student::from_entity(student))
    }

    async fn update(&self, param: UpdateStudentParam) -> Result<Student, RepositoryError> {
        param.validate()?;

        let student = entity::prelude::Student::find_by_id(param.student_id)
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound {
                entity: "Student",
                id: param.student_id,
            })?;

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.first_name = ActiveValue::Set(param.first_name);
        active_model.middle_name = ActiveValue::Set(param.middle_name);
        active_model.last_name = ActiveValue::Set(param.last_name);
        active_model.email_address = ActiveValue::Set(param.email_address);
        active_model.phone_number = ActiveValue::Set(param.phone_number);

        let student = active_model.update(&self.db).await?;

        Ok(Student::from_entity(student))
    }

    async fn delete(&self, student: Student) -> Result<(), RepositoryError> {
        let result = entity::prelude::Student::delete_by_id(student.student_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Student",
                id: student.student_id,
            });
        }

        tracing::debug!("Deleted student {}", student.student_id);

        Ok(())
    }
}
