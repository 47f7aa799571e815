//! Address data repository for database operations
//!
//! Provides the `AddressRepository` trait and its SeaORM implementation. Besides the
//! per-record operations it lists the addresses belonging to one student.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::repository::RepositoryError,
    model::address::{Address, CreateAddressParam, UpdateAddressParam},
};

/// Persistence operations over address records.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Gets every address ordered by ID
    async fn list(&self) -> Result<Vec<Address>, RepositoryError>;

    /// Gets the addresses of one student ordered by ID
    ///
    /// Returns an empty list when the student has no addresses or does not exist.
    async fn list_by_student(&self, student_id: i32) -> Result<Vec<Address>, RepositoryError>;

    /// Finds an address by ID
    ///
    /// # Returns
    /// - `Ok(Some(Address))` - The requested address if found
    /// - `Ok(None)` - The requested address does not exist
    /// - `Err(RepositoryError::Transport)` - Database error during lookup
    async fn get(&self, address_id: i32) -> Result<Option<Address>, RepositoryError>;

    /// Checks whether an address with the given ID exists
    async fn exists(&self, address_id: i32) -> Result<bool, RepositoryError>;

    /// Inserts a new address, stamping its creation time
    ///
    /// # Returns
    /// - `Ok(Address)` - The stored address including its assigned ID
    /// - `Err(RepositoryError::Validation)` - The parameters break a field rule
    /// - `Err(RepositoryError::ConstraintViolation)` - The student does not exist
    /// - `Err(RepositoryError::Transport)` - Database error during insert
    async fn create(&self, param: CreateAddressParam) -> Result<Address, RepositoryError>;

    /// Replaces every mutable field of an existing address
    ///
    /// # Returns
    /// - `Ok(Address)` - The updated address
    /// - `Err(RepositoryError::Validation)` - The parameters break a field rule
    /// - `Err(RepositoryError::NotFound)` - No address has the given ID
    /// - `Err(RepositoryError::ConstraintViolation)` - The new student does not exist
    /// - `Err(RepositoryError::Transport)` - Database error during update
    async fn update(&self, param: UpdateAddressParam) -> Result<Address, RepositoryError>;

    /// Deletes a previously loaded address
    async fn delete(&self, address: Address) -> Result<(), RepositoryError>;
}

/// SeaORM implementation of [`AddressRepository`].
#[derive(Clone)]
pub struct SeaOrmAddressRepository {
    db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn list(&self) -> Result<Vec<Address>, RepositoryError> {
        let addresses = entity::prelude::Address::find()
            .order_by_asc(entity::address::Column::AddressId)
            .all(&self.db)
            .await?;

        Ok(addresses.into_iter().map(Address::from_entity).collect())
    }

    async fn list_by_student(&self, student_id: i32) -> Result<Vec<Address>, RepositoryError> {
        let addresses = entity::prelude::Address::find()
            .filter(entity::address::Column::StudentId.eq(student_id))
            .order_by_asc(entity::address::Column::AddressId)
            .all(&self.db)
            .await?;

        Ok(addresses.into_iter().map(Address::from_entity).collect())
    }

    async fn get(&self, address_id: i32) -> Result<Option<Address>, RepositoryError> {
        let address = entity::prelude::Address::find_by_id(address_id)
            .one(&self.db)
            .await?;

        Ok(address.map(Address::from_entity))
    }

    async fn exists(&self, address_id: i32) -> Result<bool, RepositoryError> {
        let count = entity::prelude::Address::find()
            .filter(entity::address::Column::AddressId.eq(address_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, param: CreateAddressParam) -> Result<Address, RepositoryError> {
        param.validate()?;

        let address = entity::address::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            street_number: ActiveValue::Set(param.street_number),
            street: ActiveValue::Set(param.street),
            suburb: ActiveValue::Set(param.suburb),
            city: ActiveValue::Set(param.city),
            post_code: ActiveValue::Set(param.post_code),
            country: ActiveValue::Set(param.country),
            time_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::debug!(
            "Inserted address {} for student {}",
            address.address_id,
            address.student_id
        );

        Ok(Address::from_entity(address))
    }

    async fn update(&self, param: UpdateAddressParam) -> Result<Address, RepositoryError> {
        param.validate()?;

        let address = entity::prelude::Address::find_by_id(param.address_id)
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound {
                entity: "Address",
                id: param.address_id,
            })?;

        let mut active_model: entity::address::ActiveModel = address.into();
        active_model.student_id = ActiveValue::Set(param.student_id);
        active_model.street_number = ActiveValue::Set(param.street_number);
        active_model.street = ActiveValue::Set(param.street);
        active_model.suburb = ActiveValue::Set(param.suburb);
        active_model.city = ActiveValue::Set(param.city);
        active_model.post_code = ActiveValue::Set(param.post_code);
        active_model.country = ActiveValue::Set(param.country);

        let address = active_model.update(&self.db).await?;

        Ok(Address::from_entity(address))
    }

    async fn delete(&self, address: Address) -> Result<(), RepositoryError> {
        let result = entity::prelude::Address::delete_by_id(address.address_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Address",
                id: address.address_id,
            });
        }

        Ok(())
    }
}
