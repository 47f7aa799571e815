use crate::server::{
    data::student::{SeaOrmStudentRepository, StudentRepository},
    error::repository::RepositoryError,
    model::student::{CreateStudentParam, UpdateStudentParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;

fn create_param(first_name: &str, last_name: &str) -> CreateStudentParam {
    CreateStudentParam {
        first_name: first_name.to_string(),
        middle_name: None,
        last_name: last_name.to_string(),
        email_address: None,
        phone_number: None,
    }
}
