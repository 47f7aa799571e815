use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::StudentId))
                    .col(string_len(Student::FirstName, 100))
                    .col(string_null(Student::MiddleName))
                    .col(string(Student::LastName))
                    .col(string_null(Student::EmailAddress))
                    .col(string_null(Student::PhoneNumber))
                    .col(
                        timestamp_with_time_zone(Student::TimeCreated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    StudentId,
    FirstName,
    MiddleName,
    LastName,
    EmailAddress,
    PhoneNumber,
    TimeCreated,
}
