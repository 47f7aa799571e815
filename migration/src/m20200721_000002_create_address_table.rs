use sea_orm_migration::{prelude::*, schema::*};

use super::m20200721_000001_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::AddressId))
                    .col(integer(Address::StudentId))
                    .col(integer(Address::StreetNumber))
                    .col(string(Address::Street))
                    .col(string(Address::Suburb))
                    .col(string(Address::City))
                    .col(integer(Address::PostCode))
                    .col(string(Address::Country))
                    .col(
                        timestamp_with_time_zone(Address::TimeCreated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_student_id")
                            .from(Address::Table, Address::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    AddressId,
    StudentId,
    StreetNumber,
    Street,
    Suburb,
    City,
    PostCode,
    Country,
    TimeCreated,
}
