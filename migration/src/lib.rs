pub use sea_orm_migration::prelude::*;

mod m20200721_000001_create_student_table;
mod m20200721_000002_create_address_table;
mod m20200724_000003_create_address_student_id_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20200721_000001_create_student_table::Migration),
            Box::new(m20200721_000002_create_address_table::Migration),
            Box::new(m20200724_000003_create_address_student_id_index::Migration),
        ]
    }
}
