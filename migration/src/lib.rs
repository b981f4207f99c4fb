pub use sea_orm_migration::prelude::*;

mod m20250330_000001_create_tutoring_session_table;
mod m20250330_000002_create_session_student_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250330_000001_create_tutoring_session_table::Migration),
            Box::new(m20250330_000002_create_session_student_table::Migration),
        ]
    }
}
