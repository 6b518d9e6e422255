pub use sea_orm_migration::prelude::*;

mod m20260301_090000_create_catalog_tables;
mod m20260301_091500_create_practice_tables;
mod m20260301_093000_create_progress_and_bookmarks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_090000_create_catalog_tables::Migration),
            Box::new(m20260301_091500_create_practice_tables::Migration),
            Box::new(m20260301_093000_create_progress_and_bookmarks::Migration),
        ]
    }
}
