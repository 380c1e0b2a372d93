pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_designer_profiles_table;
mod m20250301_000003_create_works_table;
mod m20250301_000004_create_category_tag_tables;
mod m20250301_000005_create_comments_table;
mod m20250301_000006_create_work_views_table;
mod m20250308_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_designer_profiles_table::Migration),
            Box::new(m20250301_000003_create_works_table::Migration),
            Box::new(m20250301_000004_create_category_tag_tables::Migration),
            Box::new(m20250301_000005_create_comments_table::Migration),
            Box::new(m20250301_000006_create_work_views_table::Migration),
            Box::new(m20250308_000001_add_indexes::Migration),
        ]
    }
}
