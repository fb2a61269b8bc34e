pub use sea_orm_migration::prelude::*;

mod m20260301_000001_sensor_catalog;
mod m20260301_000002_inventory;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_sensor_catalog::Migration),
            Box::new(m20260301_000002_inventory::Migration),
        ]
    }
}
