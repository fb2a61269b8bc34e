use sea_orm_migration::prelude::*;

/// Apply or roll back the schema by hand, e.g.
/// `DATABASE_URL=sqlite:sensorhub.db?mode=rwc cargo run -p migration -- up`
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    cli::run_cli(migration::Migrator).await;
}
