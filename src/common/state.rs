use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::books::BookRepository;

use super::database::{connect, StartupError};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub books: Arc<RwLock<BookRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            books: Arc::new(RwLock::new(BookRepository::new())),
        }
    }

    /// Connect to the configured database, bring the schema up to date and
    /// build the state around it.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] if the database cannot be opened or migrated.
    pub async fn initialize(config: Config) -> Result<Self, StartupError> {
        let db = connect(&config.database_url).await?;
        tracing::info!("Database connection established");

        migration::Migrator::up(&db, None).await?;
        tracing::info!("Migrations completed");

        Ok(Self::new(db, config))
    }
}
