use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod dto;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;

pub use error::{Result, StorageError};
pub use memory::InMemoryStore;
pub use repository::TournamentStore;

/// Connection pool handle for the PostgreSQL store
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
