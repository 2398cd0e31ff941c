pub mod submissions;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::config::DbSettings;
use crate::error::StoreError;
use crate::models::{NewSubmission, Submission};

/// The only path between request handlers and stored submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store one submission and return the identity the store assigned to it.
    async fn insert(&self, submission: &NewSubmission) -> Result<Uuid, StoreError>;

    /// Fetch every stored submission. No filtering, sorting or paging.
    async fn find_all(&self) -> Result<Vec<Submission>, StoreError>;

    /// Release the underlying connection. Called once after the server stops.
    async fn close(&self) {}
}

/// Postgres-backed store. The `submissions` table plays the role of the collection.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open the pool and apply the embedded migrations. Fails if the database
    /// cannot be reached within `settings.connect_timeout`.
    pub async fn connect(settings: &DbSettings) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.connect_timeout)
            .connect(&settings.url)
            .await
            .map_err(StoreError::Connect)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StoreError::Migrate)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<Uuid, StoreError> {
        submissions::create(&self.pool, submission)
            .await
            .map_err(StoreError::Write)
    }

    async fn find_all(&self) -> Result<Vec<Submission>, StoreError> {
        submissions::list_all(&self.pool)
            .await
            .map_err(StoreError::Read)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
