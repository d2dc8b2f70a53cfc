//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to every route handler. External
//! services sit behind trait objects so tests can substitute them.

use std::sync::Arc;

use sqlx::PgPool;

use crate::kernel::completion::BaseCompletionService;
use crate::kernel::fixtures::FixtureData;

#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// Generative-model client for summarization. A Noop implementation is
    /// installed when no API key is configured.
    pub completion: Arc<dyn BaseCompletionService>,
    /// Present only in dummy-data mode; read endpoints serve from here
    /// instead of the database.
    pub fixtures: Option<Arc<FixtureData>>,
    /// Directory for knowledge-base document uploads.
    pub upload_dir: std::path::PathBuf,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        completion: Arc<dyn BaseCompletionService>,
        fixtures: Option<Arc<FixtureData>>,
        upload_dir: std::path::PathBuf,
    ) -> Self {
        Self {
            db_pool,
            completion,
            fixtures,
            upload_dir,
        }
    }
}
