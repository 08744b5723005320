use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::accounts::services::AccountService;
use crate::accounts::store::{CredentialStore, PgCredentialStore};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
}

impl AppState {
    /// Open the process-wide credential store and wire up the account flows.
    ///
    /// The pool connects lazily: a database that is down at boot does not
    /// stop the process, requests fail individually until it comes back.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(&config.database_url)
            .context("parse database url")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
            tracing::warn!(error = %e, "migration failed; continuing with the existing schema");
        }

        Ok(Self::from_store(Arc::new(PgCredentialStore::new(pool))))
    }

    pub fn from_store(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            accounts: AccountService::new(store),
        }
    }
}
