//! Startup sequence: wait for the store, create the schema, then serve.
//!
//! ```text
//! WaitingForStore ──probe ok──▶ SchemaPending ──schema ok──▶ Serving
//!        │                             │
//!        └── attempts exhausted ──▶ fatal ◀── schema error ──┘
//! ```

use database::DatabaseError;
use database::RetryConfig;
use database::postgres::wait_until_ready;
use domain_todos::ensure_schema;
use sea_orm::{DatabaseConnection, DbErr};
use std::fmt;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    WaitingForStore,
    SchemaPending,
    Serving,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapState::WaitingForStore => "waiting_for_store",
            BootstrapState::SchemaPending => "schema_pending",
            BootstrapState::Serving => "serving",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database never became ready: {0}")]
    StoreUnreachable(#[source] DatabaseError),

    #[error("schema bootstrap failed: {0}")]
    Schema(#[source] DbErr),
}

impl BootstrapError {
    /// State the sequence was in when it failed
    pub fn state(&self) -> BootstrapState {
        match self {
            BootstrapError::StoreUnreachable(_) => BootstrapState::WaitingForStore,
            BootstrapError::Schema(_) => BootstrapState::SchemaPending,
        }
    }
}

fn enter(state: BootstrapState) -> BootstrapState {
    info!(state = %state, "Bootstrap state");
    state
}

/// Walk the startup states. Returns [`BootstrapState::Serving`] only when the
/// store answered a probe and the schema exists.
pub async fn prepare(
    db: &DatabaseConnection,
    retry: &RetryConfig,
) -> Result<BootstrapState, BootstrapError> {
    enter(BootstrapState::WaitingForStore);
    wait_until_ready(db, retry).await.map_err(|e| {
        error!(error = %e, "Giving up on the database");
        BootstrapError::StoreUnreachable(e)
    })?;

    enter(BootstrapState::SchemaPending);
    ensure_schema(db).await.map_err(|e| {
        error!(error = %e, "Could not create the todos schema");
        BootstrapError::Schema(e)
    })?;

    Ok(enter(BootstrapState::Serving))
}
