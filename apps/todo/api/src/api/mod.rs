use axum::Router;

pub mod health;
pub mod todos;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/todos", todos::router(state))
}

/// Creates a router with the /ready endpoint that probes the database.
///
/// Passed to `create_router` as a top-level route next to `/health`.
pub fn ready_router(db: database::postgres::DatabaseConnection) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}
