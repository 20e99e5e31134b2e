use axum::Router;
use domain_todos::{PgTodoRepository, TodoService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgTodoRepository::new(state.db.clone());
    let service = TodoService::new(repository);
    handlers::router(service)
}
