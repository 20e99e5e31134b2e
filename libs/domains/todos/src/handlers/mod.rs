mod todos;

use axum::{
    Router,
    routing::{get, patch},
};
use axum_helpers::ErrorResponse;
use axum_helpers::errors::handlers::method_not_allowed;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(
        todos::list_todos,
        todos::create_todo,
        todos::update_todo,
        todos::delete_todo,
    ),
    components(
        schemas(Todo, CreateTodoRequest, UpdateTodoRequest, ErrorResponse)
    ),
    tags(
        (name = "todos", description = "Todo list operations")
    )
)]
pub struct TodosApiDoc;

/// Router for `/api/todos`
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/{id}",
            patch(todos::update_todo).delete(todos::delete_todo),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::models::{NewTodo, UpdateTodo};
    use crate::repository::MockTodoRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Utc};
    use http_body_util::BodyExt;
    use mockall::predicate;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn created_at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-05-04T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn todo(id: i32, title: &str, done: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            done,
            created_at: created_at(),
        }
    }

    fn app(repo: MockTodoRepository) -> Router {
        router(TodoService::new(repo))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_returns_todos_as_json_array() {
        let mut repo = MockTodoRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![todo(2, "B", true), todo(1, "A", false)]));

        let response = app(repo).oneshot(empty_request("GET", "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(
            body,
            json!([
                { "id": 2, "title": "B", "done": true, "created_at": "2026-05-04T12:30:00Z" },
                { "id": 1, "title": "A", "done": false, "created_at": "2026-05-04T12:30:00Z" }
            ])
        );
    }

    #[tokio::test]
    async fn test_create_returns_201_with_row() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create()
            .with(predicate::eq(NewTodo {
                title: "buy milk".to_string(),
            }))
            .returning(|input| Ok(todo(1, &input.title, false)));

        let response = app(repo)
            .oneshot(json_request("POST", "/", r#"{"title":" buy milk "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["title"], "buy milk");
        assert_eq!(body["done"], false);
        assert!(body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_blank_title_is_400_without_store_access() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create().never();

        let response = app(repo)
            .oneshot(json_request("POST", "/", r#"{"title":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "title required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let mut repo = MockTodoRepository::new();
        repo.expect_create().never();

        let response = app(repo)
            .oneshot(json_request("POST", "/", r#"{"title": "#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INVALID_JSON");
    }

    #[tokio::test]
    async fn test_patch_done_only() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update()
            .with(
                predicate::eq(3),
                predicate::eq(UpdateTodo {
                    title: None,
                    done: Some(true),
                }),
            )
            .returning(|id, _| Ok(Some(todo(id, "walk dog", true))));

        let response = app(repo)
            .oneshot(json_request("PATCH", "/3", r#"{"done":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["done"], true);
        assert_eq!(body["title"], "walk dog");
    }

    #[tokio::test]
    async fn test_patch_validation_messages() {
        for (payload, expected) in [
            ("{}", "nothing to update"),
            (r#"{"title":"  "}"#, "title cannot be empty"),
            (r#"{"done":"yes"}"#, "done must be boolean"),
        ] {
            let mut repo = MockTodoRepository::new();
            repo.expect_update().never();

            let response = app(repo)
                .oneshot(json_request("PATCH", "/1", payload))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");
            let body = json_body(response.into_body()).await;
            assert_eq!(body["message"], expected);
        }
    }

    #[tokio::test]
    async fn test_invalid_id_is_400() {
        for uri in ["/abc", "/0", "/-3"] {
            let mut repo = MockTodoRepository::new();
            repo.expect_delete().never();

            let response = app(repo)
                .oneshot(empty_request("DELETE", uri))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body = json_body(response.into_body()).await;
            assert_eq!(body["message"], "invalid id");
        }
    }

    #[tokio::test]
    async fn test_id_past_i32_range_is_404_without_store_access() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update().never();

        let response = app(repo)
            .oneshot(json_request("PATCH", "/99999999999", r#"{"done":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_patch_missing_row_is_404() {
        let mut repo = MockTodoRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let response = app(repo)
            .oneshot(json_request("PATCH", "/99", r#"{"title":"x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "todo not found");
    }

    #[tokio::test]
    async fn test_delete_returns_204_with_empty_body() {
        let mut repo = MockTodoRepository::new();
        repo.expect_delete()
            .with(predicate::eq(7))
            .returning(|_| Ok(true));

        let response = app(repo)
            .oneshot(empty_request("DELETE", "/7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_404() {
        let mut repo = MockTodoRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let response = app(repo)
            .oneshot(empty_request("DELETE", "/7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let mut repo = MockTodoRepository::new();
        repo.expect_list().returning(|| {
            Err(TodoError::Database(
                "relation \"todos\" does not exist".to_string(),
            ))
        });

        let response = app(repo).oneshot(empty_request("GET", "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "internal server error");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let repo = MockTodoRepository::new();

        let response = app(repo).oneshot(empty_request("PUT", "/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_openapi_lists_todo_paths() {
        let doc = TodosApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.iter().any(|p| p.is_empty() || p == "/"));
        assert!(paths.iter().any(|p| p == "/{id}"));
    }
}
