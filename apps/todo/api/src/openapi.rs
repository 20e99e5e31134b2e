use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(axum_helpers::server::health::health_handler),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "API for managing a persisted todo list"
    ),
    nest(
        (path = "/api/todos", api = domain_todos::TodosApiDoc)
    )
)]
pub struct ApiDoc;
