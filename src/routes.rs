use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const GAME_COLLECTION: &str = "/game";
pub const GAME_EXAMPLE: &str = "/game/Example";
pub const GAME_ITEM: &str = "/game/{id}";

/// Assemble the application router: all endpoints, OpenAPI UI, and
/// per-request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(HEALTH, get(handlers::health_handler))
        .route(GAME_EXAMPLE, get(handlers::example_handler))
        .route(
            GAME_COLLECTION,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            GAME_ITEM,
            get(handlers::get_handler)
                .patch(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
