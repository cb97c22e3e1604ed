use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{CreateResponse, Game, GameDraft};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "game-api",
        version = "1.0.0",
        description = "A CRUD service for Game records backed by Google Cloud Spanner"
    ),
    paths(
        handlers::health::health_handler,
        handlers::example::example_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler,
        handlers::list::list_handler
    ),
    components(
        schemas(
            Game,
            GameDraft,
            CreateResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "game", description = "Game record operations")
    )
)]
pub struct ApiDoc;
