use crate::error::{ApiError, ErrorResponse};
use crate::models::Game;
use crate::state::AppState;
use crate::store::Lookup;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// GET /game/:id handler - Retrieve a Game record
///
/// Absence is a valid empty result, not an error: the response is 200 with
/// JSON null when no record exists under the id.
#[utoipa::path(
    get,
    path = "/game/{id}",
    params(
        ("id" = String, Path, description = "UUID of the game")
    ),
    responses(
        (status = 200, description = "The game, or null when absent", body = Game),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "game"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Option<Game>>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let lookup = state.store.get(id).await?;
    match &lookup {
        Lookup::Found(_) => tracing::info!("Successfully retrieved game with id: {}", id),
        Lookup::NotFound => tracing::info!("Game not found with id: {}", id),
    }

    Ok((StatusCode::OK, Json(lookup.into_option())))
}
