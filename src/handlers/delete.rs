use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};
use uuid::Uuid;

/// DELETE /game/:id handler - Remove a Game record
///
/// Idempotent: deleting an id that was never stored, or was already deleted,
/// still succeeds.
#[utoipa::path(
    delete,
    path = "/game/{id}",
    params(
        ("id" = String, Path, description = "UUID of the game")
    ),
    responses(
        (status = 200, description = "Game removed (or was already absent)"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "game"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    state.store.delete(id).await?;

    tracing::info!("Deleted game with id: {}", id);
    Ok(StatusCode::OK)
}
