use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateResponse, GameDraft};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /game handler - Create a Game record
///
/// The payload carries only the writable fields; the service assigns the id
/// and creation date before persisting.
#[utoipa::path(
    post,
    path = "/game",
    request_body = GameDraft,
    responses(
        (status = 201, description = "Game created", body = CreateResponse),
        (status = 422, description = "Missing or malformed payload fields"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "game"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(draft): Json<GameDraft>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let game = draft.into_game();
    let id = state.store.put(game).await?;

    tracing::info!("Created game with id: {}", id);
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse { id: id.to_string() }),
    ))
}
