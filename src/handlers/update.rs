use crate::error::{ApiError, ErrorResponse};
use crate::models::{Game, GameDraft};
use crate::state::AppState;
use crate::store::Lookup;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// PATCH /game/:id handler - Replace the writable fields of a Game
///
/// The target must already exist. The stored `id` and `creationDate` always
/// win over anything in the payload; every other field is overwritten.
#[utoipa::path(
    patch,
    path = "/game/{id}",
    params(
        ("id" = String, Path, description = "UUID of the game")
    ),
    request_body = GameDraft,
    responses(
        (status = 200, description = "The persisted game after the update", body = Game),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "No game exists under the id", body = ErrorResponse),
        (status = 422, description = "Missing or malformed payload fields"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "game"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(draft): Json<GameDraft>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let existing = match state.store.get(id).await? {
        Lookup::Found(game) => game,
        Lookup::NotFound => return Err(ApiError::GameNotFound(id)),
    };

    let updated = draft.into_update_of(&existing);
    state.store.put(updated.clone()).await?;

    tracing::info!("Updated game with id: {}", id);
    Ok((StatusCode::OK, Json(updated)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, StoreBackend};
    use crate::store::memory::MemoryGameStore;
    use crate::store::GameStore;
    use axum::{body::Body, http::Request, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, MemoryGameStore) {
        let store = MemoryGameStore::new();
        let state = AppState {
            store: Arc::new(store.clone()),
            config: Arc::new(Config {
                store_backend: StoreBackend::Memory,
                spanner: None,
                service_port: 3000,
                service_host: "0.0.0.0".to_string(),
            }),
        };
        (crate::routes::router(state), store)
    }

    fn sample_game() -> Game {
        GameDraft {
            title: "Chess".to_string(),
            description: "Abstract strategy game".to_string(),
            author: "Unknown".to_string(),
            tags: vec!["board".to_string()],
        }
        .into_game()
    }

    #[tokio::test]
    async fn update_endpoint_preserves_identity_fields() {
        let (app, store) = setup_test_app();
        let original = sample_game();
        store.put(original.clone()).await.unwrap();

        let payload = serde_json::json!({
            "title": "Chess v2",
            "description": "Abstract strategy game",
            "author": "Unknown",
            "tags": ["board", "classic"],
            // Client attempts to move the identity fields; both are ignored.
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "creationDate": "1999-01-01"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/game/{}", original.id))
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: Game = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.creation_date, original.creation_date);
        assert_eq!(updated.title, "Chess v2");
        assert_eq!(updated.tags, vec!["board", "classic"]);

        // The persisted record matches the response.
        assert_eq!(
            store.get(original.id).await.unwrap(),
            crate::store::Lookup::Found(updated)
        );
    }

    #[tokio::test]
    async fn update_endpoint_nonexistent_id_is_404() {
        let (app, _store) = setup_test_app();

        let payload = serde_json::json!({
            "title": "Chess v2",
            "description": "Abstract strategy game",
            "author": "Unknown"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/game/{}", Uuid::new_v4()))
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: crate::error::ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("Game not found"));
    }

    #[tokio::test]
    async fn update_endpoint_invalid_uuid() {
        let (app, _store) = setup_test_app();

        let payload = serde_json::json!({
            "title": "Chess v2",
            "description": "Abstract strategy game",
            "author": "Unknown"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/game/not-a-uuid")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
