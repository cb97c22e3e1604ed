use crate::error::{ApiError, ErrorResponse};
use crate::models::Game;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /game handler - List all Game records
///
/// A full-table scan with no filtering or pagination; the expected record
/// count is tiny.
#[utoipa::path(
    get,
    path = "/game",
    responses(
        (status = 200, description = "All games", body = [Game]),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "game"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Game>>), ApiError> {
    let games = state.store.scan().await?;

    tracing::info!("Listed {} games", games.len());
    Ok((StatusCode::OK, Json(games)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, StoreBackend};
    use crate::models::GameDraft;
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

    #[tokio::test]
    async fn list_endpoint_empty_store() {
        let (app, _store) = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/game")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let games: Vec<Game> = serde_json::from_slice(&body).unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn list_endpoint_returns_every_record() {
        let (app, store) = setup_test_app();

        for title in ["Chess", "Go", "Shogi"] {
            let game = GameDraft {
                title: title.to_string(),
                description: "Abstract strategy game".to_string(),
                author: "Unknown".to_string(),
                tags: vec![],
            }
            .into_game();
            store.put(game).await.unwrap();
        }

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/game")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let games: Vec<Game> = serde_json::from_slice(&body).unwrap();
        assert_eq!(games.len(), 3);

        let mut titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["Chess", "Go", "Shogi"]);
    }
}
