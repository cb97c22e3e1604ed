use crate::models::{Game, GameDraft};
use axum::{http::StatusCode, Json};

/// GET /game/Example handler - Fixed smoke-test record
///
/// Returns a canned Game without touching the store, as a quick probe of the
/// routing and serialization layers. A fresh id and date are assigned on
/// every call; nothing is persisted.
#[utoipa::path(
    get,
    path = "/game/Example",
    responses(
        (status = 200, description = "The example game", body = Game)
    ),
    tag = "game"
)]
pub async fn example_handler() -> (StatusCode, Json<Game>) {
    let game = GameDraft {
        title: "League Of Legends".to_string(),
        description: "A 2009 multiplayer online battle arena video game developed and \
                      published by Riot Games. Inspired by Defense of the Ancients, a \
                      custom map for Warcraft III, Riot's founders sought to develop a \
                      stand-alone game in the same genre."
            .to_string(),
        author: "Riot Games".to_string(),
        tags: Vec::new(),
    }
    .into_game();

    (StatusCode::OK, Json(game))
}
