use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted Game record.
///
/// `id` and `creation_date` are assigned exactly once, when the record is
/// first constructed from a [`GameDraft`], and never change afterwards.
/// Updates replace every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: String,
    /// Free-form labels; absent in a payload means empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO 8601 calendar date, e.g. "2026-08-06".
    pub creation_date: String,
}

/// The client-writable fields of a Game.
///
/// Create and update payloads deserialize through this type rather than
/// straight into [`Game`], so missing required fields are rejected before a
/// record is constructed and any client-supplied `id` or `creationDate` is
/// discarded.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GameDraft {
    /// Materialize a new record, assigning a fresh id and today's date.
    pub fn into_game(self) -> Game {
        Game {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            author: self.author,
            tags: self.tags,
            creation_date: today(),
        }
    }

    /// Materialize a record that replaces `existing`, keeping its identity
    /// fields.
    pub fn into_update_of(self, existing: &Game) -> Game {
        Game {
            id: existing.id,
            title: self.title,
            description: self.description,
            author: self.author,
            tags: self.tags,
            creation_date: existing.creation_date.clone(),
        }
    }
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

/// Response type for successful create operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateResponse {
    pub id: String,
}
