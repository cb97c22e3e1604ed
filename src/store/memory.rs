use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GameStore, Lookup, StoreResult};
use crate::models::Game;

/// In-process store backend.
///
/// Backs the test suite and local development where no Spanner emulator is
/// available. A write holds the table lock for one HashMap operation, which
/// gives the same single-key last-write-wins behavior as the real backend.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<RwLock<HashMap<Uuid, Game>>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn get(&self, id: Uuid) -> BoxFuture<'static, StoreResult<Lookup>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let lookup = match games.read().await.get(&id) {
                Some(game) => Lookup::Found(game.clone()),
                None => Lookup::NotFound,
            };
            Ok(lookup)
        })
    }

    fn put(&self, game: Game) -> BoxFuture<'static, StoreResult<Uuid>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let id = game.id;
            games.write().await.insert(id, game);
            Ok(id)
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'static, StoreResult<()>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            games.write().await.remove(&id);
            Ok(())
        })
    }

    fn scan(&self) -> BoxFuture<'static, StoreResult<Vec<Game>>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let mut all: Vec<Game> = games.read().await.values().cloned().collect();
            all.sort_by_key(|game| game.id);
            Ok(all)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
