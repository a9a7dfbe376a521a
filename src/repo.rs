//! Repository seam between the engine and durable storage.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use crate::game::{Game, GameState};

/// Storage contract consumed by the engine. Ships and shots live by value
/// inside [`Game`], so persisting a game persists its whole record.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// The most recently created game (highest id), regardless of state.
    async fn find_latest_game(&self) -> anyhow::Result<Option<Game>>;

    /// Transition every NEW/IN_PROGRESS game to ABANDONED; finished games
    /// are never touched. Returns the number of games retired.
    async fn mark_games_abandoned(&self) -> anyhow::Result<usize>;

    /// Persist a fresh game over `board`, assigning the next id.
    async fn create_game(&self, board: Vec<Vec<String>>) -> anyhow::Result<Game>;

    /// Persist state/ship/shot mutations of an existing game.
    async fn save_game(&self, game: &Game) -> anyhow::Result<()>;
}

/// In-memory repository backing the CLI, the sim and the tests.
#[derive(Default)]
pub struct InMemoryRepository {
    games: Mutex<Vec<Game>>,
}

impl InMemoryRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of every stored game, for assertions in tests.
    pub async fn all_games(&self) -> Vec<Game> {
        self.games.lock().await.clone()
    }

    /// Serialize the whole store for saving between runs.
    pub async fn export(&self) -> anyhow::Result<Vec<u8>> {
        let games = self.games.lock().await;
        Ok(bincode::serialize(&*games)?)
    }

    /// Rebuild a store from a previous [`export`](Self::export).
    pub fn import(bytes: &[u8]) -> anyhow::Result<Arc<Self>> {
        let games: Vec<Game> = bincode::deserialize(bytes)?;
        Ok(Arc::new(Self {
            games: Mutex::new(games),
        }))
    }
}

#[async_trait]
impl GameRepository for InMemoryRepository {
    async fn find_latest_game(&self) -> anyhow::Result<Option<Game>> {
        let games = self.games.lock().await;
        Ok(games.iter().max_by_key(|g| g.id).cloned())
    }

    async fn mark_games_abandoned(&self) -> anyhow::Result<usize> {
        let mut games = self.games.lock().await;
        let mut retired = 0;
        for game in games.iter_mut() {
            if matches!(game.state, GameState::New | GameState::InProgress) {
                game.state = GameState::Abandoned;
                retired += 1;
            }
        }
        debug!("repo: retired {} active game(s)", retired);
        Ok(retired)
    }

    async fn create_game(&self, board: Vec<Vec<String>>) -> anyhow::Result<Game> {
        let mut games = self.games.lock().await;
        let id = games.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let game = Game::new(id, board);
        games.push(game.clone());
        Ok(game)
    }

    async fn save_game(&self, game: &Game) -> anyhow::Result<()> {
        let mut games = self.games.lock().await;
        match games.iter_mut().find(|g| g.id == game.id) {
            Some(stored) => {
                *stored = game.clone();
                Ok(())
            }
            None => Err(anyhow::anyhow!("no stored game with id {}", game.id)),
        }
    }
}
