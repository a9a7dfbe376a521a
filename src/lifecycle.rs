//! Game lifecycle orchestration: reset, current game, status, and the
//! command entry points.

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::attack::{AttackCommand, AttackOutcome, AttackResolver};
use crate::board;
use crate::catalog::ShipType;
use crate::common::GameError;
use crate::config::GameConfig;
use crate::deploy::{DeployCommand, DeploymentValidator, Placement};
use crate::game::{Game, GameState, Shot};
use crate::repo::GameRepository;

/// Per-ship projection in a status view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipView {
    pub ship_type: ShipType,
    pub health: usize,
    pub cells: Vec<String>,
}

/// Snapshot of the current game: projections, the raw grid, and the
/// annotated board text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatusView {
    pub game_id: u64,
    pub ships: Vec<ShipView>,
    pub shots: Vec<Shot>,
    pub board: Vec<Vec<String>>,
    pub board_text: String,
    pub state: GameState,
}

/// Entry point for every engine command. Exactly one game is ever active;
/// the internal lock serializes each load-validate-save sequence so two
/// concurrent deploys cannot both pass validation against a stale ship
/// list.
pub struct GameService {
    repo: Arc<dyn GameRepository>,
    config: GameConfig,
    validator: DeploymentValidator,
    resolver: AttackResolver,
    write_lock: Mutex<()>,
}

impl GameService {
    pub fn new(repo: Arc<dyn GameRepository>, config: GameConfig) -> Self {
        Self {
            repo,
            config,
            validator: DeploymentValidator::new(config),
            resolver: AttackResolver::new(config),
            write_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Retire every NEW/IN_PROGRESS game and create a fresh one, returning
    /// its id. Finished games are never touched. Config rejection surfaces
    /// as `InvalidBoardConfig` and repository failures as `Storage`, so
    /// callers can tell the two "no game created" cases apart.
    pub async fn reset(&self) -> Result<u64, GameError> {
        // Generating the board also validates the 26-cap on dimensions.
        let grid = board::generate(self.config.board_width, self.config.board_height)?;

        let _guard = self.write_lock.lock().await;
        let retired = self.repo.mark_games_abandoned().await?;
        if retired > 0 {
            info!("reset: abandoned {} unfinished game(s)", retired);
        }
        let game = self.repo.create_game(grid).await?;
        info!("reset: created game {}", game.id);
        Ok(game.id)
    }

    /// The most recently created game, regardless of state.
    pub async fn current_game(&self) -> Result<Game, GameError> {
        self.repo
            .find_latest_game()
            .await?
            .ok_or(GameError::NoActiveGame)
    }

    /// Deploy one ship on the current game.
    pub async fn deploy(&self, cmd: &DeployCommand) -> Result<Placement, GameError> {
        let _guard = self.write_lock.lock().await;
        let mut game = self.current_game().await?;
        let placement = self.validator.deploy(&mut game, cmd)?;
        self.repo.save_game(&game).await?;
        Ok(placement)
    }

    /// Attack one coordinate on the current game.
    pub async fn attack(&self, cmd: &AttackCommand) -> Result<AttackOutcome, GameError> {
        let _guard = self.write_lock.lock().await;
        let mut game = self.current_game().await?;
        let outcome = self.resolver.resolve(&mut game, cmd)?;
        self.repo.save_game(&game).await?;
        if game.state == GameState::GameOver {
            warn!("game {} is over", game.id);
        }
        Ok(outcome)
    }

    /// Derived view of the current game. Pure read, no mutation.
    pub async fn status(&self) -> Result<GameStatusView, GameError> {
        let game = self.current_game().await?;
        let board_text = board::render(&game.board, &game.ship_cells(), &game.shot_cells());
        Ok(GameStatusView {
            game_id: game.id,
            ships: game
                .ships
                .iter()
                .map(|s| ShipView {
                    ship_type: s.ship_type,
                    health: s.health,
                    cells: s.cells.clone(),
                })
                .collect(),
            shots: game.shots.clone(),
            board: game.board.clone(),
            board_text,
            state: game.state,
        })
    }
}
