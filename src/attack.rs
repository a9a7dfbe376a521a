//! Attack resolution: hit/miss/sink/game-over over a persisted game.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board;
use crate::catalog::ShipType;
use crate::common::GameError;
use crate::config::GameConfig;
use crate::game::{Game, GameState, Shot, ShotResult};

/// Request to attack one coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackCommand {
    pub coordinate: String,
}

/// Caller-facing attack result. `Sink` refines a hit that emptied a
/// ship's health; the persisted shot still records a plain hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResult {
    Hit,
    Miss,
    Sink,
}

/// Outcome of a resolved attack. `message` is set only on a sink
/// ("You just sank the <type>") or on game over (the literal "GAME_OVER").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub result: AttackResult,
    pub message: Option<String>,
}

/// Validates attack commands against a game and commits the shot.
pub struct AttackResolver {
    config: GameConfig,
}

impl AttackResolver {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Attacking is disallowed until every type reaches its exact quota.
    fn fleet_complete(&self, game: &Game) -> bool {
        ShipType::ALL
            .iter()
            .all(|&t| game.count_of(t) == self.config.fleet.max_count(t))
    }

    /// Resolve one attack. Fails fast with no mutation: readiness, fleet
    /// completeness, bounds, repeat shot. On acceptance the shot is
    /// appended, the target ship's health decremented, and the game state
    /// flipped to game-over when the last ship sinks.
    pub fn resolve(&self, game: &mut Game, cmd: &AttackCommand) -> Result<AttackOutcome, GameError> {
        if game.state != GameState::InProgress {
            return Err(GameError::GameNotReady);
        }
        if !self.fleet_complete(game) {
            warn!(
                "attack: fleet incomplete, {} of {} ships deployed",
                game.ships.len(),
                self.config.fleet.total_ships()
            );
            return Err(GameError::GameNotReady);
        }

        let board_1d = board::flatten(&game.board);
        if !board_1d.contains(&cmd.coordinate) {
            warn!("attack: coordinate {} is outside the board", cmd.coordinate);
            return Err(GameError::InvalidAttackCoordinate);
        }
        if game.shots.iter().any(|s| s.coordinate == cmd.coordinate) {
            warn!("attack: coordinate {} already attacked", cmd.coordinate);
            return Err(GameError::InvalidAttackCoordinate);
        }

        // First ship in deployment order containing the coordinate takes
        // the hit; buffers keep ships from sharing cells.
        let mut hit_ship: Option<usize> = None;
        for (i, ship) in game.ships.iter_mut().enumerate() {
            if ship.cells.contains(&cmd.coordinate) {
                ship.health -= 1;
                hit_ship = Some(i);
                break;
            }
        }

        let shot_result = if hit_ship.is_some() {
            ShotResult::Hit
        } else {
            ShotResult::Miss
        };
        game.shots.push(Shot {
            coordinate: cmd.coordinate.clone(),
            result: shot_result,
        });

        let mut result = match shot_result {
            ShotResult::Hit => AttackResult::Hit,
            ShotResult::Miss => AttackResult::Miss,
        };
        let mut message = None;

        if let Some(i) = hit_ship {
            let ship_type = game.ships[i].ship_type;
            if game.ships[i].is_sunk() {
                info!("attack: {} was just sunk", ship_type);
                result = AttackResult::Sink;
                message = Some(format!("You just sank the {ship_type}"));

                // Only a sink can end the game.
                if game.total_health() == 0 {
                    warn!("attack: game over");
                    game.state = GameState::GameOver;
                    message = Some("GAME_OVER".to_string());
                }
            }
        }

        Ok(AttackOutcome { result, message })
    }
}
