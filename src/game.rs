//! Persisted game records: the game itself, its ships and its shots.

use serde::{Deserialize, Serialize};

use crate::catalog::ShipType;

/// Lifecycle state of a game. `GameOver` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Created, no ship deployed yet.
    New,
    /// At least one ship deployed; playable.
    InProgress,
    /// Every ship sunk.
    GameOver,
    /// Retired by a later reset.
    Abandoned,
}

/// A deployed ship. `cells` and `blocked_cells` are fixed at deploy time;
/// only `health` mutates, one point per hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub ship_type: ShipType,
    /// Cells the ship occupies, in placement order.
    pub cells: Vec<String>,
    /// Precomputed 1-cell buffer around the ship; later placements are
    /// rejected by intersecting against this set instead of recomputing
    /// geometry per deploy.
    pub blocked_cells: Vec<String>,
    pub health: usize,
}

impl Ship {
    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }
}

/// Persisted outcome of a shot. Sinking is a resolver-level refinement of
/// a hit and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Hit,
    Miss,
}

/// One attack on one coordinate. Coordinates never repeat within a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub coordinate: String,
    pub result: ShotResult,
}

/// The full game record. Ships and shots are owned by value; the
/// repository persists the whole record at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub state: GameState,
    /// Grid of coordinate labels, generated once at creation.
    pub board: Vec<Vec<String>>,
    pub ships: Vec<Ship>,
    pub shots: Vec<Shot>,
}

impl Game {
    /// Fresh game over a generated board.
    pub fn new(id: u64, board: Vec<Vec<String>>) -> Self {
        Game {
            id,
            state: GameState::New,
            board,
            ships: Vec::new(),
            shots: Vec::new(),
        }
    }

    /// Whether the game still accepts deploys.
    pub fn accepts_deploys(&self) -> bool {
        matches!(self.state, GameState::New | GameState::InProgress)
    }

    /// Number of deployed ships of one type.
    pub fn count_of(&self, ship_type: ShipType) -> usize {
        self.ships.iter().filter(|s| s.ship_type == ship_type).count()
    }

    /// Every cell occupied by any ship, in deployment order.
    pub fn ship_cells(&self) -> Vec<String> {
        self.ships.iter().flat_map(|s| s.cells.clone()).collect()
    }

    /// Every coordinate already attacked, in shot order.
    pub fn shot_cells(&self) -> Vec<String> {
        self.shots.iter().map(|s| s.coordinate.clone()).collect()
    }

    /// Remaining health summed across the fleet.
    pub fn total_health(&self) -> usize {
        self.ships.iter().map(|s| s.health).sum()
    }
}
