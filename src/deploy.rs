//! Ship deployment validation and commit.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board;
use crate::catalog::ShipType;
use crate::common::GameError;
use crate::config::GameConfig;
use crate::coords::{self, Orientation};
use crate::game::{Game, GameState, Ship};

/// Request to place one ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployCommand {
    pub ship_type: ShipType,
    pub orientation: Orientation,
    /// Starting cell label, e.g. "A1".
    pub coordinate: String,
}

/// Accepted placement: the cells the ship occupies and the buffer region
/// future ships must stay out of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub cells: Vec<String>,
    pub blocked_cells: Vec<String>,
}

/// Validates deploy commands against a game and commits accepted ones.
pub struct DeploymentValidator {
    config: GameConfig,
}

impl DeploymentValidator {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Validate a placement without touching the game. Checks run cheapest
    /// first and fail fast: readiness, quota, cell computation, bounds,
    /// separation. The returned [`Placement`] carries the precomputed
    /// buffer region.
    pub fn placement_for(&self, game: &Game, cmd: &DeployCommand) -> Result<Placement, GameError> {
        if !game.accepts_deploys() {
            return Err(GameError::GameNotReady);
        }

        // Exhausted quota reports the same kind as an unknown type: the
        // ship cannot be placed as specified either way.
        let deployed = game.count_of(cmd.ship_type);
        let quota = self.config.fleet.max_count(cmd.ship_type);
        debug!(
            "deploy: {} of {} already deployed, max allowed {}",
            deployed,
            cmd.ship_type,
            quota
        );
        if deployed >= quota {
            return Err(GameError::InvalidShipType);
        }

        let length = cmd.ship_type.length();
        let cells = coords::cells_for_placement(&cmd.coordinate, cmd.orientation, length)
            .ok_or(GameError::InvalidShipCoordinate)?;

        // Bounds: every computed cell must exist on the generated board.
        // Rejections log at debug here; the random-placement probe calls
        // this on purpose until it finds a legal spot.
        let board_1d = board::flatten(&game.board);
        if !cells.iter().all(|c| board_1d.contains(c)) {
            debug!("deploy: placement at {} falls outside the board", cmd.coordinate);
            return Err(GameError::InvalidShipCoordinate);
        }

        // Separation: intersect against each prior ship's precomputed
        // buffer, in deployment order.
        for ship in &game.ships {
            if cells.iter().any(|c| ship.blocked_cells.contains(c)) {
                debug!(
                    "deploy: placement at {} too close to a deployed {}",
                    cmd.coordinate, ship.ship_type
                );
                return Err(GameError::InvalidShipCoordinate);
            }
        }

        let blocked_cells = buffer_region(&cells, &game.board);
        Ok(Placement { cells, blocked_cells })
    }

    /// Validate and commit: append the new ship and start the match if
    /// this was the first deploy. No partial mutation on failure.
    pub fn deploy(&self, game: &mut Game, cmd: &DeployCommand) -> Result<Placement, GameError> {
        let placement = match self.placement_for(game, cmd) {
            Ok(placement) => placement,
            Err(err) => {
                warn!(
                    "deploy: rejected {} at {}: {}",
                    cmd.ship_type, cmd.coordinate, err
                );
                return Err(err);
            }
        };
        game.ships.push(Ship {
            ship_type: cmd.ship_type,
            cells: placement.cells.clone(),
            blocked_cells: placement.blocked_cells.clone(),
            health: cmd.ship_type.length(),
        });
        if game.state == GameState::New {
            game.state = GameState::InProgress;
        }
        info!(
            "deploy: {} placed at {:?}",
            cmd.ship_type, placement.cells
        );
        Ok(placement)
    }

    /// Search for a legal placement of `ship_type` by bounded random
    /// probing. Used by the self-play sim and tests.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        game: &Game,
        ship_type: ShipType,
    ) -> Result<DeployCommand, GameError> {
        let height = game.board.len();
        let width = game.board.first().map(Vec::len).unwrap_or(0);
        let length = ship_type.length();

        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_col, max_row) = match orientation {
                Orientation::Horizontal => match width.checked_sub(length) {
                    Some(c) => (c, height - 1),
                    None => continue,
                },
                Orientation::Vertical => match height.checked_sub(length) {
                    Some(r) => (width - 1, r),
                    None => continue,
                },
            };
            let col = rng.random_range(0..=max_col);
            let row = rng.random_range(0..=max_row) as u32 + 1;
            let coordinate = match coords::make_label(col, row) {
                Some(label) => label,
                None => continue,
            };
            let cmd = DeployCommand {
                ship_type,
                orientation,
                coordinate,
            };
            if self.placement_for(game, &cmd).is_ok() {
                return Ok(cmd);
            }
        }
        Err(GameError::InvalidShipCoordinate)
    }
}

/// Buffer region for a placement: the bounding rectangle of `cells`
/// expanded by exactly one cell on every side, clipped to the board.
/// Computed once at deploy time so later deploys only intersect sets.
fn buffer_region(cells: &[String], grid: &[Vec<String>]) -> Vec<String> {
    let height = grid.len();
    let width = grid.first().map(Vec::len).unwrap_or(0);

    // First and last cell bound the line; placements are always straight.
    let (first_col, first_row) = match cells.first().and_then(|c| coords::parse_coordinate(c)) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let (last_col, last_row) = match cells.last().and_then(|c| coords::parse_coordinate(c)) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let col_min = first_col.min(last_col).saturating_sub(1);
    let col_max = (first_col.max(last_col) + 1).min(width.saturating_sub(1));
    // Row labels are 1-based; index = row - 1, expanded one step each way.
    let row_min = (first_row.min(last_row) as usize).saturating_sub(2);
    let row_max = (first_row.max(last_row) as usize).min(height.saturating_sub(1));

    let mut region = Vec::new();
    for r in row_min..=row_max {
        for c in col_min..=col_max {
            region.push(grid[r][c].clone());
        }
    }
    region
}
