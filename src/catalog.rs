//! The fixed ship catalog: four kinds, each with a length and a
//! per-game quota taken from configuration.

use serde::{Deserialize, Serialize};

/// Kind of ship. The catalog is closed; there is no behavioural variation
/// beyond length, so a plain enum replaces per-type classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    BattleShip,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipType {
    /// Every catalog entry, in fleet-tally order.
    pub const ALL: [ShipType; 4] = [
        ShipType::BattleShip,
        ShipType::Cruiser,
        ShipType::Destroyer,
        ShipType::Submarine,
    ];

    /// Number of cells a ship of this type occupies.
    pub fn length(self) -> usize {
        match self {
            ShipType::BattleShip => 4,
            ShipType::Cruiser => 3,
            ShipType::Destroyer => 2,
            ShipType::Submarine => 1,
        }
    }

    /// Canonical display name, matching the wire identifiers.
    pub fn name(self) -> &'static str {
        match self {
            ShipType::BattleShip => "BattleShip",
            ShipType::Cruiser => "Cruiser",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
        }
    }

    /// Look a type up by its wire name. Unknown names are reported by
    /// callers as an invalid-ship-type error.
    pub fn from_name(name: &str) -> Option<ShipType> {
        ShipType::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl core::fmt::Display for ShipType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-type maximum ship counts for a full fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub battle_ship: usize,
    pub cruiser: usize,
    pub destroyer: usize,
    pub submarine: usize,
}

impl FleetConfig {
    /// Configured quota for one ship type.
    pub fn max_count(&self, ship_type: ShipType) -> usize {
        match ship_type {
            ShipType::BattleShip => self.battle_ship,
            ShipType::Cruiser => self.cruiser,
            ShipType::Destroyer => self.destroyer,
            ShipType::Submarine => self.submarine,
        }
    }

    /// Total number of ships in a complete fleet.
    pub fn total_ships(&self) -> usize {
        ShipType::ALL.iter().map(|&t| self.max_count(t)).sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        FleetConfig {
            battle_ship: 1,
            cruiser: 2,
            destroyer: 3,
            submarine: 4,
        }
    }
}
