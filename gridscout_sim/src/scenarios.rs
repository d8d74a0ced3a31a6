//! Named exploration scenarios.

use crate::oracle::GroundTruthGrid;
use crate::world::{SimConfig, World};
use gridscout_env::{Cell, GridResult, Terrain};

/// Scenario identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioId {
    /// GS-001: 5x5, nothing closed
    OpenField,

    /// GS-002: 3x3 with a full wall at x=1
    Wall,

    /// GS-003: 5x5 pocket that needs two backtracks
    CulDeSac,

    /// GS-004: seeded random grid from the config
    Random,
}

/// 5x5, nothing closed.
const OPEN_FIELD_LAYOUT: [&str; 5] = ["00000"; 5];

/// 3x3, column x=1 closed top to bottom.
const WALL_LAYOUT: [&str; 3] = ["010", "010", "010"];

/// 5x5 with an L-shaped barrier around (2,2).
const CUL_DE_SAC_LAYOUT: [&str; 5] = ["00000", "00010", "00010", "01110", "00000"];

impl ScenarioId {
    /// Returns a list of all scenarios.
    pub fn all() -> Vec<ScenarioId> {
        vec![
            ScenarioId::OpenField,
            ScenarioId::Wall,
            ScenarioId::CulDeSac,
            ScenarioId::Random,
        ]
    }

    /// Returns the scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::OpenField => "open_field",
            ScenarioId::Wall => "wall",
            ScenarioId::CulDeSac => "cul_de_sac",
            ScenarioId::Random => "random",
        }
    }

    /// Returns a description of the scenario.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioId::OpenField => "5x5 fully open grid, pure diagonal run in 4 steps",
            ScenarioId::Wall => "3x3 with a closed column at x=1, target unreachable",
            ScenarioId::CulDeSac => "5x5 pocket, agent blacklists two cells and backs out",
            ScenarioId::Random => "Seeded random grid using the configured dim/openness/fov",
        }
    }

    /// Returns true if the scenario is expected to reach its target.
    ///
    /// Random grids have no fixed expectation.
    pub fn expects_success(&self) -> Option<bool> {
        match self {
            ScenarioId::OpenField | ScenarioId::CulDeSac => Some(true),
            ScenarioId::Wall => Some(false),
            ScenarioId::Random => None,
        }
    }

    /// Builds the world for this scenario.
    ///
    /// Fixed layouts start at (0,0) and target the bottom-right corner; only
    /// the field of view is taken from `config`. Random scenarios use every
    /// config field.
    pub fn build(&self, config: &SimConfig) -> GridResult<World> {
        let layout: &[&str] = match self {
            ScenarioId::OpenField => &OPEN_FIELD_LAYOUT,
            ScenarioId::Wall => &WALL_LAYOUT,
            ScenarioId::CulDeSac => &CUL_DE_SAC_LAYOUT,
            ScenarioId::Random => return World::new(config),
        };

        let grid = GroundTruthGrid::from_layout(layout)?;
        let target = grid.dim().corner();
        World::with_grid(grid, Cell::new(0, 0), target, config.fov)
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open_field" | "openfield" | "gs-001" => Ok(ScenarioId::OpenField),
            "wall" | "gs-002" => Ok(ScenarioId::Wall),
            "cul_de_sac" | "culdesac" | "gs-003" => Ok(ScenarioId::CulDeSac),
            "random" | "gs-004" => Ok(ScenarioId::Random),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_names_round_trip() {
        for scenario in ScenarioId::all() {
            assert_eq!(scenario.name().parse::<ScenarioId>(), Ok(scenario));
        }
        assert!("maze".parse::<ScenarioId>().is_err());
    }

    #[test]
    fn test_fixed_layouts_build() {
        let config = SimConfig::default();

        let world = ScenarioId::Wall.build(&config).unwrap();
        assert_eq!(world.target(), Cell::new(2, 2));

        let world = ScenarioId::CulDeSac.build(&config).unwrap();
        assert_eq!(world.target(), Cell::new(4, 4));
    }
}
