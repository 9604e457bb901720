//! Player records and strategy tags.
//!
//! These are data contracts for the turn manager and the AI strategies. The
//! board never interprets a player's type or actor handle.

use serde::{Deserialize, Serialize};

/// Which strategy drives a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerType {
    Human,
    Minmax,
    MinmaxAb,
    Random,
    HeuristicsDiffLdo,
    HeuristicsCornersLdo,
    HeuristicsCircleLdo,
    HeuristicsDiffMf,
    HeuristicsCornersMf,
    HeuristicsCircleMf,
}

/// Board region a heuristic player concentrates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicFocus {
    Diff,
    Corners,
    Circle,
}

/// Weighting family of a heuristic player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicFamily {
    Ldo,
    Mf,
}

impl PlayerType {
    /// Every player type in declaration order.
    pub const ALL: [PlayerType; 10] = [
        PlayerType::Human,
        PlayerType::Minmax,
        PlayerType::MinmaxAb,
        PlayerType::Random,
        PlayerType::HeuristicsDiffLdo,
        PlayerType::HeuristicsCornersLdo,
        PlayerType::HeuristicsCircleLdo,
        PlayerType::HeuristicsDiffMf,
        PlayerType::HeuristicsCornersMf,
        PlayerType::HeuristicsCircleMf,
    ];

    /// Returns the upper-snake tag used in config files.
    pub const fn tag(self) -> &'static str {
        match self {
            PlayerType::Human => "HUMAN",
            PlayerType::Minmax => "MINMAX",
            PlayerType::MinmaxAb => "MINMAX_AB",
            PlayerType::Random => "RANDOM",
            PlayerType::HeuristicsDiffLdo => "HEURISTICS_DIFF_LDO",
            PlayerType::HeuristicsCornersLdo => "HEURISTICS_CORNERS_LDO",
            PlayerType::HeuristicsCircleLdo => "HEURISTICS_CIRCLE_LDO",
            PlayerType::HeuristicsDiffMf => "HEURISTICS_DIFF_MF",
            PlayerType::HeuristicsCornersMf => "HEURISTICS_CORNERS_MF",
            PlayerType::HeuristicsCircleMf => "HEURISTICS_CIRCLE_MF",
        }
    }

    /// Parses a player type from its tag.
    pub fn from_tag(s: &str) -> Option<PlayerType> {
        PlayerType::ALL.into_iter().find(|t| t.tag() == s)
    }

    /// Region focus of a heuristic type; `None` for the other kinds.
    pub const fn focus(self) -> Option<HeuristicFocus> {
        match self {
            PlayerType::HeuristicsDiffLdo | PlayerType::HeuristicsDiffMf => {
                Some(HeuristicFocus::Diff)
            }
            PlayerType::HeuristicsCornersLdo | PlayerType::HeuristicsCornersMf => {
                Some(HeuristicFocus::Corners)
            }
            PlayerType::HeuristicsCircleLdo | PlayerType::HeuristicsCircleMf => {
                Some(HeuristicFocus::Circle)
            }
            PlayerType::Human | PlayerType::Minmax | PlayerType::MinmaxAb | PlayerType::Random => {
                None
            }
        }
    }

    /// Weighting family of a heuristic type; `None` for the other kinds.
    pub const fn family(self) -> Option<HeuristicFamily> {
        match self {
            PlayerType::HeuristicsDiffLdo
            | PlayerType::HeuristicsCornersLdo
            | PlayerType::HeuristicsCircleLdo => Some(HeuristicFamily::Ldo),
            PlayerType::HeuristicsDiffMf
            | PlayerType::HeuristicsCornersMf
            | PlayerType::HeuristicsCircleMf => Some(HeuristicFamily::Mf),
            PlayerType::Human | PlayerType::Minmax | PlayerType::MinmaxAb | PlayerType::Random => {
                None
            }
        }
    }
}

/// Address of an external agent that answers move requests for a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorRef(pub String);

/// A participant in the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub player_type: Option<PlayerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<ActorRef>,
}

impl Player {
    /// Creates a named player with zero points and no actor.
    pub fn new(name: impl Into<String>, player_type: PlayerType) -> Self {
        Player {
            name: Some(name.into()),
            player_type: Some(player_type),
            player_points: Some(0),
            actor: None,
        }
    }
}
