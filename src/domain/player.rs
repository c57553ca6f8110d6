//! Player roster records and position codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::{ClubId, PlayerId};
use crate::error::FeatureError;

/// Squad position, decoded from the upstream `element_type` codes 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions, in wire-code order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Decode an upstream position code (1=GK, 2=DEF, 3=MID, 4=FWD).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Position::Goalkeeper),
            2 => Some(Position::Defender),
            3 => Some(Position::Midfielder),
            4 => Some(Position::Forward),
            _ => None,
        }
    }

    /// The upstream wire code for this position.
    pub fn code(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    /// Short display label (GK/DEF/MID/FWD).
    pub fn short_name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Raw roster row in the shape the data-acquisition layer hands over.
///
/// Field names follow the upstream bootstrap payload: `now_cost` is in
/// tenths of a currency unit, `element_type` is the position code, `team`
/// the club, and `form` an optional numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    pub element_type: u8,
    pub team: ClubId,
    pub now_cost: u32,
    pub total_points: i32,
    #[serde(default)]
    pub form: Option<String>,
}

impl PlayerRecord {
    /// Decode the position code, rejecting anything outside 1-4.
    pub fn position(&self) -> Result<Position, FeatureError> {
        Position::from_code(self.element_type).ok_or(FeatureError::InvalidPosition {
            player: self.id,
            code: self.element_type,
        })
    }
}
