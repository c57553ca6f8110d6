//! Scheduled fixtures with per-side difficulty ratings.

use serde::{Deserialize, Serialize};

use super::ids::ClubId;

/// One scheduled match between two clubs.
///
/// Field names follow the upstream fixtures payload. `event` is the season
/// round; fixtures with no assigned round are unscheduled and excluded from
/// difficulty aggregation. Difficulty is rated per side on a 1-5 scale,
/// lower = easier. Out-of-range ratings are passed through unclamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub event: Option<u32>,
    pub team_h: ClubId,
    pub team_a: ClubId,
    pub team_h_difficulty: u8,
    pub team_a_difficulty: u8,
}

impl Fixture {
    /// Whether the given club plays in this fixture, home or away.
    pub fn involves(&self, club: ClubId) -> bool {
        self.team_h == club || self.team_a == club
    }

    /// The difficulty faced by the given club in this fixture, if it plays.
    pub fn difficulty_for(&self, club: ClubId) -> Option<u8> {
        if self.team_h == club {
            Some(self.team_h_difficulty)
        } else if self.team_a == club {
            Some(self.team_a_difficulty)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_fixture(event: Option<u32>) -> Fixture {
        Fixture {
            event,
            team_h: ClubId::new(1),
            team_a: ClubId::new(2),
            team_h_difficulty: 2,
            team_a_difficulty: 4,
        }
    }

    #[test]
    fn difficulty_picks_the_right_side() {
        let fixture = make_fixture(Some(1));
        assert_eq!(fixture.difficulty_for(ClubId::new(1)), Some(2));
        assert_eq!(fixture.difficulty_for(ClubId::new(2)), Some(4));
        assert_eq!(fixture.difficulty_for(ClubId::new(3)), None);
    }

    #[test]
    fn involvement_covers_both_sides() {
        let fixture = make_fixture(Some(1));
        assert!(fixture.involves(ClubId::new(1)));
        assert!(fixture.involves(ClubId::new(2)));
        assert!(!fixture.involves(ClubId::new(3)));
    }

    #[test]
    fn unscheduled_fixture_deserializes_with_null_event() {
        let json = r#"{
            "event": null,
            "team_h": 5,
            "team_a": 9,
            "team_h_difficulty": 3,
            "team_a_difficulty": 3
        }"#;

        let fixture: Fixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.event, None);
    }
}
