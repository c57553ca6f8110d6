//! Feature engineering: normalized cost and fixture-adjusted projected value.
//!
//! The projected value discounts a player's season points by the difficulty
//! of their club's next five scheduled fixtures:
//!
//! ```text
//! projected_value = total_points * (6 - avg_difficulty) / 5
//! ```
//!
//! Difficulty is rated 1-5 per fixture side, so an easy run of fixtures
//! leaves the raw score nearly intact while a hard run discounts it down to
//! 0.2x. Ratings outside 1-5 are not clamped; the formula is applied as-is.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::fixture::Fixture;
use super::ids::{ClubId, PlayerId};
use super::player::{PlayerRecord, Position};
use crate::error::{FeatureError, Result};

/// How many upcoming fixtures feed the difficulty aggregate.
pub const FIXTURE_HORIZON: usize = 5;

/// One feature-table row: everything the optimizer and the presentation
/// layer need about a candidate player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerFeatures {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    pub position: Position,
    pub club: ClubId,
    /// Cost in currency units (upstream `now_cost` / 10).
    pub cost: Decimal,
    pub total_points: i32,
    /// Recent-form score; missing or non-numeric values coerce to 0.
    pub form: Decimal,
    /// Average difficulty over the club's next five scheduled fixtures,
    /// kept raw for inspection.
    pub next_five_difficulty: Decimal,
    /// Fixture-adjusted expected contribution; the optimization objective.
    pub projected_value: Decimal,
}

/// Derive the feature table consumed by [`optimize_squad`].
///
/// Pure function of its inputs. Rejects an empty roster, a non-positive
/// cost, or a position code outside 1-4 with [`FeatureError`] variants;
/// the only silent coercion is `form`, where a missing or non-numeric
/// value becomes 0. `fixtures` may be empty, in which case every club's
/// difficulty aggregate is 0.
///
/// [`optimize_squad`]: super::optimizer::optimize_squad
pub fn derive_features(players: &[PlayerRecord], fixtures: &[Fixture]) -> Result<Vec<PlayerFeatures>> {
    if players.is_empty() {
        return Err(FeatureError::EmptyRoster.into());
    }

    debug!(
        players = players.len(),
        fixtures = fixtures.len(),
        "deriving features"
    );

    // Explicit sort-then-take: input order carries no meaning.
    let mut scheduled: Vec<&Fixture> = fixtures.iter().filter(|f| f.event.is_some()).collect();
    scheduled.sort_by_key(|f| f.event);

    let mut difficulty_by_club: HashMap<ClubId, Decimal> = HashMap::new();

    let mut table = Vec::with_capacity(players.len());
    for player in players {
        let position = player.position()?;

        if player.now_cost == 0 {
            return Err(FeatureError::InvalidCost {
                player: player.id,
                cost: player.now_cost,
            }
            .into());
        }

        let next_five_difficulty = *difficulty_by_club
            .entry(player.team)
            .or_insert_with(|| upcoming_difficulty(player.team, &scheduled));

        let cost = Decimal::from(player.now_cost) / Decimal::from(10);
        let form = coerce_form(player.form.as_deref());
        let projected_value = Decimal::from(player.total_points)
            * (Decimal::from(6) - next_five_difficulty)
            / Decimal::from(5);

        table.push(PlayerFeatures {
            id: player.id,
            first_name: player.first_name.clone(),
            second_name: player.second_name.clone(),
            position,
            club: player.team,
            cost,
            total_points: player.total_points,
            form,
            next_five_difficulty,
            projected_value,
        });
    }

    Ok(table)
}

/// Average difficulty over the club's earliest scheduled fixtures, up to
/// [`FIXTURE_HORIZON`] of them. The divisor floors at 1 so a club with no
/// scheduled fixtures averages to 0 instead of dividing by zero.
fn upcoming_difficulty(club: ClubId, scheduled_by_round: &[&Fixture]) -> Decimal {
    let difficulties: Vec<u8> = scheduled_by_round
        .iter()
        .filter_map(|f| f.difficulty_for(club))
        .take(FIXTURE_HORIZON)
        .collect();

    let total: Decimal = difficulties.iter().map(|&d| Decimal::from(d)).sum();
    let divisor = Decimal::from(difficulties.len().max(1) as u32);

    total / divisor
}

/// The documented coercion: missing or non-numeric form becomes 0.
fn coerce_form(form: Option<&str>) -> Decimal {
    form.and_then(|s| Decimal::from_str(s.trim()).ok())
        .unwrap_or(Decimal::ZERO)
}
