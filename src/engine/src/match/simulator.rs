use crate::error::EngineError;
use crate::r#match::engine::MatchEngine;
use crate::r#match::result::MatchResult;
use crate::r#match::squad::MatchSquad;
use log::debug;
use rand::{Rng, RngExt};
use std::collections::HashMap;

/// Aggregate-mode score ranges: intentionally home-biased discrete uniforms.
pub const HOME_SCORE_MAX: u8 = 3;
pub const AWAY_SCORE_MAX: u8 = 2;

/// A match ready to be played. Construction validates the structural
/// preconditions; simulation itself cannot fail afterwards.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: String,
    pub home: MatchSquad,
    pub away: MatchSquad,
}

impl Match {
    pub fn make(id: String, home: MatchSquad, away: MatchSquad) -> Result<Match, EngineError> {
        if home.team_id == away.team_id {
            return Err(EngineError::DataIntegrity(format!(
                "match {}: a team cannot play itself (team {})",
                id, home.team_id
            )));
        }

        if home.players.is_empty() || away.players.is_empty() {
            return Err(EngineError::DataIntegrity(format!(
                "match {}: both sides need squad data",
                id
            )));
        }

        Ok(Match { id, home, away })
    }

    /// Aggregate mode: one-shot scoreline with uniform goal attribution.
    /// Used for every fixture the user does not watch live.
    pub fn play(&self, rng: &mut impl Rng) -> MatchResult {
        let home_score = rng.random_range(0..=HOME_SCORE_MAX);
        let away_score = rng.random_range(0..=AWAY_SCORE_MAX);

        let mut scorers: HashMap<u32, u8> = HashMap::new();
        Self::attribute_goals(&self.home, home_score, &mut scorers, rng);
        Self::attribute_goals(&self.away, away_score, &mut scorers, rng);

        debug!(
            "played {}: {} {} - {} {}",
            self.id, self.home.team_name, home_score, away_score, self.away.team_name
        );

        MatchResult {
            id: self.id.clone(),
            home_id: self.home.team_id,
            away_id: self.away.team_id,
            home_score,
            away_score,
            scorers,
            events: Vec::new(),
        }
    }

    /// Event-driven mode: hand the match over to the minute-stepped engine.
    pub fn into_engine(self) -> MatchEngine {
        MatchEngine::new(self)
    }

    fn attribute_goals(
        squad: &MatchSquad,
        goals: u8,
        scorers: &mut HashMap<u32, u8>,
        rng: &mut impl Rng,
    ) {
        let eligible = squad.eligible_scorers();

        for _ in 0..goals {
            let scorer = eligible[rng.random_range(0..eligible.len())];
            *scorers.entry(scorer.id).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::player::Player;
    use crate::club::team::team::{PlayStyle, Team};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn team(id: u32, strength: u8) -> Team {
        let squad = (0..16)
            .map(|n| {
                let role = match n {
                    0 | 1 => "POR",
                    2..=6 => "DIF",
                    7..=11 => "CEN",
                    _ => "ATT",
                };
                Player::new(id * 1000 + n, format!("T{} P{}", id, n), role)
            })
            .collect();

        Team {
            id,
            name: format!("Team {}", id),
            crest: String::new(),
            squad,
            style: PlayStyle::Balanced,
            strength: Some(strength),
        }
    }

    #[test]
    fn make_rejects_team_playing_itself() {
        let a = team(1, 80);
        let result = Match::make(
            "match-0-1-1".to_string(),
            MatchSquad::from_team(&a),
            MatchSquad::from_team(&a),
        );

        assert!(matches!(result, Err(EngineError::DataIntegrity(_))));
    }

    #[test]
    fn make_rejects_missing_squad() {
        let a = team(1, 80);
        let mut b = team(2, 70);
        b.squad.clear();

        let result = Match::make(
            "match-0-1-2".to_string(),
            MatchSquad::from_team(&a),
            MatchSquad::from_team(&b),
        );

        assert!(matches!(result, Err(EngineError::DataIntegrity(_))));
    }

    #[test]
    fn aggregate_scores_stay_in_range_and_scorers_sum_up() {
        let a = team(1, 80);
        let b = team(2, 70);
        let m = Match::make(
            "match-0-1-2".to_string(),
            MatchSquad::from_team(&a),
            MatchSquad::from_team(&b),
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let result = m.play(&mut rng);

            assert!(result.home_score <= HOME_SCORE_MAX);
            assert!(result.away_score <= AWAY_SCORE_MAX);
            assert_eq!(result.scorer_goals(), result.total_goals());
        }
    }

    #[test]
    fn goals_are_never_credited_to_goalkeepers() {
        let a = team(1, 80);
        let b = team(2, 70);

        let keeper_ids: Vec<u32> = a
            .squad
            .iter()
            .chain(b.squad.iter())
            .filter(|p| p.is_goalkeeper())
            .map(|p| p.id)
            .collect();

        let m = Match::make(
            "match-0-1-2".to_string(),
            MatchSquad::from_team(&a),
            MatchSquad::from_team(&b),
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2_000 {
            let result = m.play(&mut rng);
            for keeper in &keeper_ids {
                assert!(!result.scorers.contains_key(keeper));
            }
        }
    }
}
