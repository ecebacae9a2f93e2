use crate::club::player::player::dedup_squad;
use crate::club::team::lineup::Lineup;
use crate::club::team::team::Team;
use crate::error::EngineError;
use crate::league::schedule::{Fixture, Schedule, ScheduleGenerator};
use crate::league::table::{top_scorers, LeagueTable, ScorerRow};
use crate::r#match::engine::MatchEngine;
use crate::r#match::result::MatchResult;
use crate::r#match::simulator::Match;
use crate::r#match::squad::MatchSquad;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A running season: the league's teams, the full fixture list, and every
/// committed result. Matchdays advance only through
/// [`finish_matchday`](Season::finish_matchday), so an abandoned live match
/// leaves no trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub teams: Vec<Team>,
    pub user_team_id: u32,
    pub schedule: Schedule,
    /// Committed results, keyed by matchday.
    pub results: BTreeMap<u8, Vec<MatchResult>>,
    pub current_matchday: u8,
}

impl Season {
    pub fn new(teams: Vec<Team>, user_team_id: u32) -> Result<Season, EngineError> {
        let mut deduped: Vec<Team> = Vec::with_capacity(teams.len());
        for mut team in teams {
            if deduped.iter().any(|t: &Team| t.id == team.id) {
                warn!("dropping duplicate team {} ({})", team.id, team.name);
                continue;
            }
            team.squad = dedup_squad(team.squad);
            deduped.push(team);
        }

        if deduped.len() < 2 {
            return Err(EngineError::Validation(format!(
                "a season needs at least 2 teams, got {}",
                deduped.len()
            )));
        }

        if !deduped.iter().any(|t| t.id == user_team_id) {
            return Err(EngineError::Validation(format!(
                "user team {} is not part of the league",
                user_team_id
            )));
        }

        let team_ids: Vec<u32> = deduped.iter().map(|t| t.id).collect();
        let schedule = ScheduleGenerator::generate(&team_ids);

        info!(
            "season started: {} teams, {} matchdays, user team {}",
            deduped.len(),
            schedule.total_matchdays(),
            user_team_id
        );

        Ok(Season {
            teams: deduped,
            user_team_id,
            schedule,
            results: BTreeMap::new(),
            current_matchday: 1,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.current_matchday > self.schedule.total_matchdays()
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn matchday_results(&self, day: u8) -> &[MatchResult] {
        self.results.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The user's fixture on the current matchday, if any is still to play.
    /// Odd-sized leagues have bye rounds where this is `None`.
    pub fn user_fixture(&self) -> Option<&Fixture> {
        if self.is_finished() {
            return None;
        }

        self.schedule
            .fixture_for_team(self.current_matchday, self.user_team_id)
    }

    /// Set up the user's current fixture as a live minute-stepped match.
    /// The user side plays with the confirmed lineup, the opponent with its
    /// full squad. The season itself is untouched until the resulting
    /// [`MatchResult`] comes back through [`finish_matchday`](Season::finish_matchday).
    pub fn play_user_match(&self, lineup: &Lineup) -> Result<MatchEngine, EngineError> {
        let fixture = self.user_fixture().ok_or_else(|| {
            EngineError::Validation(format!(
                "no user fixture on matchday {}",
                self.current_matchday
            ))
        })?;

        let home = self.squad_for(fixture.home_id, lineup)?;
        let away = self.squad_for(fixture.away_id, lineup)?;

        Ok(Match::make(fixture.id.clone(), home, away)?.into_engine())
    }

    /// Commit the current matchday: take the user's result (if they played),
    /// simulate every remaining fixture in aggregate mode, and advance.
    pub fn finish_matchday(
        &mut self,
        user_result: Option<MatchResult>,
        rng: &mut impl Rng,
    ) -> Result<&[MatchResult], EngineError> {
        if self.is_finished() {
            return Err(EngineError::Validation("the season is over".to_string()));
        }

        let day = self.current_matchday;
        let fixtures = self
            .schedule
            .matchday(day)
            .map(|md| md.fixtures.clone())
            .unwrap_or_default();

        let mut day_results: Vec<MatchResult> = Vec::with_capacity(fixtures.len());

        if let Some(result) = user_result {
            if !fixtures.iter().any(|f| f.id == result.id) {
                return Err(EngineError::DataIntegrity(format!(
                    "result {} does not belong to matchday {}",
                    result.id, day
                )));
            }
            day_results.push(result);
        }

        for fixture in &fixtures {
            if day_results.iter().any(|r| r.id == fixture.id) {
                continue;
            }

            let home = self.team_squad(fixture.home_id)?;
            let away = self.team_squad(fixture.away_id)?;
            let result = Match::make(fixture.id.clone(), home, away)?.play(rng);
            day_results.push(result);
        }

        info!("matchday {} committed: {} results", day, day_results.len());

        self.results.insert(day, day_results);
        self.current_matchday += 1;

        Ok(self.matchday_results(day))
    }

    pub fn standings(&self) -> LeagueTable {
        let all: Vec<MatchResult> = self.results.values().flatten().cloned().collect();
        LeagueTable::compute(&all, &self.teams)
    }

    pub fn top_scorers(&self) -> Vec<ScorerRow> {
        let all: Vec<MatchResult> = self.results.values().flatten().cloned().collect();
        top_scorers(&all, &self.teams)
    }

    fn squad_for(&self, team_id: u32, lineup: &Lineup) -> Result<MatchSquad, EngineError> {
        let team = self.lookup(team_id)?;

        if team_id == self.user_team_id {
            Ok(MatchSquad::from_lineup(team, lineup))
        } else {
            Ok(MatchSquad::from_team(team))
        }
    }

    fn team_squad(&self, team_id: u32) -> Result<MatchSquad, EngineError> {
        Ok(MatchSquad::from_team(self.lookup(team_id)?))
    }

    fn lookup(&self, team_id: u32) -> Result<&Team, EngineError> {
        self.team(team_id).ok_or_else(|| {
            EngineError::DataIntegrity(format!("fixture names unknown team {}", team_id))
        })
    }
}
