use crate::club::team::team::Team;
use crate::r#match::result::MatchResult;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "W"),
            MatchOutcome::Draw => write!(f, "D"),
            MatchOutcome::Loss => write!(f, "L"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub team_id: u32,
    pub team_name: String,
    pub played: u8,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u16,
    pub form: Vec<MatchOutcome>,
}

impl TableRow {
    fn new(team: &Team) -> Self {
        TableRow {
            team_id: team.id,
            team_name: team.name.clone(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    /// Most recent outcomes, oldest first, capped at `n`.
    pub fn recent_form(&self, n: usize) -> &[MatchOutcome] {
        let start = self.form.len().saturating_sub(n);
        &self.form[start..]
    }

    fn record_win(&mut self) {
        self.wins += 1;
        self.points += 3;
        self.form.push(MatchOutcome::Win);
    }

    fn record_draw(&mut self) {
        self.draws += 1;
        self.points += 1;
        self.form.push(MatchOutcome::Draw);
    }

    fn record_loss(&mut self) {
        self.losses += 1;
        self.form.push(MatchOutcome::Loss);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<TableRow>,
}

impl LeagueTable {
    /// Recomputed from scratch on every call so the table is a pure function
    /// of the committed results. Results naming a team outside the league are
    /// skipped. Rank order: points, then goal difference, then goals scored;
    /// remaining ties keep the input team order.
    pub fn compute(results: &[MatchResult], teams: &[Team]) -> LeagueTable {
        let mut index: HashMap<u32, usize> = HashMap::new();
        let mut rows: Vec<TableRow> = Vec::with_capacity(teams.len());

        for team in teams {
            index.insert(team.id, rows.len());
            rows.push(TableRow::new(team));
        }

        for result in results {
            let (Some(&home_idx), Some(&away_idx)) =
                (index.get(&result.home_id), index.get(&result.away_id))
            else {
                continue;
            };

            {
                let home = &mut rows[home_idx];
                home.played += 1;
                home.goals_for += result.home_score as u16;
                home.goals_against += result.away_score as u16;
            }
            {
                let away = &mut rows[away_idx];
                away.played += 1;
                away.goals_for += result.away_score as u16;
                away.goals_against += result.home_score as u16;
            }

            if result.home_score > result.away_score {
                rows[home_idx].record_win();
                rows[away_idx].record_loss();
            } else if result.away_score > result.home_score {
                rows[away_idx].record_win();
                rows[home_idx].record_loss();
            } else {
                rows[home_idx].record_draw();
                rows[away_idx].record_draw();
            }
        }

        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
                .then_with(|| b.goals_for.cmp(&a.goals_for))
        });

        LeagueTable { rows }
    }

    pub fn position_of(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|r| r.team_id == team_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub player_id: u32,
    pub player_name: String,
    pub team_name: String,
    pub goals: u16,
}

/// Aggregate the scorer maps of all committed results and resolve each
/// scorer against the current rosters. Ids that no roster resolves are
/// dropped rather than shown as unknowns. Sorted by goals, ties by id.
pub fn top_scorers(results: &[MatchResult], teams: &[Team]) -> Vec<ScorerRow> {
    let mut roster: HashMap<u32, (&str, &str)> = HashMap::new();
    for team in teams {
        for player in &team.squad {
            roster.insert(player.id, (player.name.as_str(), team.name.as_str()));
        }
    }

    let mut goals_by_player: HashMap<u32, u16> = HashMap::new();
    for result in results {
        for (&player_id, &goals) in &result.scorers {
            *goals_by_player.entry(player_id).or_insert(0) += goals as u16;
        }
    }

    goals_by_player
        .into_iter()
        .filter_map(|(player_id, goals)| {
            roster.get(&player_id).map(|&(name, team_name)| ScorerRow {
                player_id,
                player_name: name.to_string(),
                team_name: team_name.to_string(),
                goals,
            })
        })
        .sorted_by(|a, b| b.goals.cmp(&a.goals).then(a.player_id.cmp(&b.player_id)))
        .collect()
}
