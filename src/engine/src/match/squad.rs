use crate::club::player::player::Player;
use crate::club::player::position::Role;
use crate::club::team::lineup::Lineup;
use crate::club::team::team::{PlayStyle, Team};

/// A side's roster as the match simulator sees it: either a team's full
/// squad, or the confirmed lineup (starters plus bench) for the user team.
#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub team_id: u32,
    pub team_name: String,
    pub style: PlayStyle,
    pub strength: u8,
    pub players: Vec<Player>,
}

impl MatchSquad {
    pub fn from_team(team: &Team) -> Self {
        MatchSquad {
            team_id: team.id,
            team_name: team.name.clone(),
            style: team.style,
            strength: team.match_strength(),
            players: team.squad.clone(),
        }
    }

    /// The user team plays with its confirmed lineup, not the full squad.
    pub fn from_lineup(team: &Team, lineup: &Lineup) -> Self {
        MatchSquad {
            team_id: team.id,
            team_name: team.name.clone(),
            style: team.style,
            strength: team.match_strength(),
            players: lineup.roster().cloned().collect(),
        }
    }

    /// Players eligible to be credited with a goal: everyone but the
    /// goalkeepers. If that filter empties the list (a squad of nothing but
    /// keepers), the whole roster stays eligible so every goal can still be
    /// attributed.
    pub fn eligible_scorers(&self) -> Vec<&Player> {
        let outfield: Vec<&Player> = self.players.iter().filter(|p| !p.is_goalkeeper()).collect();

        if outfield.is_empty() {
            self.players.iter().collect()
        } else {
            outfield
        }
    }

    pub fn by_role(&self, role: Role) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.natural_role() == role)
            .collect()
    }
}
