use crate::r#match::result::{MatchEvent, MatchEventKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryLine {
    pub minute: u8,
    pub text: String,
}

/// Goal phrasing, decided on the score *before* the goal is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GoalPhrase {
    /// The scoring team was already ahead.
    ExtendsLead,
    /// The game was level; this goal breaks the tie.
    TakesLead,
    /// The scoring team was behind.
    Equalizes,
}

impl GoalPhrase {
    fn from_pre_goal_score(scoring_team_goals: u8, other_team_goals: u8) -> Self {
        if scoring_team_goals > other_team_goals {
            GoalPhrase::ExtendsLead
        } else if scoring_team_goals == other_team_goals {
            GoalPhrase::TakesLead
        } else {
            GoalPhrase::Equalizes
        }
    }

    fn text(self) -> &'static str {
        match self {
            GoalPhrase::ExtendsLead => "extends the lead",
            GoalPhrase::TakesLead => "takes the lead",
            GoalPhrase::Equalizes => "equalizes",
        }
    }
}

pub struct CommentaryGenerator;

impl CommentaryGenerator {
    /// Build the goal commentary feed for a minute-ordered event log.
    /// Non-goal events are skipped; each line is phrased from the score
    /// differential before the goal's own increment.
    pub fn generate(events: &[MatchEvent], home_id: u32) -> Vec<CommentaryLine> {
        let mut home_goals: u8 = 0;
        let mut away_goals: u8 = 0;
        let mut commentary = Vec::new();

        for event in events {
            if event.kind != MatchEventKind::Goal {
                continue;
            }

            let is_home_goal = event.team_id == home_id;
            let phrase = if is_home_goal {
                GoalPhrase::from_pre_goal_score(home_goals, away_goals)
            } else {
                GoalPhrase::from_pre_goal_score(away_goals, home_goals)
            };

            if is_home_goal {
                home_goals += 1;
            } else {
                away_goals += 1;
            }

            commentary.push(CommentaryLine {
                minute: event.minute,
                text: format!(
                    "GOAL! {} {}! Scored by {}.",
                    event.team_name,
                    phrase.text(),
                    event.player_name
                ),
            });
        }

        commentary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(minute: u8, team_id: u32, home_score: u8, away_score: u8) -> MatchEvent {
        MatchEvent {
            minute,
            team_id,
            team_name: (if team_id == 1 { "Home FC" } else { "Away FC" }).to_string(),
            player_id: Some(9),
            player_name: "Scorer".to_string(),
            kind: MatchEventKind::Goal,
            home_score,
            away_score,
        }
    }

    fn shot(minute: u8, team_id: u32) -> MatchEvent {
        MatchEvent {
            minute,
            team_id,
            team_name: "Home FC".to_string(),
            player_id: Some(7),
            player_name: "Shooter".to_string(),
            kind: MatchEventKind::ShotWide,
            home_score: 0,
            away_score: 0,
        }
    }

    #[test]
    fn phrasing_uses_pre_goal_score() {
        // Home scores at 0-0 (takes the lead), again at 1-0 (extends),
        // away answers at 2-0 behind (equalizes phrasing applies when level
        // is restored only from behind).
        let events = vec![
            goal(10, 1, 1, 0),
            goal(25, 1, 2, 0),
            goal(60, 2, 2, 1),
        ];

        let commentary = CommentaryGenerator::generate(&events, 1);

        assert_eq!(commentary.len(), 3);
        assert!(commentary[0].text.contains("takes the lead"));
        assert!(commentary[1].text.contains("extends the lead"));
        assert!(commentary[2].text.contains("equalizes"));
    }

    #[test]
    fn equalizer_then_winner() {
        let events = vec![
            goal(5, 2, 0, 1),
            goal(40, 1, 1, 1),
            goal(80, 1, 2, 1),
        ];

        let commentary = CommentaryGenerator::generate(&events, 1);

        assert!(commentary[0].text.contains("Away FC takes the lead"));
        assert!(commentary[1].text.contains("Home FC equalizes"));
        assert!(commentary[2].text.contains("Home FC takes the lead"));
    }

    #[test]
    fn non_goal_events_produce_no_lines() {
        let events = vec![shot(3, 1), shot(15, 2), goal(20, 1, 1, 0)];
        let commentary = CommentaryGenerator::generate(&events, 1);

        assert_eq!(commentary.len(), 1);
        assert_eq!(commentary[0].minute, 20);
    }

    #[test]
    fn lines_stay_in_minute_order() {
        let events = vec![goal(12, 1, 1, 0), goal(47, 2, 1, 1), goal(90, 2, 1, 2)];
        let commentary = CommentaryGenerator::generate(&events, 1);

        for pair in commentary.windows(2) {
            assert!(pair[0].minute <= pair[1].minute);
        }
    }
}
