use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Sentinel opponent inserted when the league has an odd number of teams.
/// Fixtures against it are the matchday's bye and never reach the schedule.
const BYE_TEAM: u32 = u32::MAX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub home_id: u32,
    pub away_id: u32,
    pub matchday: u8,
}

impl Fixture {
    pub fn involves(&self, team_id: u32) -> bool {
        self.home_id == team_id || self.away_id == team_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchday {
    pub day: u8,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub matchdays: Vec<Matchday>,
}

impl Schedule {
    pub fn total_matchdays(&self) -> u8 {
        self.matchdays.len() as u8
    }

    /// Matchdays are numbered from 1.
    pub fn matchday(&self, day: u8) -> Option<&Matchday> {
        self.matchdays.iter().find(|md| md.day == day)
    }

    pub fn fixture_for_team(&self, day: u8, team_id: u32) -> Option<&Fixture> {
        self.matchday(day)
            .and_then(|md| md.fixtures.iter().find(|f| f.involves(team_id)))
    }
}

/// Double round-robin generator using the circle method: the first team
/// stays fixed while the rest rotate one seat per round; the second leg
/// mirrors the first with home and away swapped.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    pub fn generate(team_ids: &[u32]) -> Schedule {
        if team_ids.len() < 2 {
            return Schedule::default();
        }

        let mut ids = team_ids.to_vec();
        if ids.len() % 2 != 0 {
            ids.push(BYE_TEAM);
        }

        let num_matchdays = (ids.len() - 1) as u8;
        let fixed = ids[0];
        let mut rotating: VecDeque<u32> = ids[1..].iter().copied().collect();

        let mut first_leg = Vec::with_capacity(num_matchdays as usize);

        for day in 1..=num_matchdays {
            let round_index = day - 1;
            let mut fixtures = Vec::with_capacity(ids.len() / 2);

            Self::push_fixture(&mut fixtures, fixed, rotating[0], day, round_index);

            // Pair the rotation ends inward; rotating.len() is always odd
            // here so the midpoint rounds up.
            for i in 1..rotating.len().div_ceil(2) {
                let home = rotating[i];
                let away = rotating[rotating.len() - i];
                Self::push_fixture(&mut fixtures, home, away, day, round_index);
            }

            first_leg.push(Matchday { day, fixtures });

            if let Some(last) = rotating.pop_back() {
                rotating.push_front(last);
            }
        }

        let second_leg: Vec<Matchday> = first_leg
            .iter()
            .map(|matchday| {
                let day = matchday.day + num_matchdays;
                Matchday {
                    day,
                    fixtures: matchday
                        .fixtures
                        .iter()
                        .map(|f| Fixture {
                            id: Self::fixture_id(f.away_id, f.home_id, day - 1),
                            home_id: f.away_id,
                            away_id: f.home_id,
                            matchday: day,
                        })
                        .collect(),
                }
            })
            .collect();

        let mut matchdays = first_leg;
        matchdays.extend(second_leg);

        debug!(
            "generated schedule: {} teams, {} matchdays",
            team_ids.len(),
            matchdays.len()
        );

        Schedule { matchdays }
    }

    fn push_fixture(fixtures: &mut Vec<Fixture>, home: u32, away: u32, day: u8, round_index: u8) {
        if home == BYE_TEAM || away == BYE_TEAM {
            return;
        }

        fixtures.push(Fixture {
            id: Self::fixture_id(home, away, round_index),
            home_id: home,
            away_id: away,
            matchday: day,
        });
    }

    fn fixture_id(home_id: u32, away_id: u32, round_index: u8) -> String {
        format!("match-{}-{}-{}", round_index, home_id, away_id)
    }
}
