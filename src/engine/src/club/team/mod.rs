pub mod builder;
pub mod formation;
pub mod lineup;
pub mod team;

pub use builder::{TeamBuilder, TeamRecord};
pub use formation::{Formation, FormationSlot, FORMATIONS};
pub use lineup::{Lineup, LineupManager, Partition, BENCH_MAX, STARTERS_COUNT};
pub use team::{PlayStyle, Team, DEFAULT_TEAM_STRENGTH};
