pub mod player;
pub mod team;

pub use player::{
    dedup_squad, FieldSlot, PerformanceCalculator, Player, PlayerAttributes, PositionFit, Role,
};
pub use team::{
    Formation, Lineup, LineupManager, Partition, PlayStyle, Team, TeamBuilder, TeamRecord,
};
