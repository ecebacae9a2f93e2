pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod session;

// Re-export club items
pub use club::{
    dedup_squad, FieldSlot, Formation, Lineup, LineupManager, Partition, PerformanceCalculator,
    Player, PlayerAttributes, PlayStyle, PositionFit, Role, Team, TeamBuilder, TeamRecord,
};

// Re-export league items
pub use league::{
    top_scorers, Fixture, LeagueTable, MatchOutcome, Matchday, Schedule, ScheduleGenerator,
    ScorerRow, Season, TableRow,
};

// Re-export match items
pub use r#match::{
    CommentaryGenerator, CommentaryLine, Match, MatchEngine, MatchEvent, MatchEventKind,
    MatchResult, MatchSquad, MATCH_MINUTES,
};

pub use error::EngineError;
pub use session::{GameState, StateStore};
