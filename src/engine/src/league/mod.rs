pub mod schedule;
pub mod season;
pub mod table;

pub use schedule::{Fixture, Matchday, Schedule, ScheduleGenerator};
pub use season::Season;
pub use table::{top_scorers, LeagueTable, MatchOutcome, ScorerRow, TableRow};
