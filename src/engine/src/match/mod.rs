pub mod commentary;
pub mod engine;
pub mod result;
pub mod simulator;
pub mod squad;

pub use commentary::{CommentaryGenerator, CommentaryLine};
pub use engine::{MatchEngine, MATCH_MINUTES};
pub use result::{MatchEvent, MatchEventKind, MatchResult};
pub use simulator::Match;
pub use squad::MatchSquad;
