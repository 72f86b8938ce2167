pub mod corridor;
pub mod observation;
pub mod scored_zone;

pub use corridor::{SafeCorridor, SafeReturnPath};
pub use observation::{Observation, Vote, VoteChoice};
pub use scored_zone::ScoredZone;
