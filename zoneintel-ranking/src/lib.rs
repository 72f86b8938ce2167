//! # zoneintel-ranking
//!
//! The two ranking engines: the search ranker (weighted multi-factor
//! scoring of zones against a text query) and the corridor router
//! (waypoint chains over pre-scored safe corridors). Both are pure with
//! respect to their inputs; the only state is the injected score cache.

pub mod cache;
pub mod corridor;
pub mod search;

pub use cache::ScoreCache;
pub use corridor::{CorridorRouter, RouteConstraints};
pub use search::{SearchFilters, SearchQuery, SearchRanker};
