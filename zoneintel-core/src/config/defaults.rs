//! Default values for every tunable weight and threshold, in one place.

// ── Anchor selection ─────────────────────────────────────────────────────

pub const DEFAULT_ANCHOR_RADII_M: [f64; 3] = [150.0, 300.0, 500.0];
pub const DEFAULT_WEIGHT_PRIORITY: f64 = 100.0;
pub const DEFAULT_WEIGHT_PROXIMITY: f64 = 50.0;
pub const DEFAULT_WEIGHT_CONNECTIVITY: f64 = 30.0;
pub const DEFAULT_WEIGHT_TAG_RICHNESS: f64 = 20.0;
/// Tag count at which the richness factor saturates.
pub const DEFAULT_TAG_RICHNESS_CAPACITY: usize = 5;

// ── Texture classification cascade ───────────────────────────────────────

pub const MARKET_RATIO_THRESHOLD: f64 = 0.30;
pub const BAR_RATIO_THRESHOLD: f64 = 0.25;
pub const CAFE_RATIO_THRESHOLD: f64 = 0.25;
pub const TEMPLE_RATIO_THRESHOLD: f64 = 0.15;
pub const PARK_RATIO_THRESHOLD: f64 = 0.20;
pub const TRANSIT_RATIO_THRESHOLD: f64 = 0.15;
pub const TOURIST_RATIO_THRESHOLD: f64 = 0.20;
pub const RESIDENTIAL_POI_DENSITY: f64 = 20.0;

pub const SECONDARY_CAFE_THRESHOLD: f64 = 0.15;
pub const SECONDARY_NIGHTLIFE_THRESHOLD: f64 = 0.10;
pub const SECONDARY_MARKET_THRESHOLD: f64 = 0.15;

// ── Dynamic shift ────────────────────────────────────────────────────────

pub const NIGHT_START_HOUR: u32 = 22;
pub const NIGHT_END_HOUR: u32 = 6;
/// Net modifier magnitude below which the texture does not move at all.
pub const SHIFT_STEP_THRESHOLD: f64 = 0.5;
/// Net modifier magnitude above which the texture may jump two spectrum
/// steps in a single evaluation.
pub const LARGE_SHIFT_THRESHOLD: f64 = 1.2;
/// Ceiling on the incident modifier so report floods cannot run away.
pub const INCIDENT_MODIFIER_CAP: f64 = 1.0;

// ── Trust & confidence ───────────────────────────────────────────────────

pub const DEFAULT_DECAY_FACTOR: f64 = 0.98;
pub const MIN_VOTER_LEVEL: u32 = 2;
pub const CONSENSUS_ACCURATE_VOTES: usize = 3;
pub const AUTO_VERIFY_TRUST: f64 = 20.0;
pub const VOTE_WEIGHT_CAP: f64 = 2.0;
pub const KARMA_WEIGHT_DIVISOR: f64 = 1000.0;
pub const TRUST_STEP: f64 = 10.0;
/// Karma paid for an ordinary accepted vote.
pub const VOTE_KARMA_REWARD: u32 = 5;
/// Karma paid to the voter whose accurate vote triggers consensus.
/// Deliberately higher than the ordinary reward.
pub const CONSENSUS_KARMA_REWARD: u32 = 25;

// ── Ranking ──────────────────────────────────────────────────────────────

pub const SEARCH_WEIGHT_TEXT: f64 = 3.0;
pub const SEARCH_WEIGHT_ANCHOR: f64 = 2.0;
pub const SEARCH_WEIGHT_FRESHNESS: f64 = 1.0;
pub const SEARCH_WEIGHT_HASSLE: f64 = 1.5;
pub const SEARCH_WEIGHT_PRICE: f64 = 1.2;
pub const SEARCH_WEIGHT_LOCAL: f64 = 0.8;
pub const SEARCH_WEIGHT_DISTANCE: f64 = 2.0;
pub const TEXTURE_FILTER_BONUS: f64 = 1.5;
/// Fixed freshness boost; not derived from recency data.
pub const FRESHNESS_BOOST: f64 = 0.5;
pub const DISTANCE_SCORE_RANGE_KM: f64 = 50.0;

pub const CORRIDOR_WEIGHT_VITALITY: f64 = 0.4;
pub const CORRIDOR_WEIGHT_LIGHTING: f64 = 0.3;
pub const CORRIDOR_WEIGHT_FOOT_TRAFFIC: f64 = 0.3;
pub const MAX_WAYPOINT_CORRIDORS: usize = 3;
pub const MIN_LIT_ROUTE_LIGHTING: f64 = 0.5;
pub const MIN_DESTINATION_VITALITY: f64 = 0.6;
pub const LOW_VITALITY_THRESHOLD: f64 = 30.0;
pub const SHORT_PATH_M: f64 = 500.0;
