use chrono::NaiveDate;
use proptest::prelude::*;

use test_fixtures::{baseline, observation, vote};
use zoneintel_core::config::TrustConfig;
use zoneintel_core::models::VoteChoice;
use zoneintel_core::zone::ConfidenceLevel;
use zoneintel_trust::{voter_level, ConfidenceStore, ConsensusEngine};

proptest! {
    // Level bucket always matches the score, through init and decay.
    #[test]
    fn level_always_matches_score(
        poi in 0.0f64..500.0,
        lighting in 0.0f64..1.0,
        transit in 0.0f64..100.0,
        days in 0u32..400,
    ) {
        let store = ConfidenceStore::new(TrustConfig::default());
        store.insert_zone("z", &baseline(poi, lighting, 50.0, transit));

        let mut today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        for _ in 0..days.min(60) {
            store.decay_zone("z", today);
            let c = store.get("z").unwrap();
            prop_assert_eq!(c.level(), ConfidenceLevel::bucket(c.score()));
            today = today.succ_opt().unwrap();
        }
    }

    // Initial confidence is capped below the HIGH bucket.
    #[test]
    fn initial_confidence_never_high(
        poi in 0.0f64..10_000.0,
        lighting in 0.0f64..1.0,
        transit in 0.0f64..100.0,
    ) {
        let store = ConfidenceStore::new(TrustConfig::default());
        store.insert_zone("z", &baseline(poi, lighting, 50.0, transit));
        let c = store.get("z").unwrap();
        prop_assert!(c.score() <= 75.0);
        prop_assert_ne!(c.level(), ConfidenceLevel::High);
    }

    // Voter level derivation is monotonic in karma.
    #[test]
    fn voter_level_monotonic(a in 0u32..100_000, b in 0u32..100_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(voter_level(low) <= voter_level(high));
    }

    // Trust never goes negative, and auto-verification fires exactly when
    // three distinct accurate voters exist or trust strictly exceeds the
    // threshold.
    #[test]
    fn trust_nonnegative_and_consensus_exact(
        choices in prop::collection::vec(any::<bool>(), 1..12),
        karma in prop::collection::vec(400u32..3000, 12),
    ) {
        let cfg = TrustConfig::default();
        let engine = ConsensusEngine::new(cfg);
        engine.register_observation(observation("obs", "zone"));

        let mut distinct_accurate = 0usize;
        for (i, accurate) in choices.iter().enumerate() {
            let choice = if *accurate { VoteChoice::Accurate } else { VoteChoice::Inaccurate };
            let outcome = engine
                .cast_vote(vote("obs", &format!("voter-{i}"), karma[i], choice))
                .unwrap();

            if *accurate {
                distinct_accurate += 1;
            }
            prop_assert!(outcome.new_trust >= 0.0);
            prop_assert_eq!(outcome.distinct_accurate, distinct_accurate);

            let expected_verified = distinct_accurate >= cfg.consensus_accurate_votes
                || outcome.new_trust > cfg.auto_verify_trust;
            // Verification latches: once true it stays true.
            if expected_verified {
                prop_assert!(outcome.verified);
            }
        }
    }
}
