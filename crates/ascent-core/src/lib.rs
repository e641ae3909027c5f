pub mod assets;
pub mod entity;
pub mod error;
pub mod events;
pub mod geometry;
pub mod level;
pub mod metadata;
pub mod random;
pub mod timer;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::metadata::{self, StepMetadata};

    /// Deterministic random source for reproducible tests.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Basic-mode metadata with the given platform weights
    /// (normal, moving, reposition) and no jump boosts.
    pub fn basic_metadata(
        min_step_range: i32,
        max_step_range: i32,
        min_step_distance: i32,
        max_step_distance: i32,
        weights: (f32, f32, f32),
    ) -> StepMetadata {
        let properties = BTreeMap::from([
            (metadata::NORMAL_PLATFORM_WEIGHT, weights.0),
            (metadata::MOVING_PLATFORM_WEIGHT, weights.1),
            (metadata::REPOSITION_PLATFORM_WEIGHT, weights.2),
            (metadata::JUMP_BOOST_FRACTION, 0.0),
            (metadata::JUMP_BOOST_LOW_WEIGHT, 1.0),
            (metadata::JUMP_BOOST_MEDIUM_WEIGHT, 1.0),
            (metadata::JUMP_BOOST_HIGH_WEIGHT, 1.0),
            (metadata::MIN_MOVING_SPEED, 40.0),
            (metadata::MAX_MOVING_SPEED, 80.0),
            (metadata::MIN_MOVING_RANGE, 40.0),
            (metadata::MAX_MOVING_RANGE, 120.0),
            (metadata::MIN_REPOSITION_RANGE, 100.0),
            (metadata::MAX_REPOSITION_RANGE, 240.0),
        ]);
        StepMetadata {
            name: "test-basic".to_string(),
            section_type: "basic".to_string(),
            min_step_range,
            max_step_range,
            min_step_distance,
            max_step_distance,
            difficulty: 0,
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Jump-boost-mode metadata with equal tier weights.
    pub fn jump_boost_metadata(
        min_step_range: i32,
        max_step_range: i32,
        min_step_distance: i32,
        max_step_distance: i32,
    ) -> StepMetadata {
        let properties = BTreeMap::from([
            (metadata::JUMP_BOOST_LOW_WEIGHT, "1"),
            (metadata::JUMP_BOOST_MEDIUM_WEIGHT, "1"),
            (metadata::JUMP_BOOST_HIGH_WEIGHT, "1"),
        ]);
        StepMetadata {
            name: "test-jumpboost".to_string(),
            section_type: "jumpboost".to_string(),
            min_step_range,
            max_step_range,
            min_step_distance,
            max_step_distance,
            difficulty: 0,
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Replace (or add) one property on `metadata`.
    pub fn with_property(mut metadata: StepMetadata, key: &str, value: &str) -> StepMetadata {
        metadata
            .properties
            .insert(key.to_string(), value.to_string());
        metadata
    }
}
