use std::collections::BTreeSet;

use ascent_core::error::MetadataError;
use ascent_core::level::{
    FeatureRecord, JumpBoostPower, MAX_PLATFORM_DISTANCE_STEPS, MAX_PLATFORM_OFFSET,
    MovementProfile, OFFSET_WIDTH, PlatformRecord, RiseSectionData,
};
use ascent_core::metadata::{self, SectionType, StepMetadata};
use ascent_core::random::RandomSource;

use crate::error::GenerationError;
use crate::sampler::{sample_indices, split_by_weights};

/// Horizontal travel a moving platform may reserve and still fit in the world.
const MAX_MOVEMENT_RANGE: f32 = MAX_PLATFORM_OFFSET as f32 * OFFSET_WIDTH;

/// Category a basic-mode platform is assigned before its movement is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCategory {
    Normal,
    Moving,
    Reposition,
}

/// Disjoint index sets over the filled steps of a basic section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformPartition {
    pub normal: BTreeSet<usize>,
    pub moving: BTreeSet<usize>,
    pub reposition: BTreeSet<usize>,
}

impl PlatformPartition {
    pub fn category(&self, index: usize) -> PlatformCategory {
        if self.moving.contains(&index) {
            PlatformCategory::Moving
        } else if self.reposition.contains(&index) {
            PlatformCategory::Reposition
        } else {
            PlatformCategory::Normal
        }
    }
}

/// Disjoint index sets of platforms carrying a jump boost, per tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpBoostTiers {
    pub low: BTreeSet<usize>,
    pub medium: BTreeSet<usize>,
    pub high: BTreeSet<usize>,
}

impl JumpBoostTiers {
    pub fn power_at(&self, index: usize) -> Option<JumpBoostPower> {
        if self.low.contains(&index) {
            Some(JumpBoostPower::Low)
        } else if self.medium.contains(&index) {
            Some(JumpBoostPower::Medium)
        } else if self.high.contains(&index) {
            Some(JumpBoostPower::High)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.medium.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn shifted(self, by: usize) -> Self {
        let shift = |set: BTreeSet<usize>| set.into_iter().map(|i| i + by).collect();
        Self {
            low: shift(self.low),
            medium: shift(self.medium),
            high: shift(self.high),
        }
    }
}

/// Tuning values of a basic section, parsed up front so bad metadata fails
/// before any random draw.
#[derive(Debug, Clone, Copy)]
struct BasicParams {
    platform_weights: [f32; 3],
    jump_boost_fraction: f32,
    tier_weights: [f32; 3],
    moving_speed: (f32, f32),
    moving_range: (f32, f32),
    reposition_range: (f32, f32),
}

impl BasicParams {
    fn parse(metadata: &StepMetadata) -> Result<Self, MetadataError> {
        let jump_boost_fraction = metadata.property(metadata::JUMP_BOOST_FRACTION)?;
        if jump_boost_fraction > 1.0 {
            return Err(MetadataError::FractionOutOfRange {
                section: metadata.name.clone(),
                key: metadata::JUMP_BOOST_FRACTION.to_string(),
                value: jump_boost_fraction,
            });
        }

        let params = Self {
            platform_weights: [
                metadata.property(metadata::NORMAL_PLATFORM_WEIGHT)?,
                metadata.property(metadata::MOVING_PLATFORM_WEIGHT)?,
                metadata.property(metadata::REPOSITION_PLATFORM_WEIGHT)?,
            ],
            jump_boost_fraction,
            tier_weights: parse_tier_weights(metadata)?,
            moving_speed: metadata.property_range(
                metadata::MIN_MOVING_SPEED,
                metadata::MAX_MOVING_SPEED,
                "moving speed",
            )?,
            moving_range: metadata.property_range(
                metadata::MIN_MOVING_RANGE,
                metadata::MAX_MOVING_RANGE,
                "moving range",
            )?,
            reposition_range: metadata.property_range(
                metadata::MIN_REPOSITION_RANGE,
                metadata::MAX_REPOSITION_RANGE,
                "reposition range",
            )?,
        };

        for (key, value) in [
            (metadata::MAX_MOVING_RANGE, params.moving_range.1),
            (metadata::MAX_REPOSITION_RANGE, params.reposition_range.1),
        ] {
            if value > MAX_MOVEMENT_RANGE {
                return Err(MetadataError::MovementRangeTooWide {
                    section: metadata.name.clone(),
                    key: key.to_string(),
                    value,
                    limit: MAX_MOVEMENT_RANGE,
                });
            }
        }
        Ok(params)
    }
}

fn parse_tier_weights(metadata: &StepMetadata) -> Result<[f32; 3], MetadataError> {
    Ok([
        metadata.property(metadata::JUMP_BOOST_LOW_WEIGHT)?,
        metadata.property(metadata::JUMP_BOOST_MEDIUM_WEIGHT)?,
        metadata.property(metadata::JUMP_BOOST_HIGH_WEIGHT)?,
    ])
}

/// Generate a rise section from its metadata.
///
/// The type tag picks the algorithm; any metadata problem aborts generation.
pub fn generate_section<R: RandomSource + ?Sized>(
    metadata: &StepMetadata,
    rng: &mut R,
) -> Result<RiseSectionData, GenerationError> {
    let section_type = metadata.section_type()?;
    metadata.validate_bounds()?;

    let section = match section_type {
        SectionType::Basic => generate_basic(metadata, BasicParams::parse(metadata)?, rng),
        SectionType::JumpBoost => {
            // two steps are dropped below, and at least one must remain
            let required = 2 * metadata.max_step_distance;
            if metadata.min_step_range <= required {
                return Err(MetadataError::StepRangeTooShort {
                    section: metadata.name.clone(),
                    min: metadata.min_step_range,
                    required,
                }
                .into());
            }
            generate_jump_boost(metadata, parse_tier_weights(metadata)?, rng)
        },
    };

    if section.platforms.is_empty() {
        return Err(GenerationError::EmptySection {
            section: metadata.name.clone(),
        });
    }

    tracing::debug!(
        section = %section.name,
        mode = ?section_type,
        step_range = section.step_range,
        platforms = section.platforms.len(),
        "generated rise section"
    );
    Ok(section)
}

/// Steps reached by walking up from 0 in random strides of
/// `[min_distance, max_distance]` while staying below `step_range`.
pub fn filled_steps<R: RandomSource + ?Sized>(
    rng: &mut R,
    step_range: i32,
    min_distance: i32,
    max_distance: i32,
) -> Vec<i32> {
    let mut steps = Vec::new();
    let mut current = 0;
    while current < step_range {
        steps.push(current);
        current += rng.int_in(min_distance, max_distance).max(1);
    }
    steps
}

/// Split `count` platforms into normal, moving and reposition sets.
///
/// Each share is floored; indices left over after rounding stay normal.
pub fn partition_platforms<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: usize,
    weights: [f32; 3],
) -> PlatformPartition {
    let total: f32 = weights.iter().sum();
    let share = |weight: f32| {
        if total > 0.0 {
            ((weight / total) * count as f32) as usize
        } else {
            0
        }
    };

    let mut normal = sample_indices(rng, count, share(weights[0]), &BTreeSet::new());
    let moving = sample_indices(rng, count, share(weights[1]), &normal);
    let taken: BTreeSet<usize> = normal.union(&moving).copied().collect();
    let reposition = sample_indices(rng, count, share(weights[2]), &taken);

    normal.extend((0..count).filter(|i| !moving.contains(i) && !reposition.contains(i)));
    PlatformPartition {
        normal,
        moving,
        reposition,
    }
}

/// Pick `count` boosted platforms out of `population`, split into tiers by
/// `weights`. The high tier absorbs the rounding remainder.
pub fn assign_jump_boosts<R: RandomSource + ?Sized>(
    rng: &mut R,
    population: usize,
    count: usize,
    weights: [f32; 3],
) -> JumpBoostTiers {
    let [low_count, medium_count, high_count] = split_by_weights(count, weights);

    let low = sample_indices(rng, population, low_count, &BTreeSet::new());
    let medium = sample_indices(rng, population, medium_count, &low);
    let taken: BTreeSet<usize> = low.union(&medium).copied().collect();
    let high = sample_indices(rng, population, high_count, &taken);

    JumpBoostTiers { low, medium, high }
}

fn generate_basic<R: RandomSource + ?Sized>(
    metadata: &StepMetadata,
    params: BasicParams,
    rng: &mut R,
) -> RiseSectionData {
    let step_range = rng.int_in(metadata.min_step_range, metadata.max_step_range);
    let steps = filled_steps(
        rng,
        step_range,
        metadata.min_step_distance,
        metadata.max_step_distance,
    );

    let partition = partition_platforms(rng, steps.len(), params.platform_weights);
    let boost_count = (steps.len() as f32 * params.jump_boost_fraction) as usize;
    let tiers = assign_jump_boosts(rng, steps.len(), boost_count, params.tier_weights);

    let platforms = steps
        .iter()
        .enumerate()
        .map(|(i, &step)| {
            let movement = match partition.category(i) {
                PlatformCategory::Normal => MovementProfile::None,
                PlatformCategory::Moving => {
                    let speed = rng.float_in(params.moving_speed.0, params.moving_speed.1);
                    let range = rng.float_in(params.moving_range.0, params.moving_range.1);
                    MovementProfile::Horizontal {
                        range,
                        speed,
                        initial_offset: rng.float_in(0.0, range * 2.0),
                    }
                },
                PlatformCategory::Reposition => MovementProfile::Reposition {
                    range: rng.float_in(params.reposition_range.0, params.reposition_range.1),
                    initial_right: rng.coin_flip(),
                },
            };
            build_platform(rng, step, movement, tiers.power_at(i))
        })
        .collect();

    RiseSectionData {
        name: metadata.name.clone(),
        step_range,
        difficulty: metadata.difficulty,
        platforms,
    }
}

fn generate_jump_boost<R: RandomSource + ?Sized>(
    metadata: &StepMetadata,
    tier_weights: [f32; 3],
    rng: &mut R,
) -> RiseSectionData {
    let step_range = rng.int_in(metadata.min_step_range, metadata.max_step_range);
    let mut steps = filled_steps(
        rng,
        step_range,
        metadata.min_step_distance,
        metadata.max_step_distance,
    );

    // The two lowest steps never carry a boost; they are replaced by plain
    // filler platforms spaced at the largest reachable gap.
    let dropped = steps.len().min(2);
    steps.drain(..dropped);
    let eligible = steps.len();
    let first_eligible = steps.first().copied().unwrap_or(step_range);
    let fillers: Vec<i32> = (0..first_eligible)
        .step_by(MAX_PLATFORM_DISTANCE_STEPS as usize)
        .collect();
    let filler_count = fillers.len();
    steps.extend(fillers);
    steps.sort_unstable();

    let tiers = assign_jump_boosts(rng, eligible, eligible, tier_weights).shifted(filler_count);

    let platforms = steps
        .iter()
        .enumerate()
        .map(|(i, &step)| build_platform(rng, step, MovementProfile::None, tiers.power_at(i)))
        .collect();

    RiseSectionData {
        name: metadata.name.clone(),
        step_range,
        difficulty: metadata.difficulty,
        platforms,
    }
}

fn build_platform<R: RandomSource + ?Sized>(
    rng: &mut R,
    step: i32,
    movement: MovementProfile,
    boost: Option<JumpBoostPower>,
) -> PlatformRecord {
    let mut record = PlatformRecord::new(step, platform_offset(rng, &movement));
    record.movement = movement;
    if let Some(power) = boost {
        record.features.push(FeatureRecord::JumpBoost {
            position: rng.unit(),
            power,
        });
    }
    record
}

/// Random offset slot that keeps the platform's whole travel inside the world.
fn platform_offset<R: RandomSource + ?Sized>(rng: &mut R, movement: &MovementProfile) -> i32 {
    if movement.is_static() {
        return rng.int_in(0, MAX_PLATFORM_OFFSET);
    }
    let range_in_offsets = (movement.horizontal_range() / OFFSET_WIDTH).ceil() as i32;
    rng.int_in(0, (MAX_PLATFORM_OFFSET - range_in_offsets).max(0))
}
