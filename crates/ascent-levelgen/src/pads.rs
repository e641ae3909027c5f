use serde::{Deserialize, Serialize};

use ascent_core::geometry::Vec2;
use ascent_core::random::RandomSource;

use crate::free_slots::{FreeSlotTracker, MAX_STEP_X, STEP_X, STEP_Y};

/// Largest vertical gap, in pad steps, allowed between consecutive filled steps.
pub const MAX_STEP_Y_DISTANCE: i32 = 5;

/// A pad placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    pub step_x: i32,
    pub step_y: i32,
}

/// Pads for one vertical span of `step_range` steps, sorted by `step_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadCollection {
    pub step_range: i32,
    pub pads: Vec<Pad>,
}

impl PadCollection {
    /// Distinct filled steps in ascending order.
    pub fn filled_steps(&self) -> Vec<i32> {
        let mut steps: Vec<i32> = self.pads.iter().map(|p| p.step_y).collect();
        steps.dedup();
        steps
    }
}

/// Pad positions of several stacked collections, in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAreaPath {
    pub total_height: f32,
    pub pad_positions: Vec<Vec2>,
}

/// Scatter `pad_count` non-overlapping pads over `[0, step_range)` steps, then
/// add pads until step 0 is filled and no gap exceeds [`MAX_STEP_Y_DISTANCE`].
pub fn generate_pad_collection<R: RandomSource + ?Sized>(
    rng: &mut R,
    step_range: i32,
    pad_count: usize,
) -> PadCollection {
    let step_range = step_range.max(1);
    let mut tracker = FreeSlotTracker::new(step_range as usize);
    let mut pads = Vec::with_capacity(pad_count);

    for _ in 0..pad_count {
        let Some((slot, step)) = tracker.pick_random_free(rng) else {
            tracing::debug!(placed = pads.len(), pad_count, "pad grid full");
            break;
        };
        pads.push(Pad {
            step_x: slot,
            step_y: step as i32,
        });
        tracker.invalidate(step, slot);
    }

    let mut repaired = 0usize;
    while let Some(step_y) = first_missing_step(step_range, &pads) {
        pads.push(Pad {
            step_x: rng.int_in(0, MAX_STEP_X - 1),
            step_y,
        });
        repaired += 1;
    }
    if repaired > 0 {
        tracing::trace!(repaired, "filled pad gaps");
    }

    pads.sort_by_key(|p| p.step_y);
    PadCollection { step_range, pads }
}

/// Lowest step that must hold a pad but does not: step 0, then the first
/// step past an oversized gap (including the gap up to `step_range`).
fn first_missing_step(step_range: i32, pads: &[Pad]) -> Option<i32> {
    let mut steps: Vec<i32> = pads.iter().map(|p| p.step_y).collect();
    steps.sort_unstable();
    steps.dedup();

    let (&first, &last) = match (steps.first(), steps.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Some(0),
    };
    if first != 0 {
        return Some(0);
    }

    if let Some(gap) = steps.windows(2).find(|w| w[1] - w[0] > MAX_STEP_Y_DISTANCE) {
        return Some(gap[0] + MAX_STEP_Y_DISTANCE);
    }

    if step_range - last > MAX_STEP_Y_DISTANCE {
        return Some(last + MAX_STEP_Y_DISTANCE);
    }
    None
}

/// Stack `collections` bottom to top and convert pad grid coordinates to
/// world positions.
pub fn build_game_area(collections: &[PadCollection]) -> GameAreaPath {
    let total_pads = collections.iter().map(|c| c.pads.len()).sum();
    let mut pad_positions = Vec::with_capacity(total_pads);

    let mut start_step = 0;
    for collection in collections {
        pad_positions.extend(collection.pads.iter().map(|pad| {
            Vec2::new(
                pad.step_x as f32 * STEP_X,
                (pad.step_y + start_step) as f32 * STEP_Y,
            )
        }));
        start_step += collection.step_range;
    }

    GameAreaPath {
        total_height: start_step as f32 * STEP_Y,
        pad_positions,
    }
}
