use std::collections::BTreeSet;

use ascent_core::random::RandomSource;

/// Horizontal grid unit of the pad layout in world units.
pub const STEP_X: f32 = 10.0;
/// Vertical grid unit of the pad layout in world units.
pub const STEP_Y: f32 = 40.0;
/// Pad width in horizontal grid units.
pub const PAD_SIZE_X_STEPS: i32 = 8;
/// Largest horizontal slot a pad may start at and still fit in the world.
pub const MAX_STEP_X: i32 = (ascent_core::level::WORLD_WIDTH / STEP_X) as i32 - PAD_SIZE_X_STEPS;

/// Free horizontal slots per step of a pad grid.
#[derive(Debug, Clone)]
pub struct FreeSlotTracker {
    steps: Vec<BTreeSet<i32>>,
}

impl FreeSlotTracker {
    /// Tracker with every slot `0..=MAX_STEP_X` free on steps `[0, step_range)`.
    pub fn new(step_range: usize) -> Self {
        let all: BTreeSet<i32> = (0..=MAX_STEP_X).collect();
        Self {
            steps: vec![all; step_range],
        }
    }

    pub fn total_free(&self) -> usize {
        self.steps.iter().map(BTreeSet::len).sum()
    }

    pub fn free_on_step(&self, step: usize) -> usize {
        self.steps.get(step).map_or(0, BTreeSet::len)
    }

    /// Draw uniformly over every free `(slot, step)` pair, so crowded steps are
    /// picked less often than empty ones. `None` once the grid is full.
    pub fn pick_random_free<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<(i32, usize)> {
        let total = self.total_free();
        if total == 0 {
            return None;
        }

        let mut index = rng.next_index(total);
        for (step, slots) in self.steps.iter().enumerate() {
            if index < slots.len() {
                return slots.iter().nth(index).map(|&slot| (slot, step));
            }
            index -= slots.len();
        }
        None
    }

    /// Claim the footprint of a pad placed at `slot` on `step`: every slot
    /// that would make another pad overlap it becomes unavailable.
    pub fn invalidate(&mut self, step: usize, slot: i32) {
        let Some(slots) = self.steps.get_mut(step) else {
            return;
        };
        let first = slot - (PAD_SIZE_X_STEPS - 1);
        let last = slot + (PAD_SIZE_X_STEPS - 1);
        slots.retain(|s| *s < first || *s > last);
    }
}
