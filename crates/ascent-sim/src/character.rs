use serde::{Deserialize, Serialize};

use ascent_core::entity::EnemyKind;
use ascent_core::geometry::{Rect, Vec2};

pub const CHARACTER_WIDTH: f32 = 60.0;
pub const CHARACTER_HEIGHT: f32 = 80.0;
/// How far left of a platform the character's position still lands on it.
pub const COLLISION_LINE_LENGTH: f32 = 30.0;
/// Trim of the landing segment at the platform's right end.
pub const COLLISION_WIDTH_OFFSET: f32 = 5.0;
/// Horizontal center of the character relative to its left edge.
pub const CENTER_X_OFFSET: f32 = CHARACTER_WIDTH / 2.0;
/// Nudge above the visible window after a fall recovery.
pub const FALL_RECOVERY_EPSILON: f32 = 1e-3;

/// Character state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterState {
    #[default]
    Normal,
    DyingFall,
    DyingFire,
    /// Killed by an enemy; the kind picks the death animation.
    DyingEnemy { enemy: EnemyKind },
    /// Rose past the top of the run.
    End,
}

impl CharacterState {
    pub fn is_dying(&self) -> bool {
        matches!(
            self,
            CharacterState::DyingFall | CharacterState::DyingFire | CharacterState::DyingEnemy { .. }
        )
    }
}

/// The player character. `position` is the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub position: Vec2,
    pub speed: Vec2,
    pub state: CharacterState,
}

impl Character {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            speed: Vec2::ZERO,
            state: CharacterState::Normal,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            CHARACTER_WIDTH,
            CHARACTER_HEIGHT,
        )
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + CENTER_X_OFFSET
    }
}
